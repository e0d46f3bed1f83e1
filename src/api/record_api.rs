// ==========================================
// 参赛数据导入API
// ==========================================
// 职责: 封装导入/查询/删除三个对外操作
// 红线: 薄封装，不含解析与校验逻辑
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ImportConfig;
use crate::domain::BatchGroup;
use crate::importer::{RecordImporter, RecordImporterImpl};
use crate::repository::{RecordRepository, RecordRepositoryImpl};
use serde::{Deserialize, Serialize};

/// 导入API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportApiResponse {
    /// 导入批次标识（文件名或调用方指定）
    pub import_batch: String,
    /// 落库的记录数
    pub imported: usize,
    /// 工作簿中的工作表数
    pub sheets: usize,
    /// 无表头行而被跳过的工作表
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub empty_sheets: Vec<String>,
    /// 导入耗时（毫秒）
    pub elapsed_ms: u64,
}

/// 删除批次响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBatchResponse {
    /// 删除的记录数
    pub deleted: usize,
    /// 操作结果说明
    pub message: String,
}

/// 记录API
pub struct RecordApi {
    db_path: String,
    config: ImportConfig,
}

impl RecordApi {
    /// 创建新的RecordApi实例
    pub fn new(db_path: String, config: ImportConfig) -> Self {
        Self { db_path, config }
    }

    /// 导入记录文件
    ///
    /// # 参数
    /// - file_path: 文件路径（.xlsx/.xls/.csv），文件名即批次标识
    ///
    /// # 返回
    /// - Ok(ImportApiResponse): 导入结果
    /// - Err(ApiError): 错误信息（含工作表/行号上下文）
    pub async fn import_records(&self, file_path: &str) -> ApiResult<ImportApiResponse> {
        let importer = self.create_importer()?;
        let outcome = importer.import_file(file_path).await?;

        Ok(ImportApiResponse {
            import_batch: outcome.import_batch,
            imported: outcome.record_count,
            sheets: outcome.sheet_count,
            empty_sheets: outcome.empty_sheets,
            elapsed_ms: outcome.elapsed_ms,
        })
    }

    /// 从内存字节流导入工作簿
    ///
    /// # 参数
    /// - bytes: .xlsx 二进制内容
    /// - import_batch: 批次标识
    pub async fn import_workbook_bytes(
        &self,
        bytes: Vec<u8>,
        import_batch: &str,
    ) -> ApiResult<ImportApiResponse> {
        if import_batch.trim().is_empty() {
            return Err(ApiError::InvalidInput("批次标识不能为空".to_string()));
        }

        let importer = self.create_importer()?;
        let outcome = importer.import_workbook_bytes(bytes, import_batch).await?;

        Ok(ImportApiResponse {
            import_batch: outcome.import_batch,
            imported: outcome.record_count,
            sheets: outcome.sheet_count,
            empty_sheets: outcome.empty_sheets,
            elapsed_ms: outcome.elapsed_ms,
        })
    }

    /// 列出全部导入批次（批次标识、记录数、记录载荷）
    pub async fn list_record_batches(&self) -> ApiResult<Vec<BatchGroup>> {
        let repo = self.create_repo()?;
        let groups = repo.group_by_import_batch().await?;
        Ok(groups)
    }

    /// 按批次标识删除整批记录
    ///
    /// # 说明
    /// 用于回滚或替换一次历史导入；不存在的批次返回 NotFound
    pub async fn delete_record_batch(&self, batch_id: &str) -> ApiResult<DeleteBatchResponse> {
        if batch_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("批次标识不能为空".to_string()));
        }

        let repo = self.create_repo()?;
        let deleted = repo.delete_all_by_import_batch(batch_id).await?;
        if deleted == 0 {
            return Err(ApiError::NotFound(format!("导入批次不存在: {}", batch_id)));
        }

        tracing::info!(batch_id = %batch_id, deleted = deleted, "成功删除导入批次");

        Ok(DeleteBatchResponse {
            deleted,
            message: format!("成功删除导入批次 {}: {} 条记录", batch_id, deleted),
        })
    }

    /// 创建记录仓储实例
    fn create_repo(&self) -> ApiResult<RecordRepositoryImpl> {
        let repo = RecordRepositoryImpl::new(&self.db_path)?;
        Ok(repo)
    }

    /// 创建RecordImporter实例
    fn create_importer(&self) -> ApiResult<RecordImporterImpl<RecordRepositoryImpl>> {
        let repo = self.create_repo()?;
        Ok(RecordImporterImpl::new(repo, self.config.clone()))
    }
}
