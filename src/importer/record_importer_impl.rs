// ==========================================
// 参赛数据导入系统 - 记录导入器实现
// ==========================================
// 职责: 整合导入流程，从文件到数据库
// 流程: 解析 → 逐工作表(表头/映射/校验) → 一次性落库
// ==========================================

use crate::config::ImportConfig;
use crate::domain::ImportOutcome;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_importer::RecordImporter;
use crate::importer::sheet_importer::SheetImporter;
use crate::importer::workbook_reader::{ExcelReader, RawSheet, WorkbookReader};
use crate::repository::RecordRepository;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// RecordImporterImpl - 记录导入器实现
// ==========================================
pub struct RecordImporterImpl<R>
where
    R: RecordRepository,
{
    // 数据访问层
    repo: R,

    // 导入配置（身份标签、记录类别）
    config: ImportConfig,
}

impl<R> RecordImporterImpl<R>
where
    R: RecordRepository,
{
    /// 创建新的 RecordImporter 实例
    ///
    /// # 参数
    /// - repo: 记录仓储
    /// - config: 导入配置
    pub fn new(repo: R, config: ImportConfig) -> Self {
        Self { repo, config }
    }

    /// 逐工作表导入并一次性落库
    ///
    /// # 约定
    /// - 工作表按工作簿顺序处理，结果按序拼接
    /// - EmptySheet 只影响该工作表: 记入 outcome.empty_sheets 后继续
    /// - 其余错误（身份校验失败等）中止整个导入调用
    async fn import_sheets(
        &self,
        sheets: Vec<RawSheet>,
        import_batch: &str,
        start_time: Instant,
    ) -> ImportResult<ImportOutcome> {
        let imported_at = Utc::now();
        let sheet_importer = SheetImporter::new(&self.config, import_batch, imported_at);

        let sheet_count = sheets.len();
        let mut records = Vec::new();
        let mut empty_sheets = Vec::new();

        for sheet in &sheets {
            match sheet_importer.import_sheet(&sheet.name, &sheet.rows) {
                Ok(mut sheet_records) => {
                    debug!(
                        sheet = %sheet.name,
                        records = sheet_records.len(),
                        "工作表导入完成"
                    );
                    records.append(&mut sheet_records);
                }
                Err(ImportError::EmptySheet { sheet }) => {
                    // 无表头的工作表不产出记录，也不中止其余工作表
                    warn!(sheet = %sheet, "工作表无表头行，跳过");
                    empty_sheets.push(sheet);
                }
                Err(e) => {
                    error!(import_batch = %import_batch, error = %e, "导入中止");
                    return Err(e);
                }
            }
        }

        // 每次导入调用只发起一次 save_all，部分失败语义由仓储承担
        let record_count = records.len();
        self.repo.save_all(records).await?;

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            import_batch = %import_batch,
            sheets = sheet_count,
            records = record_count,
            empty_sheets = empty_sheets.len(),
            elapsed_ms = elapsed_ms,
            "记录导入完成"
        );

        Ok(ImportOutcome {
            import_batch: import_batch.to_string(),
            imported_at,
            sheet_count,
            record_count,
            empty_sheets,
            elapsed_ms,
        })
    }
}

#[async_trait::async_trait]
impl<R> RecordImporter for RecordImporterImpl<R>
where
    R: RecordRepository + Send + Sync,
{
    #[instrument(skip(self, file_path))]
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportOutcome> {
        let start_time = Instant::now();
        let path = file_path.as_ref();

        // 批次标识取文件名（含扩展名），与存量数据的删除/分组口径一致
        let import_batch = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        info!(import_batch = %import_batch, "开始导入记录");

        let sheets = WorkbookReader::read(path)?;
        self.import_sheets(sheets, &import_batch, start_time).await
    }

    #[instrument(skip(self, bytes))]
    async fn import_workbook_bytes(
        &self,
        bytes: Vec<u8>,
        import_batch: &str,
    ) -> ImportResult<ImportOutcome> {
        let start_time = Instant::now();
        info!(import_batch = %import_batch, size = bytes.len(), "开始导入工作簿字节流");

        let sheets = ExcelReader::read_bytes(bytes)?;
        self.import_sheets(sheets, import_batch, start_time).await
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ImportResult<Vec<Result<ImportOutcome, String>>> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "开始批量导入文件");

        // 为每个文件创建导入任务
        let import_tasks = file_paths.into_iter().map(|path| {
            let path_str = path.as_ref().to_str().unwrap_or("unknown").to_string();
            async move {
                match self.import_file(path).await {
                    Ok(outcome) => {
                        info!(
                            file = %path_str,
                            records = outcome.record_count,
                            "文件导入成功"
                        );
                        Ok(outcome)
                    }
                    Err(e) => {
                        error!(file = %path_str, error = %e, "文件导入失败");
                        Err(format!("文件 {} 导入失败: {}", path_str, e))
                    }
                }
            }
        });

        // 并发执行所有导入任务
        let results = join_all(import_tasks).await;

        info!(
            total = results.len(),
            success = results.iter().filter(|r| r.is_ok()).count(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "批量导入完成"
        );

        Ok(results)
    }
}
