// ==========================================
// 参赛数据导入系统 - 记录导入 Trait
// ==========================================
// 职责: 定义记录导入接口（不包含实现）
// ==========================================

use crate::domain::ImportOutcome;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// RecordImporter Trait
// ==========================================
// 用途: 记录导入主接口
// 实现者: RecordImporterImpl
#[async_trait]
pub trait RecordImporter: Send + Sync {
    /// 从文件导入记录（.xlsx/.xls/.csv，按扩展名选择解析器）
    ///
    /// # 参数
    /// - file_path: 文件路径，文件名同时作为导入批次标识
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 导入结果（批次标识、记录数、被跳过的空工作表）
    /// - Err: 解析错误、校验错误、存储错误
    ///
    /// # 导入流程
    /// 1. 读取工作簿，单元格归一化为可空字符串
    /// 2. 逐工作表执行 SheetImporter，按工作簿顺序拼接结果
    /// 3. 全部记录一次 save_all 落库（原子性由仓储承担）
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportOutcome>;

    /// 从内存字节流导入 .xlsx 工作簿
    ///
    /// # 参数
    /// - bytes: 工作簿二进制内容
    /// - import_batch: 调用方提供的批次标识
    async fn import_workbook_bytes(
        &self,
        bytes: Vec<u8>,
        import_batch: &str,
    ) -> ImportResult<ImportOutcome>;

    /// 批量导入多个文件（并发执行）
    ///
    /// # 说明
    /// - 每个文件的导入相互独立，单个失败不影响其他文件
    /// - 失败项以错误描述字符串返回
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ImportResult<Vec<Result<ImportOutcome, String>>>;
}
