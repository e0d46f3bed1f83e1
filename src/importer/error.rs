// ==========================================
// 参赛数据导入系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 空行终止是控制流而非错误，不出现在本枚举中
// ==========================================

use crate::repository::error::RepositoryError;
use std::collections::HashMap;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("工作簿解析失败: {0}")]
    WorkbookReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 工作表结构错误 =====
    #[error("工作表无表头行: {sheet}")]
    EmptySheet { sheet: String },

    // ===== 数据校验错误 =====
    // 行映射中不含任何已配置的身份标签键时触发；
    // 携带原始映射供运维诊断，整张工作表导入中止
    #[error("行数据缺少身份标识字段 (工作表 {sheet}, 行 {row})")]
    MissingIdentity {
        sheet: String,
        row: usize,
        data: HashMap<String, Option<String>>,
    },

    // ===== 存储错误 =====
    // 原样上抛，导入层不做重试
    #[error("存储层错误: {0}")]
    Storage(#[from] RepositoryError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::WorkbookReadError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
