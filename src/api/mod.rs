// ==========================================
// 参赛数据导入系统 - API 层
// ==========================================
// 职责: 对外业务接口（导入/查询/删除）
// ==========================================

pub mod error;
pub mod record_api;

pub use error::{ApiError, ApiResult};
pub use record_api::{DeleteBatchResponse, ImportApiResponse, RecordApi};
