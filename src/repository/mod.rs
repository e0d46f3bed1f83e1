// ==========================================
// 参赛数据导入系统 - 数据仓储层
// ==========================================
// 职责: 批次化记录的持久化与存取
// ==========================================

pub mod error;
pub mod record_repo;
pub mod record_repo_impl;

pub use error::{RepositoryError, RepositoryResult};
pub use record_repo::RecordRepository;
pub use record_repo_impl::RecordRepositoryImpl;
