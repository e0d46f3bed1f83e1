// ==========================================
// 参赛数据导入系统 - 领域层
// ==========================================
// 职责: 定义核心实体与查询视图（不包含业务逻辑）
// ==========================================

pub mod record;

pub use record::{BatchGroup, ImportOutcome, Record, RecordSummary};
