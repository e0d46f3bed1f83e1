// ==========================================
// 参赛数据导入系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 报名表导入与校验管道 + 批次化存取
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{BatchGroup, ImportOutcome, Record, RecordSummary};

// 配置
pub use config::ImportConfig;

// 导入器
pub use importer::{ImportError, ImportResult, RecordImporter, RecordImporterImpl, SheetImporter};

// 仓储
pub use repository::{RecordRepository, RecordRepositoryImpl, RepositoryError, RepositoryResult};

// API
pub use api::RecordApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "参赛数据导入系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
