// ==========================================
// 参赛数据导入系统 - 配置层
// ==========================================
// 红线: 不使用全局可变状态，配置以显式结构体传入导入器
// ==========================================

pub mod import_config;

pub use import_config::ImportConfig;
