// ==========================================
// 参赛数据导入系统 - 导入配置
// ==========================================
// 职责: 身份标签候选列表与记录类别的显式配置
// 红线: 配置在构造时注入，导入过程中只读
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认身份标签候选（按优先级排序，先匹配先用）
/// Cmnd = 旧证件号, Cccd = 新证件号
pub const DEFAULT_IDENTITY_LABELS: [&str; 2] = ["Cmnd", "Cccd"];

/// 默认记录类别
pub const DEFAULT_RECORD_TYPE: &str = "contestant";

// ==========================================
// ImportConfig - 导入配置
// ==========================================
// 用途: 传入 SheetImporter / RecordImporter，驱动身份校验
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// 身份标签候选列表（规范化后的表头 token，顺序即优先级）
    #[serde(default = "default_identity_labels")]
    pub identity_labels: Vec<String>,

    /// 本次导入的记录类别判别值
    #[serde(default = "default_record_type")]
    pub record_type: String,
}

fn default_identity_labels() -> Vec<String> {
    DEFAULT_IDENTITY_LABELS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_record_type() -> String {
    DEFAULT_RECORD_TYPE.to_string()
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            identity_labels: default_identity_labels(),
            record_type: default_record_type(),
        }
    }
}

impl ImportConfig {
    /// 指定记录类别、沿用默认身份标签的便捷构造
    pub fn with_record_type(record_type: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImportConfig::default();
        assert_eq!(config.identity_labels, vec!["Cmnd", "Cccd"]);
        assert_eq!(config.record_type, "contestant");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ImportConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.identity_labels, vec!["Cmnd", "Cccd"]);

        let config: ImportConfig =
            serde_json::from_str(r#"{"record_type":"judge"}"#).unwrap();
        assert_eq!(config.record_type, "judge");
        assert_eq!(config.identity_labels, vec!["Cmnd", "Cccd"]);
    }
}
