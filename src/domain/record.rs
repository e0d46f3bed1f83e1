// ==========================================
// 参赛数据导入系统 - 记录领域模型
// ==========================================
// 红线: Record 使用 record_type 判别字段 + 通用 data 载荷，
//       不为各报名类别建子类型；仓储与查询只操作通用形态
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// Record - 导入记录
// ==========================================
// 用途: 导入层构造，仓储层落库
// 约束: identity_key 在构造成功的记录上永不为"缺失"
//       （身份标签键存在但值为空时为 ""，口径与源系统一致）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    // ===== 主键 =====
    pub id: Option<String>, // 落库时由仓储分配（UUID），落库前为 None

    // ===== 批次信息 =====
    pub import_batch: String, // 导入来源标识（如文件名），落库后不可变
    pub record_type: String,  // 记录类别判别字段（如 "contestant"）

    // ===== 身份字段 =====
    pub identity_key: String, // 从 data 中按候选标签顺序提取的身份标识

    // ===== 时间信息 =====
    pub imported_at: DateTime<Utc>, // 导入时间，同一次导入的所有记录共享同一时刻

    // ===== 数据载荷 =====
    pub data: HashMap<String, Option<String>>, // 规范化表头 → 可空单元格值
}

impl Record {
    /// 构造一条待落库记录（id 为 None）
    pub fn new(
        import_batch: impl Into<String>,
        record_type: impl Into<String>,
        identity_key: impl Into<String>,
        imported_at: DateTime<Utc>,
        data: HashMap<String, Option<String>>,
    ) -> Self {
        Self {
            id: None,
            import_batch: import_batch.into(),
            record_type: record_type.into(),
            identity_key: identity_key.into(),
            imported_at,
            data,
        }
    }
}

// ==========================================
// RecordSummary - 分组查询中的记录视图
// ==========================================
// 用途: group_by_import_batch 返回 (id, data) 对，
//       供调用方展示已导入数据而无需重读原始表格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: String,
    pub data: HashMap<String, Option<String>>,
}

// ==========================================
// BatchGroup - 按导入批次分组的查询结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchGroup {
    pub batch_id: String,            // 导入批次标识
    pub count: usize,                // 该批次记录数
    pub records: Vec<RecordSummary>, // 该批次全部记录的 (id, data) 视图
}

// ==========================================
// ImportOutcome - 一次导入调用的结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub import_batch: String,       // 本次导入的批次标识
    pub imported_at: DateTime<Utc>, // 本次导入的共享时间戳
    pub sheet_count: usize,         // 工作簿中的工作表总数
    pub record_count: usize,        // 成功落库的记录数
    pub empty_sheets: Vec<String>,  // 无表头行而被跳过的工作表（上报给调用方）
    pub elapsed_ms: u64,            // 导入耗时（毫秒）
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_has_no_id() {
        let mut data = HashMap::new();
        data.insert("Cmnd".to_string(), Some("123".to_string()));

        let record = Record::new("entries.xlsx", "contestant", "123", Utc::now(), data);
        assert!(record.id.is_none());
        assert_eq!(record.import_batch, "entries.xlsx");
        assert_eq!(record.record_type, "contestant");
        assert_eq!(record.identity_key, "123");
    }

    #[test]
    fn test_record_data_roundtrip_json() {
        let mut data = HashMap::new();
        data.insert("Name".to_string(), Some("Alice".to_string()));
        data.insert("Cmnd".to_string(), None);

        let record = Record::new("b", "contestant", "", Utc::now(), data);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
