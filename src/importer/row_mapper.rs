// ==========================================
// 参赛数据导入系统 - 行映射
// ==========================================
// 职责: 表头 token 序列 × 行单元格序列 → 字段映射
// 约定: 行比表头短时映射提前截断（容忍的边界情况，不报错）；
//       行比表头长时多余单元格忽略
// ==========================================

use std::collections::HashMap;

/// 一行数据的映射结果
#[derive(Debug, Clone)]
pub struct MappedRow {
    /// 规范化字段名 → 单元格值（可空）
    pub data: HashMap<String, Option<String>>,
    /// 映射范围内所有值均为空（空行标志，触发工作表终止）
    pub all_null: bool,
}

/// 将第 i 个表头与第 i 个单元格配对，同时计算空行标志
///
/// 纯函数，无副作用
pub fn map_row(labels: &[String], cells: &[Option<String>]) -> MappedRow {
    let mut data = HashMap::new();
    let mut all_null = true;

    for (label, cell) in labels.iter().zip(cells.iter()) {
        data.insert(label.clone(), cell.clone());
        if cell.is_some() {
            all_null = false;
        }
    }

    MappedRow { data, all_null }
}
