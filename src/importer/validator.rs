// ==========================================
// 参赛数据导入系统 - 身份校验
// ==========================================
// 职责: 在行映射中按候选标签顺序提取身份标识
// 口径: 标签"键存在"即视为命中，即使对应值为空——
//       此时身份标识为 ""（与源系统行为一致，见 DESIGN.md）
// ==========================================

use std::collections::HashMap;

/// 按候选标签顺序扫描映射，返回第一个命中的身份标识值
///
/// # 返回
/// - Some(value): 第一个存在的标签的值（值为空时为 ""）
/// - None: 所有候选标签均不存在于映射键中，该行不得成为 Record
pub fn extract_identity_key(
    data: &HashMap<String, Option<String>>,
    identity_labels: &[String],
) -> Option<String> {
    for label in identity_labels {
        if let Some(value) = data.get(label) {
            return Some(value.clone().unwrap_or_default());
        }
    }
    None
}
