// ==========================================
// 参赛数据导入系统 - 表头规范化
// ==========================================
// 职责: 原始表头单元格文本 → 规范化字段 token
// 规则: 按非字母数字边界和小写→大写转换处切词，
//       各词首字母大写其余小写后拼接（UpperCamelCase）
// ==========================================

/// 将原始表头文本规范化为 UpperCamelCase token
///
/// 纯函数: 同一输入恒产出同一 token
///
/// # 示例
/// - "citizen id"  → "CitizenId"
/// - "citizen_id"  → "CitizenId"
/// - "citizenId"   → "CitizenId"
/// - "CMND"        → "Cmnd"
pub fn to_upper_camel_case(raw: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_is_lower = false;

    for ch in raw.chars() {
        if !ch.is_alphanumeric() {
            // 非字母数字字符是词边界，自身丢弃
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_is_lower = false;
            continue;
        }

        // 小写→大写转换处切词（"citizenId" → "citizen" + "Id"）
        if ch.is_uppercase() && prev_is_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push(ch);
        prev_is_lower = ch.is_lowercase();
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut token = String::new();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            token.extend(first.to_uppercase());
            token.push_str(&chars.as_str().to_lowercase());
        }
    }
    token
}

/// 从表头行收集规范化字段 token
///
/// 从左到右扫描，遇到第一个空单元格即停止收集，
/// 其后的列在整张工作表中被忽略
pub fn collect_header_labels(cells: &[Option<String>]) -> Vec<String> {
    let mut labels = Vec::new();
    for cell in cells {
        match cell {
            Some(text) => labels.push(to_upper_camel_case(text)),
            None => break,
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_examples() {
        assert_eq!(to_upper_camel_case("citizen id"), "CitizenId");
        assert_eq!(to_upper_camel_case("citizen_id"), "CitizenId");
        assert_eq!(to_upper_camel_case("Citizen Id"), "CitizenId");
        assert_eq!(to_upper_camel_case("citizenId"), "CitizenId");
        assert_eq!(to_upper_camel_case("CMND"), "Cmnd");
        assert_eq!(to_upper_camel_case("họ và tên"), "HọVàTên");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let once = to_upper_camel_case("full  name");
        let twice = to_upper_camel_case("full  name");
        assert_eq!(once, twice);
        assert_eq!(once, "FullName");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let token = to_upper_camel_case("citizen id");
        assert_eq!(to_upper_camel_case(&token), token);
    }

    #[test]
    fn test_digits_kept_in_words() {
        assert_eq!(to_upper_camel_case("phone 2"), "Phone2");
        assert_eq!(to_upper_camel_case("id2"), "Id2");
    }

    #[test]
    fn test_collect_stops_at_first_empty_cell() {
        let cells = vec![
            Some("name".to_string()),
            Some("cmnd".to_string()),
            None,
            Some("ignored".to_string()),
        ];
        assert_eq!(collect_header_labels(&cells), vec!["Name", "Cmnd"]);
    }

    #[test]
    fn test_collect_empty_header_row() {
        let cells: Vec<Option<String>> = vec![None, Some("x".to_string())];
        assert!(collect_header_labels(&cells).is_empty());
    }
}
