// ==========================================
// 集成测试公共辅助
// ==========================================
// 职责: 临时数据库与 CSV 测试文件构造
// ==========================================

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// 创建测试用临时数据库文件
///
/// 返回 (临时文件句柄, 路径)；句柄存活期间文件不被清理
pub fn create_test_db() -> (NamedTempFile, String) {
    let temp_file = Builder::new()
        .suffix(".db")
        .tempfile()
        .expect("Failed to create temp db file");
    let db_path = temp_file.path().display().to_string();
    (temp_file, db_path)
}

/// 写出一个 .csv 测试文件，每个元素一行
pub fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut temp_file = Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp csv file");
    for line in lines {
        writeln!(temp_file, "{}", line).expect("Failed to write csv line");
    }
    temp_file.flush().expect("Failed to flush csv file");
    temp_file
}

/// 构造多工作表 .xlsx 的内存字节流
///
/// 每个元素为 (工作表名, 行列表)；空字符串单元格不写入，
/// 在读取侧归一化为 None
pub fn build_workbook_bytes(sheets: &[(&str, &[&[&str]])]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("Failed to set sheet name");
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet
                        .write_string(row_idx as u32, col_idx as u16, *value)
                        .expect("Failed to write cell");
                }
            }
        }
    }
    workbook.save_to_buffer().expect("Failed to serialize workbook")
}

/// 临时文件的批次标识（即文件名）
pub fn batch_id_of(file: &NamedTempFile) -> String {
    file.path()
        .file_name()
        .and_then(|n| n.to_str())
        .expect("temp file name")
        .to_string()
}
