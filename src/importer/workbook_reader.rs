// ==========================================
// 参赛数据导入系统 - 工作簿读取器
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 边界约定: 所有单元格在此归一化为 Option<String>
//           （空单元格/纯空白 → None，其余去首尾空白）
// 资源: 文件与流句柄在函数返回时随 RAII 释放，
//       成功、提前终止、出错三条路径一致
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// RawSheet - 归一化后的工作表
// ==========================================
// 用途: 解析边界产物，行序与列序保持源文件顺序
#[derive(Debug, Clone)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<Option<String>>>,
}

/// 单元格 → 可空字符串
///
/// Empty/错误单元格归一化为 None；其余按显示值转字符串并去首尾空白，
/// 去空白后为空串的同样视为 None
fn cell_to_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::Error(_) => None,
        other => {
            let text = other.to_string();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

// ==========================================
// ExcelReader - Excel 工作簿读取
// ==========================================
pub struct ExcelReader;

impl ExcelReader {
    /// 从文件路径读取工作簿的全部工作表（按源文件顺序）
    pub fn read_path(path: &Path) -> ImportResult<Vec<RawSheet>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 扩展名比较不区分大小写，与 WorkbookReader 的分发口径一致
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ImportError::WorkbookReadError(e.to_string()))?;
        Self::read_sheets(&mut workbook)
    }

    /// 从内存字节流读取 .xlsx 工作簿
    ///
    /// 调用方以二进制流 + 批次标识的形式提交导入时走此入口
    pub fn read_bytes(bytes: Vec<u8>) -> ImportResult<Vec<RawSheet>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
        Self::read_sheets(&mut workbook)
    }

    /// 读取全部工作表并归一化单元格
    fn read_sheets<RS, R>(workbook: &mut R) -> ImportResult<Vec<RawSheet>>
    where
        RS: std::io::Read + std::io::Seek,
        R: Reader<RS>,
        R::Error: std::fmt::Display,
    {
        let mut sheets = Vec::new();
        for name in workbook.sheet_names().to_vec() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| ImportError::WorkbookReadError(e.to_string()))?;

            let rows: Vec<Vec<Option<String>>> = range
                .rows()
                .map(|row| row.iter().map(cell_to_value).collect())
                .collect();

            sheets.push(RawSheet { name, rows });
        }
        Ok(sheets)
    }
}

// ==========================================
// CsvReader - CSV 读取（单工作表退化形态）
// ==========================================
pub struct CsvReader;

impl CsvReader {
    /// 将 CSV 文件读为一张逻辑工作表，表名取文件主干名
    ///
    /// 首行同样由 SheetImporter 当作表头处理，此处不消费表头
    ///
    /// # 空行口径
    /// csv 解析器会跳过完全为空的文本行，它们不会出现在行序列中；
    /// 只有仅含分隔符的行（如 ","）产出全空行，充当工作表终止符。
    /// 这与 Excel 中的空白行为已知的不对称
    pub fn read_path(path: &Path) -> ImportResult<Vec<RawSheet>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        if let Some(ext) = path.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(ext));
            }
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<Option<String>> = record
                .iter()
                .map(|value| {
                    let trimmed = value.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    }
                })
                .collect();
            rows.push(row);
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("csv")
            .to_string();

        Ok(vec![RawSheet { name, rows }])
    }
}

// ==========================================
// WorkbookReader - 通用读取器（按扩展名自动选择）
// ==========================================
pub struct WorkbookReader;

impl WorkbookReader {
    pub fn read<P: AsRef<Path>>(file_path: P) -> ImportResult<Vec<RawSheet>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvReader::read_path(path),
            "xlsx" | "xls" => ExcelReader::read_path(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_reader_single_sheet() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "name,cmnd").unwrap();
        writeln!(temp_file, "Alice,123").unwrap();
        writeln!(temp_file, "Bob,456").unwrap();

        let sheets = CsvReader::read_path(temp_file.path()).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].rows.len(), 3); // 含表头行
        assert_eq!(sheets[0].rows[1][0], Some("Alice".to_string()));
    }

    #[test]
    fn test_csv_reader_blank_cells_become_none() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "name,cmnd").unwrap();
        writeln!(temp_file, "Alice,").unwrap();
        writeln!(temp_file, ",").unwrap();

        let sheets = CsvReader::read_path(temp_file.path()).unwrap();
        assert_eq!(sheets[0].rows[1], vec![Some("Alice".to_string()), None]);
        assert_eq!(sheets[0].rows[2], vec![None, None]);
    }

    #[test]
    fn test_file_not_found() {
        let result = CsvReader::read_path(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));

        let result = ExcelReader::read_path(Path::new("non_existent.xlsx"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = WorkbookReader::read("entries.pdf");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_uppercase_extension_accepted() {
        // 分发与读取器各自的扩展名检查必须同为不区分大小写
        let mut temp_file = Builder::new().suffix(".CSV").tempfile().unwrap();
        writeln!(temp_file, "name,cmnd").unwrap();
        writeln!(temp_file, "Alice,123").unwrap();

        let sheets = WorkbookReader::read(temp_file.path()).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].rows.len(), 2);
    }

    #[test]
    fn test_csv_reader_skips_truly_empty_lines() {
        // 完全为空的文本行被解析器吞掉，不产出全空行；
        // 仅含分隔符的行才是全空行
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "name,cmnd").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "Alice,123").unwrap();
        writeln!(temp_file, ",").unwrap();

        let sheets = CsvReader::read_path(temp_file.path()).unwrap();
        assert_eq!(sheets[0].rows.len(), 3);
        assert_eq!(sheets[0].rows[1][0], Some("Alice".to_string()));
        assert_eq!(sheets[0].rows[2], vec![None, None]);
    }

    #[test]
    fn test_read_bytes_rejects_garbage() {
        let result = ExcelReader::read_bytes(vec![0, 1, 2, 3]);
        assert!(matches!(result, Err(ImportError::WorkbookReadError(_))));
    }

    #[test]
    fn test_cell_to_value_normalization() {
        assert_eq!(cell_to_value(&Data::Empty), None);
        assert_eq!(
            cell_to_value(&Data::String("  Alice ".to_string())),
            Some("Alice".to_string())
        );
        assert_eq!(cell_to_value(&Data::String("   ".to_string())), None);
        assert_eq!(cell_to_value(&Data::Float(123.0)), Some("123".to_string()));
        assert_eq!(cell_to_value(&Data::Float(2.5)), Some("2.5".to_string()));
    }
}
