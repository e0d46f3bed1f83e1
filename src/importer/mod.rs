// ==========================================
// 参赛数据导入系统 - 导入层
// ==========================================
// 职责: 外部表格数据导入，生成校验后的内部记录
// 支持: Excel (.xlsx/.xls), CSV (.csv)
// 流程: 解析 → 表头规范化 → 行映射 → 身份校验 → 落库
// ==========================================

// 模块声明
pub mod error;
pub mod header;
pub mod record_importer;
pub mod record_importer_impl;
pub mod row_mapper;
pub mod sheet_importer;
pub mod validator;
pub mod workbook_reader;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use header::{collect_header_labels, to_upper_camel_case};
pub use record_importer_impl::RecordImporterImpl;
pub use row_mapper::{map_row, MappedRow};
pub use sheet_importer::SheetImporter;
pub use validator::extract_identity_key;
pub use workbook_reader::{CsvReader, ExcelReader, RawSheet, WorkbookReader};

// 重导出 Trait 接口
pub use record_importer::RecordImporter;
