// ==========================================
// 参赛数据导入系统 - 工作表导入器
// ==========================================
// 职责: 驱动单张工作表的完整导入
// 状态机: AwaitingHeader → ReadingRows
//         → {Terminated(空行) | Aborted(校验失败) | Completed(行耗尽)}
// 约定: 首个全空行终止整张工作表，其后的非空行被静默丢弃
//       （保留的既有契约，见 DESIGN.md 开放问题）
// ==========================================

use crate::config::ImportConfig;
use crate::domain::Record;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::header::collect_header_labels;
use crate::importer::row_mapper::map_row;
use crate::importer::validator::extract_identity_key;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

// ==========================================
// SheetImporter - 单工作表导入器
// ==========================================
// 用途: 同一次导入的所有工作表共享 batch 标识与时间戳
pub struct SheetImporter<'a> {
    config: &'a ImportConfig,
    import_batch: &'a str,
    imported_at: DateTime<Utc>,
}

impl<'a> SheetImporter<'a> {
    /// 创建工作表导入器
    ///
    /// # 参数
    /// - config: 身份标签与记录类别配置
    /// - import_batch: 导入批次标识（如文件名）
    /// - imported_at: 本次导入的共享时间戳
    pub fn new(config: &'a ImportConfig, import_batch: &'a str, imported_at: DateTime<Utc>) -> Self {
        Self {
            config,
            import_batch,
            imported_at,
        }
    }

    /// 导入一张工作表，返回有序记录序列
    ///
    /// # 算法
    /// 1. 首行作为表头，逐格规范化，遇首个空格停止收集
    /// 2. 后续每行: 映射 → 空行则终止工作表 → 身份校验 → 构造 Record
    /// 3. 校验失败中止整张工作表（无部分成功），上抛前记录现场数据
    ///
    /// # 返回
    /// - Ok(Vec<Record>): 首个空行（或行耗尽）之前的全部有效记录
    /// - Err(EmptySheet): 工作表没有任何行
    /// - Err(MissingIdentity): 某行缺少全部身份标签
    pub fn import_sheet(
        &self,
        sheet_name: &str,
        rows: &[Vec<Option<String>>],
    ) -> ImportResult<Vec<Record>> {
        let mut row_iter = rows.iter();

        // === AwaitingHeader ===
        let header_row = row_iter.next().ok_or_else(|| ImportError::EmptySheet {
            sheet: sheet_name.to_string(),
        })?;
        let labels = collect_header_labels(header_row);
        debug!(
            sheet = %sheet_name,
            labels = labels.len(),
            "表头收集完成"
        );

        // === ReadingRows ===
        let mut records = Vec::new();
        for (idx, cells) in row_iter.enumerate() {
            // 表头占第 1 行，数据行从第 2 行起
            let row_number = idx + 2;
            let mapped = map_row(&labels, cells);

            if mapped.all_null {
                // === Terminated ===
                // 空行是工作表终止符: 本行不产出记录，其后的行不再读取
                info!(
                    sheet = %sheet_name,
                    row = row_number,
                    "检测到空行，终止该工作表导入"
                );
                return Ok(records);
            }

            match extract_identity_key(&mapped.data, &self.config.identity_labels) {
                Some(identity_key) => {
                    records.push(Record::new(
                        self.import_batch,
                        &self.config.record_type,
                        identity_key,
                        self.imported_at,
                        mapped.data,
                    ));
                }
                None => {
                    // === Aborted ===
                    // 上抛前记录现场映射，供运维定位问题行
                    warn!(
                        sheet = %sheet_name,
                        row = row_number,
                        data = ?mapped.data,
                        "行数据缺少身份标识字段，中止该工作表导入"
                    );
                    return Err(ImportError::MissingIdentity {
                        sheet: sheet_name.to_string(),
                        row: row_number,
                        data: mapped.data,
                    });
                }
            }
        }

        // === Completed ===
        Ok(records)
    }
}
