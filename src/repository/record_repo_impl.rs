// ==========================================
// 参赛数据导入系统 - 记录仓储实现
// ==========================================
// 实现: rusqlite + 事务化批量写入
// 对齐: db.rs record 表
// ==========================================

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::{BatchGroup, Record, RecordSummary};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::record_repo::RecordRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, Transaction};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// RecordRepositoryImpl
// ==========================================
pub struct RecordRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl RecordRepositoryImpl {
    /// 创建新的 Repository 实例并初始化 record 表
    ///
    /// # 参数
    /// - db_path: 数据库文件路径（":memory:" 用于测试）
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 在事务中批量插入记录，落库时分配 UUID
    fn save_all_tx(tx: &Transaction, records: &[Record]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO record (
                id, import_batch, record_type, identity_key, imported_at, data
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )?;

        let mut count = 0;
        for record in records {
            // id 已存在时沿用（重放场景），否则分配新 UUID
            let id = record
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            let data_json = serde_json::to_string(&record.data)?;

            stmt.execute(params![
                id,
                record.import_batch,
                record.record_type,
                record.identity_key,
                record.imported_at,
                data_json,
            ])?;
            count += 1;
        }

        Ok(count)
    }
}

#[async_trait]
impl RecordRepository for RecordRepositoryImpl {
    async fn save_all(&self, records: Vec<Record>) -> RepositoryResult<usize> {
        let mut conn = self.lock_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = Self::save_all_tx(&tx, &records)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    async fn delete_all_by_import_batch(&self, batch_id: &str) -> RepositoryResult<usize> {
        let conn = self.lock_conn()?;
        let deleted = conn.execute(
            "DELETE FROM record WHERE import_batch = ?1",
            params![batch_id],
        )?;
        Ok(deleted)
    }

    async fn group_by_import_batch(&self) -> RepositoryResult<Vec<BatchGroup>> {
        let conn = self.lock_conn()?;

        // 按批次排序读出后在内存中聚合，等价于文档库的 $group + $push
        let mut stmt =
            conn.prepare("SELECT import_batch, id, data FROM record ORDER BY import_batch")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut groups: Vec<BatchGroup> = Vec::new();
        for row in rows {
            let (batch_id, id, data_json) = row?;
            let data = serde_json::from_str(&data_json)?;
            let summary = RecordSummary { id, data };

            match groups.last_mut() {
                Some(group) if group.batch_id == batch_id => group.records.push(summary),
                _ => groups.push(BatchGroup {
                    batch_id,
                    count: 0,
                    records: vec![summary],
                }),
            }
        }

        for group in &mut groups {
            group.count = group.records.len();
        }
        Ok(groups)
    }

    async fn count_records(&self) -> RepositoryResult<usize> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM record", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
