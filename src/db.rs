// ==========================================
// 参赛数据导入系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 建表语句集中在此，避免各仓储自行建表造成分歧
// ==========================================

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// record 表建表语句
///
/// 说明:
/// - id 由仓储层在落库时生成（UUID v4）
/// - data 为 JSON 文本（规范化表头 → 可空值）
/// - import_batch 建索引，分组查询与批量删除都按它过滤
const RECORD_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS record (
    id            TEXT PRIMARY KEY,
    import_batch  TEXT NOT NULL,
    record_type   TEXT NOT NULL,
    identity_key  TEXT NOT NULL,
    imported_at   TEXT NOT NULL,
    data          TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_record_import_batch ON record(import_batch);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明:
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化 record 表（幂等）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(RECORD_SCHEMA)
}

/// 默认数据库路径（用户数据目录下）
///
/// 回退顺序: 系统数据目录 → 当前目录
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("contest-import")
        .join("records.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM record", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
