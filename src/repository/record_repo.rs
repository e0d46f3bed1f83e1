// ==========================================
// 参赛数据导入系统 - 记录仓储 Trait
// ==========================================
// 职责: 定义批次化记录存取接口（不包含业务逻辑）
// 红线: Repository 不含校验规则，只做数据 CRUD
// ==========================================

use crate::domain::{BatchGroup, Record};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// RecordRepository Trait
// ==========================================
// 用途: 导入批次的持久化与分组存取
// 实现者: RecordRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// 批量持久化记录并分配 id（事务化，整批成功或整批失败）
    ///
    /// # 参数
    /// - records: 待落库记录（id 为 None）
    ///
    /// # 返回
    /// - Ok(usize): 成功落库的记录数
    /// - Err: 数据库错误（整个事务回滚，调用方可见失败）
    async fn save_all(&self, records: Vec<Record>) -> RepositoryResult<usize>;

    /// 删除指定导入批次的全部记录
    ///
    /// # 参数
    /// - batch_id: 导入批次标识（如文件名）
    ///
    /// # 返回
    /// - Ok(usize): 删除的记录数
    async fn delete_all_by_import_batch(&self, batch_id: &str) -> RepositoryResult<usize>;

    /// 按导入批次分组返回全部存量记录
    ///
    /// # 返回
    /// - 每个存量批次一组: 批次标识、记录数、(id, data) 列表；
    ///   组间顺序不保证
    async fn group_by_import_batch(&self) -> RepositoryResult<Vec<BatchGroup>>;

    /// 统计 record 表记录数
    async fn count_records(&self) -> RepositoryResult<usize>;
}
