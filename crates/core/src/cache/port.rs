use crate::cache::error::CacheError;
use crate::ticker::entity::CoinRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// 只读行情快照，刷新时整体替换
pub type Records = Arc<Vec<CoinRecord>>;

/// # Summary
/// 缓存当前状态，用于健康检查。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStatus {
    // 快照中的币种数量
    pub records: usize,
    // 最近一次成功刷新的时间，从未刷新时为 None
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// # Summary
/// 带 TTL 的行情缓存接口 (Port)。
///
/// # Invariants
/// - "读时间戳、按需刷新、读记录" 三步必须作为一个原子单元执行。
/// - 刷新失败不得部分替换快照。
#[async_trait]
pub trait PriceCache: Send + Sync {
    /// # Summary
    /// 保证快照新鲜后返回。
    ///
    /// # Logic
    /// 1. 若从未刷新或快照年龄 >= TTL，同步执行一次刷新。
    /// 2. 刷新失败仅记录日志，继续返回旧快照。
    ///
    /// # Returns
    /// 当前快照 (可能为旧数据，甚至为空)。
    async fn ensure_fresh(&self) -> Records;

    /// # Summary
    /// 强制从上游拉取并替换快照。
    ///
    /// # Returns
    /// 成功返回新快照中的币种数量，失败返回 `CacheError` 且旧快照保持不变。
    async fn refresh(&self) -> Result<usize, CacheError>;

    /// 不检查新鲜度，直接返回当前快照
    async fn snapshot(&self) -> Records;

    /// 当前缓存状态
    async fn status(&self) -> CacheStatus;
}
