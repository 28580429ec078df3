use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coinbot_core::cache::error::CacheError;
use coinbot_core::cache::port::{CacheStatus, PriceCache, Records};
use coinbot_core::common::time::{RealTimeProvider, TimeProvider};
use coinbot_core::ticker::port::TickerProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// # Summary
/// 缓存的单一状态值：记录集与刷新时间总是一起替换。
struct Snapshot {
    records: Records,
    refreshed_at: Option<DateTime<Utc>>,
}

/// # Summary
/// 基于内存的 TTL 行情缓存。
///
/// # Invariants
/// - 快照与时间戳作为一个值存放在同一把 `Mutex` 中，读写不会观察到撕裂状态。
/// - 刷新期间持有锁，并发请求排队等待同一次刷新结果，不会重复打到上游。
/// - 刷新失败时保留旧快照。
pub struct MemPriceCache {
    // 原始行情数据源
    provider: Arc<dyn TickerProvider>,
    // 时钟，测试时可替换为虚拟时钟
    clock: Arc<dyn TimeProvider>,
    // 新鲜度窗口
    ttl: chrono::Duration,
    state: Mutex<Snapshot>,
}

impl MemPriceCache {
    /// # Summary
    /// 创建一个空缓存，使用系统时钟。
    ///
    /// # Arguments
    /// * `provider`: 行情数据源。
    /// * `ttl`: 快照新鲜度窗口。
    ///
    /// # Returns
    /// 尚未填充的缓存实例，首次使用前需调用 `refresh` 或 `ensure_fresh`。
    pub fn new(provider: Arc<dyn TickerProvider>, ttl: Duration) -> Self {
        Self::with_clock(provider, ttl, Arc::new(RealTimeProvider))
    }

    /// 使用指定时钟创建缓存
    pub fn with_clock(
        provider: Arc<dyn TickerProvider>,
        ttl: Duration,
        clock: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            provider,
            clock,
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
            state: Mutex::new(Snapshot {
                records: Arc::new(Vec::new()),
                refreshed_at: None,
            }),
        }
    }

    fn is_stale(&self, snapshot: &Snapshot) -> bool {
        match snapshot.refreshed_at {
            None => true,
            Some(at) => self.clock.elapsed_since(at) >= self.ttl,
        }
    }

    /// # Summary
    /// 在已持有锁的前提下执行刷新。
    ///
    /// # Logic
    /// 1. 从上游拉取全量列表。
    /// 2. 成功后一次性替换记录集并打上刷新时间。
    /// 3. 失败直接返回错误，`snapshot` 不做任何修改。
    async fn refresh_locked(&self, snapshot: &mut Snapshot) -> Result<usize, CacheError> {
        let records = self.provider.fetch_tickers().await?;
        let count = records.len();
        *snapshot = Snapshot {
            records: Arc::new(records),
            refreshed_at: Some(self.clock.now()),
        };
        info!("Ticker cache refreshed: {} coins", count);
        Ok(count)
    }
}

#[async_trait]
impl PriceCache for MemPriceCache {
    async fn ensure_fresh(&self) -> Records {
        let mut snapshot = self.state.lock().await;
        if self.is_stale(&snapshot) {
            debug!("Ticker cache is stale, refreshing");
            if let Err(e) = self.refresh_locked(&mut snapshot).await {
                warn!(
                    "Ticker refresh failed, serving {} stale coins: {}",
                    snapshot.records.len(),
                    e
                );
            }
        }
        snapshot.records.clone()
    }

    async fn refresh(&self) -> Result<usize, CacheError> {
        let mut snapshot = self.state.lock().await;
        self.refresh_locked(&mut snapshot).await
    }

    async fn snapshot(&self) -> Records {
        self.state.lock().await.records.clone()
    }

    async fn status(&self) -> CacheStatus {
        let snapshot = self.state.lock().await;
        CacheStatus {
            records: snapshot.records.len(),
            refreshed_at: snapshot.refreshed_at,
        }
    }
}
