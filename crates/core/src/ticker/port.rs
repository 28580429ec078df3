use crate::ticker::entity::CoinRecord;
use crate::ticker::error::TickerError;
use async_trait::async_trait;

/// # Summary
/// 行情数据提供者接口（原始数据源）。
///
/// # Invariants
/// - 一次调用返回完整的币种列表，不做增量合并。
/// - 实现者不做重试，失败直接返回错误由缓存层决定是否沿用旧快照。
#[async_trait]
pub trait TickerProvider: Send + Sync {
    /// # Summary
    /// 拉取全量行情列表。
    ///
    /// # Logic
    /// 1. 构建数据源请求 (数量上限与换算法币由实现者的配置决定)。
    /// 2. 执行网络请求并解析响应数据。
    ///
    /// # Returns
    /// 成功返回按上游顺序排列的币种列表。
    async fn fetch_tickers(&self) -> Result<Vec<CoinRecord>, TickerError>;
}
