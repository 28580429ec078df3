//! 测试辅助工具，仅在 `test-utils` feature 下编译。

use crate::ticker::entity::{CoinRecord, RawNumber};
use crate::ticker::error::TickerError;
use crate::ticker::port::TickerProvider;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// # Summary
/// 可编程的行情源替身。
///
/// # Invariants
/// - `set_failing(true)` 后每次拉取都返回网络错误，直到恢复。
pub struct StubTickerProvider {
    records: Mutex<Vec<CoinRecord>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl StubTickerProvider {
    pub fn new(records: Vec<CoinRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// 替换下一次拉取返回的数据
    pub fn set_records(&self, records: Vec<CoinRecord>) {
        *self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = records;
    }

    /// 模拟网络故障
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// 累计拉取次数 (含失败)
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TickerProvider for StubTickerProvider {
    async fn fetch_tickers(&self) -> Result<Vec<CoinRecord>, TickerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(TickerError::Network("simulated outage".to_string()));
        }
        Ok(self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }
}

/// 构造一条只带价格信息的简化记录
pub fn coin(id: &str, symbol: &str, name: &str, rank: i64) -> CoinRecord {
    CoinRecord {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        rank: Some(RawNumber::Text(rank.to_string())),
        price_usd: Some("100.5".into()),
        price_krw: Some("112000".into()),
        price_btc: Some("0.015".into()),
        ..CoinRecord::default()
    }
}

/// 字段齐全的比特币记录
pub fn bitcoin() -> CoinRecord {
    CoinRecord {
        id: "bitcoin".to_string(),
        symbol: "BTC".to_string(),
        name: "Bitcoin".to_string(),
        rank: Some("1".into()),
        price_usd: Some("6492.27".into()),
        price_krw: Some("7262371.72".into()),
        price_btc: Some("1.0".into()),
        volume_24h_usd: Some("3562510000.0".into()),
        volume_24h_krw: Some("3985031611000".into()),
        market_cap_usd: Some("108214898553".into()),
        market_cap_krw: Some("121049216049000".into()),
        percent_change_1h: Some("-0.19".into()),
        percent_change_24h: Some("1.34".into()),
        percent_change_7d: Some("13.67".into()),
        total_supply: Some("16668450.0".into()),
        available_supply: Some("16668450.0".into()),
        last_updated: Some("1510000000".into()),
    }
}

/// 主流币种样本，排名为 1..=4
pub fn majors() -> Vec<CoinRecord> {
    vec![
        bitcoin(),
        coin("ethereum", "ETH", "Ethereum", 2),
        coin("ethereum-classic", "ETC", "Ethereum Classic", 3),
        coin("digibyte", "DGB", "DigiByte", 4),
    ]
}
