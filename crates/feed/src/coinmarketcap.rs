use async_trait::async_trait;
use coinbot_core::config::TickerConfig;
use coinbot_core::ticker::entity::CoinRecord;
use coinbot_core::ticker::error::TickerError;
use coinbot_core::ticker::port::TickerProvider;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// # Summary
/// CoinMarketCap v1 `ticker` 接口的行情提供者实现。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端进行通讯，所有请求都带超时。
/// - 不做重试，失败交由缓存层处理。
#[derive(Clone)]
pub struct CoinMarketCapProvider {
    /// 内部使用的 HTTP 客户端
    client: Client,
    // 形如 `https://api.coinmarketcap.com/v1/ticker/`
    endpoint: String,
    limit: u32,
    convert: String,
}

impl CoinMarketCapProvider {
    /// # Summary
    /// 根据行情配置创建提供者。
    ///
    /// # Logic
    /// 1. 按 `timeout_secs` 配置请求超时。
    /// 2. 规范化 `base_url` 并拼接 ticker 路径。
    ///
    /// # Arguments
    /// * `config`: 行情源配置。
    ///
    /// # Returns
    /// HTTP 客户端构建失败时返回 `TickerError::Network`。
    pub fn new(config: &TickerConfig) -> Result<Self, TickerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("coinbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TickerError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/v1/ticker/", config.base_url.trim_end_matches('/')),
            limit: config.limit,
            convert: config.convert.clone(),
        })
    }
}

#[async_trait]
impl TickerProvider for CoinMarketCapProvider {
    /// # Summary
    /// 从 CoinMarketCap 抓取全量行情。
    ///
    /// # Logic
    /// 1. 以 `convert` 与 `limit` 作为查询参数发起 GET 请求。
    /// 2. 非 2xx 状态码视为网络错误。
    /// 3. 将响应体解析为币种数组，空数组视为异常数据。
    async fn fetch_tickers(&self) -> Result<Vec<CoinRecord>, TickerError> {
        let limit = self.limit.to_string();
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("convert", self.convert.as_str()), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| TickerError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(TickerError::Network(format!("HTTP {}", resp.status())));
        }

        let records: Vec<CoinRecord> = resp
            .json()
            .await
            .map_err(|e| TickerError::Parse(e.to_string()))?;

        if records.is_empty() {
            return Err(TickerError::Empty);
        }

        debug!("Fetched {} tickers from {}", records.len(), self.endpoint);
        Ok(records)
    }
}
