use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ticker: TickerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// # Summary
/// 上游行情源与缓存相关配置。
///
/// # Invariants
/// - `ttl_secs` 为缓存新鲜度窗口，超过该时长的快照在使用前必须刷新。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerConfig {
    // 行情 API 根地址，不含路径
    pub base_url: String,
    // 单次拉取的最大币种数量
    pub limit: u32,
    // 除 USD 外附带换算的法币
    pub convert: String,
    pub ttl_secs: u64,
    // 上游请求超时
    pub timeout_secs: u64,
}

impl AppConfig {
    /// 监听地址，如 `0.0.0.0:5000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            ticker: TickerConfig {
                base_url: "https://api.coinmarketcap.com".to_string(),
                limit: 1000,
                convert: "KRW".to_string(),
                ttl_secs: 60,
                timeout_secs: 10,
            },
        }
    }
}
