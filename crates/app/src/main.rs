use std::sync::Arc;
use std::time::Duration;

use coinbot_api::server::{AppState, start_server};
use coinbot_cache::mem::MemPriceCache;
use coinbot_core::cache::port::PriceCache;
use coinbot_feed::coinmarketcap::CoinMarketCapProvider;
use coinbot_query::processor::QueryProcessor;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod settings;

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入到 API 层。
///
/// # Logic
/// 1. 初始化全局日志。
/// 2. 加载分层配置。
/// 3. 实例化行情源与缓存，并同步完成首次填充 (失败即退出)。
/// 4. 构造查询处理器与 API 状态。
/// 5. 启动 HTTP 服务直到收到退出信号。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    // 2. 加载配置
    let port = std::env::var("PORT").ok();
    let config = settings::load(settings::CONFIG_FILE, port.as_deref())?;
    info!("Coinbot starting with {:?}", config);

    // 3. 实例化基础设施层并填充缓存
    let feed = Arc::new(CoinMarketCapProvider::new(&config.ticker)?);
    let cache = Arc::new(MemPriceCache::new(
        feed,
        Duration::from_secs(config.ticker.ttl_secs),
    ));
    let count = cache.refresh().await?;
    info!("Ticker cache initialized with {} coins", count);

    // 4. 构造应用状态
    let state = AppState {
        cache,
        processor: Arc::new(QueryProcessor::default()),
    };

    // 5. 启动服务
    start_server(state, &config.bind_addr()).await
}
