use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use coinbot_core::config::TickerConfig;
use coinbot_core::ticker::error::TickerError;
use coinbot_core::ticker::port::TickerProvider;
use coinbot_feed::coinmarketcap::CoinMarketCapProvider;
use std::collections::HashMap;
use tokio::net::TcpListener;

// 帮助函数：在随机端口启动一个假的行情服务器
async fn spawn_fake_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

fn config_for(base_url: String) -> TickerConfig {
    TickerConfig {
        base_url,
        limit: 1000,
        convert: "KRW".to_string(),
        ttl_secs: 60,
        timeout_secs: 5,
    }
}

fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[tokio::test]
async fn test_fetch_parses_ticker_list_and_sends_query() {
    install_crypto_provider();
    let router = Router::new().route(
        "/v1/ticker/",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            // 查询参数回显到 name 字段中，便于断言
            let echo = format!(
                "{}:{}",
                params.get("convert").cloned().unwrap_or_default(),
                params.get("limit").cloned().unwrap_or_default()
            );
            axum::Json(serde_json::json!([
                {"id": "bitcoin", "symbol": "BTC", "name": echo, "rank": "1", "price_usd": "6492.27"},
                {"id": "ethereum", "symbol": "ETH", "name": "Ethereum", "rank": 2, "price_usd": 301.5}
            ]))
        }),
    );
    let base_url = spawn_fake_upstream(router).await;
    let provider = CoinMarketCapProvider::new(&config_for(base_url)).unwrap();

    let records = provider.fetch_tickers().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "KRW:1000");
    assert_eq!(records[1].rank_value(), Some(2));
}

#[tokio::test]
async fn test_fetch_reports_http_and_parse_failures() {
    install_crypto_provider();
    let router = Router::new()
        .route("/broken/v1/ticker/", get(|| async { "<html>not json</html>" }))
        .route(
            "/down/v1/ticker/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route("/empty/v1/ticker/", get(|| async { axum::Json(serde_json::json!([])) }));
    let base_url = spawn_fake_upstream(router).await;

    let broken = CoinMarketCapProvider::new(&config_for(format!("{}/broken", base_url))).unwrap();
    assert!(matches!(broken.fetch_tickers().await, Err(TickerError::Parse(_))));

    let down = CoinMarketCapProvider::new(&config_for(format!("{}/down/", base_url))).unwrap();
    assert!(matches!(down.fetch_tickers().await, Err(TickerError::Network(_))));

    let empty = CoinMarketCapProvider::new(&config_for(format!("{}/empty", base_url))).unwrap();
    assert!(matches!(empty.fetch_tickers().await, Err(TickerError::Empty)));
}

/// # Summary
/// 真实 CoinMarketCap 接口的集成测试。
///
/// # Logic
/// 1. 使用默认配置拉取行情。
/// 2. 断言返回非空。
#[tokio::test]
#[ignore] // 依赖外网，仅在手动测试时开启
async fn test_coinmarketcap_real_fetch() -> anyhow::Result<()> {
    install_crypto_provider();
    let config = coinbot_core::config::AppConfig::default();
    let provider = CoinMarketCapProvider::new(&config.ticker)?;
    let records = provider.fetch_tickers().await?;
    assert!(!records.is_empty());
    println!("Fetched {} tickers, top: {}", records.len(), records[0].name);
    Ok(())
}
