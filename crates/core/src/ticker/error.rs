use thiserror::Error;

/// # Summary
/// 行情源错误枚举，处理网络、解析及空数据等问题。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum TickerError {
    // 网络层错误，包含底层 HTTP 客户端错误信息或非 2xx 状态码
    #[error("Network error: {0}")]
    Network(String),
    // 数据解析错误，如 JSON 格式不匹配
    #[error("Parse error: {0}")]
    Parse(String),
    // 上游返回了空列表
    #[error("Ticker list is empty")]
    Empty,
}
