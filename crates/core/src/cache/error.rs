use crate::ticker::error::TickerError;
use thiserror::Error;

/// # Summary
/// 缓存域错误枚举。
///
/// # Invariants
/// - 刷新失败时缓存内容保持不变，错误仅用于日志与调用方判断。
#[derive(Error, Debug)]
pub enum CacheError {
    // 从上游刷新快照失败
    #[error("Refresh failed: {0}")]
    Refresh(#[from] TickerError),
}
