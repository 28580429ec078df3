use chrono::{DateTime, Duration, Utc};

/// # Summary
/// 时钟接口。缓存的 TTL 判断通过它取当前时间，测试时可替换为虚拟时钟。
pub trait TimeProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// 距 `at` 已经过去的时长，`at` 在未来时为负
    fn elapsed_since(&self, at: DateTime<Utc>) -> Duration {
        self.now() - at
    }
}

/// 系统时钟
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// # Summary
/// 只能向前拨动的虚拟时钟，用于驱动缓存过期。
///
/// # Invariants
/// - 锁中毒时沿用中毒前的值，不向调用方传播 panic。
#[cfg(any(test, feature = "test-utils"))]
pub struct FakeClockProvider {
    current: std::sync::RwLock<DateTime<Utc>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl FakeClockProvider {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: std::sync::RwLock::new(start),
        }
    }

    /// 将时钟向前拨动 `delta`
    pub fn advance(&self, delta: Duration) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current += delta;
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl TimeProvider for FakeClockProvider {
    fn now(&self) -> DateTime<Utc> {
        *self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fake_clock_drives_elapsed_time() {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let clock = FakeClockProvider::new(start);
        assert_eq!(clock.elapsed_since(start), Duration::zero());

        clock.advance(Duration::seconds(61));
        assert_eq!(clock.now(), start + Duration::seconds(61));
        assert_eq!(clock.elapsed_since(start), Duration::seconds(61));
        assert!(clock.elapsed_since(start + Duration::seconds(120)) < Duration::zero());
    }
}
