//! # `coinbot-cache` - 行情快照缓存
//!
//! 基于 TTL 的内存快照实现，刷新与读取在同一把锁内完成。

pub mod mem;
