//! # `coinbot-core` - 领域核心
//!
//! 定义行情实体、缓存与数据源端口 (Port)、回复消息结构以及全局配置。
//! 本 crate 不包含任何网络或存储实现，具体适配器位于 `feed`、`cache` 等 crate。

pub mod common;
pub mod config;

pub mod ticker {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod cache {
    pub mod error;
    pub mod port;
}

pub mod reply {
    pub mod entity;
}

#[cfg(feature = "test-utils")]
pub mod testing;
