//! # `coinbot-api` - Webhook HTTP 网关
//!
//! 本 crate 是行情聊天机器人的 HTTP 服务入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 接收聊天平台 NLU 服务转发的 webhook 请求
//! - 保证行情缓存新鲜后调用 `QueryProcessor` 筛选币种
//! - 将筛选结果格式化为 Slack 消息信封返回

pub mod error;
pub mod routes;
pub mod server;
pub mod types;
