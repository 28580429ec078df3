//! # DTO (Data Transfer Object) 层
//!
//! webhook 请求体、健康检查与错误响应结构。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。

use coinbot_query::processor::{Intent, PriceQuery};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================
//  Webhook 请求 DTO
// ============================================================

/// 意图参数
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WebhookParameters {
    /// 用户提到的币种称呼
    #[schema(example = "비트코인")]
    #[serde(default)]
    pub coin: Option<String>,
}

/// NLU 识别结果
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WebhookResult {
    /// 识别出的意图
    #[schema(example = "QueryCoinPrice")]
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub parameters: Option<WebhookParameters>,
}

/// webhook 请求体，未声明的字段一律忽略
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WebhookRequest {
    #[serde(default)]
    pub result: Option<WebhookResult>,
}

impl WebhookRequest {
    /// # Summary
    /// 提取价格查询。
    ///
    /// # Logic
    /// 1. 缺少 `result.action` 时返回 `None`，无法判断意图。
    /// 2. `coin` 缺省为空字符串。
    pub fn into_query(self) -> Option<PriceQuery> {
        let result = self.result?;
        let action = result.action?;
        let coin = result
            .parameters
            .and_then(|p| p.coin)
            .unwrap_or_default();
        Some(PriceQuery {
            intent: Intent::from_action(&action),
            coin,
        })
    }
}

/// 无匹配或意图不受支持时的空回复，序列化为 `{}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmptyReply {}

// ============================================================
//  通用响应 DTO
// ============================================================

/// 健康检查 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// 缓存中的币种数量
    #[schema(example = 1000)]
    pub coins: usize,
    /// 最近一次成功刷新时间 (ISO 8601)
    #[schema(example = "2026-03-01T10:00:00Z")]
    pub refreshed_at: Option<String>,
}

/// 构建失败响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}
