//! # Webhook 路由控制器
//!
//! 实现 `POST /webhook`：刷新缓存 -> 筛选币种 -> 渲染 Slack 消息。

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use coinbot_core::reply::entity::WebhookReply;
use coinbot_reply::slack;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{ApiErrorResponse, EmptyReply, WebhookRequest};

/// # Summary
/// 处理聊天平台的 webhook 回调。
///
/// # Logic
/// 1. 先确保缓存新鲜 (过期则刷新)，与请求内容无关。
/// 2. 解析请求体，不检查 Content-Type；不是 JSON 或缺少意图时返回 400。
/// 3. 筛选币种并渲染；不受支持的意图或没有匹配币种时返回 `{}`。
#[utoipa::path(
    post,
    path = "/webhook",
    tag = "Webhook",
    request_body = WebhookRequest,
    responses(
        (status = 200, description = "行情回复，无结果时为空对象", body = WebhookReply),
        (status = 400, description = "请求体不是 JSON 或缺少意图", body = ApiErrorResponse)
    )
)]
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let records = state.cache.ensure_fresh().await;

    let request: WebhookRequest = serde_json::from_slice(&body)?;
    let query = request
        .into_query()
        .ok_or_else(|| ApiError::BadRequest("Missing result.action".into()))?;

    tracing::info!("Webhook query: intent={:?}, coin={:?}", query.intent, query.coin);

    let results = state.processor.process(&query, &records);
    tracing::debug!("Matched {} of {} cached coins", results.len(), records.len());

    let response = match slack::format(&results) {
        Some(reply) => Json(reply).into_response(),
        None => Json(EmptyReply {}).into_response(),
    };
    Ok(response)
}
