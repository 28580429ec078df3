use axum::Json;
use axum::extract::State;

use crate::server::AppState;
use crate::types::HealthResponse;

/// 健康检查，返回行情缓存状态 (不会触发刷新)
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "服务存活", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.cache.status().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        coins: status.records,
        refreshed_at: status.refreshed_at.map(|t| t.to_rfc3339()),
    })
}
