use crate::transport::http::types::{AppState, HealthResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (both collection files readable)", body = HealthResponse),
        (status = 503, description = "Service is unhealthy (a collection file is unreadable or corrupt)", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let recipes = {
        let service = state.recipes.lock().await;
        service.list(None).await.map(|r| r.len())
    };
    let threads = {
        let service = state.comments.lock().await;
        service.thread_count().await
    };
    let checked_at = Utc::now().to_rfc3339();

    match (recipes, threads) {
        (Ok(recipes), Ok(threads)) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                recipes: Some(recipes),
                comment_threads: Some(threads),
                checked_at,
                error: None,
            }),
        )
            .into_response(),
        (Err(e), _) | (_, Err(e)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy".to_string(),
                recipes: None,
                comment_threads: None,
                checked_at,
                error: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}
