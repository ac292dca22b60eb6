use crate::domain::model::{NewComment, RecipeId};
use crate::transport::http::handlers::common::service_error_response;
use crate::transport::http::types::{json_422, AppState, ErrorResponse, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::num::IntErrorKind;

#[utoipa::path(
    post,
    path = "/recipes/{id}/comments",
    params(
        ("id" = i64, Path, description = "Recipe id (not checked against stored recipes)")
    ),
    request_body = NewComment,
    responses(
        (status = 200, description = "Comment appended", body = MessageResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn add_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
    request: Result<Json<NewComment>, JsonRejection>,
) -> impl IntoResponse {
    let Json(comment) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, r#"{"comment": str}"#).into_response(),
    };

    let comments = state.comments.lock().await;
    match comments.add(id, comment).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Comment added!"))).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/recipes/{id}/comments",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Comments in insertion order (empty if none)", body = [String]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
) -> impl IntoResponse {
    let comments = state.comments.lock().await;
    match comments.list(id).await {
        Ok(list) => (StatusCode::OK, Json(list)).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}/comments/{index}",
    params(
        ("id" = i64, Path, description = "Recipe id"),
        ("index" = i64, Path, description = "Zero-based position in the thread")
    ),
    responses(
        (status = 200, description = "Comment removed; later comments shift down", body = MessageResponse),
        (status = 400, description = "Index is not an integer", body = ErrorResponse),
        (status = 404, description = "No thread for this id, or index out of range", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    Path((id, raw_index)): Path<(RecipeId, String)>,
) -> impl IntoResponse {
    // Integers beyond i64 are still positions, just never valid ones; the
    // saturated value is always out of range.
    let index = match raw_index.parse::<i64>() {
        Ok(index) => index,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        detail: format!("Invalid comment index {:?}: expected an integer", raw_index),
                    }),
                )
                    .into_response();
            }
        },
    };
    let comments = state.comments.lock().await;
    match comments.delete_at(id, index).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Comment deleted!"))).into_response(),
        Err(e) => service_error_response(e),
    }
}
