use crate::app::comment_service::CommentService;
use crate::app::recipe_service::RecipeService;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

/// Shared handler state.
///
/// Each collection sits behind its own mutex, held by a handler for the whole
/// load-mutate-save cycle. That serializes requests per backing file within
/// this process and closes the lost-update window between two overlapping
/// writers. Recipes and comments are locked independently; there is no
/// atomicity across the pair. Other processes writing the same files are not
/// coordinated with.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<Mutex<RecipeService>>,
    pub comments: Arc<Mutex<CommentService>>,
}

impl AppState {
    pub fn new(recipes: RecipeService, comments: CommentService) -> Self {
        Self {
            recipes: Arc::new(Mutex::new(recipes)),
            comments: Arc::new(Mutex::new(comments)),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct ListRecipesQuery {
    /// Case-insensitive substring of the recipe name.
    #[serde(default)]
    pub search: Option<String>,
}

/// Body of every non-2xx response produced by this service.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeleteRecipeResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_threads: Option<usize>,
    /// RFC 3339 time of the check.
    pub checked_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            detail: format!("Invalid JSON body: {} (expected: {})", err, expected),
        }),
    )
}
