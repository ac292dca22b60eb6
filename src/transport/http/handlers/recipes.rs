use crate::domain::model::{Recipe, RecipeDraft, RecipeId};
use crate::transport::http::handlers::common::service_error_response;
use crate::transport::http::types::{
    json_422, AppState, DeleteRecipeResponse, ErrorResponse, ListRecipesQuery,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

const RECIPE_BODY: &str = r#"{"name": str, "ingredients": [str], "steps": str, "imgURL"?: str}"#;

#[utoipa::path(
    get,
    path = "/recipes",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring of the recipe name")
    ),
    responses(
        (status = 200, description = "Stored recipes, filtered when `search` is given", body = [Recipe]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes_handler(
    State(state): State<AppState>,
    Query(query): Query<ListRecipesQuery>,
) -> impl IntoResponse {
    let recipes = state.recipes.lock().await;
    match recipes.list(query.search.as_deref()).await {
        Ok(list) => (StatusCode::OK, Json(list)).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 404, description = "No recipe with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
) -> impl IntoResponse {
    let recipes = state.recipes.lock().await;
    match recipes.get(id).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/recipes",
    request_body = RecipeDraft,
    responses(
        (status = 200, description = "Recipe stored under a newly assigned id", body = Recipe),
        (status = 409, description = "Largest stored id leaves no room for a new one", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_recipe_handler(
    State(state): State<AppState>,
    request: Result<Json<RecipeDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, RECIPE_BODY).into_response(),
    };

    let recipes = state.recipes.lock().await;
    match recipes.create(draft).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    params(
        ("id" = i64, Path, description = "Recipe id; overrides any id in the body")
    ),
    request_body = RecipeDraft,
    responses(
        (status = 200, description = "Recipe replaced", body = Recipe),
        (status = 404, description = "No recipe with this id", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
    request: Result<Json<RecipeDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, RECIPE_BODY).into_response(),
    };

    let recipes = state.recipes.lock().await;
    match recipes.update(id, draft).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe removed", body = DeleteRecipeResponse),
        (status = 404, description = "No recipe with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
) -> impl IntoResponse {
    let recipes = state.recipes.lock().await;
    match recipes.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteRecipeResponse {
                status: "success".to_string(),
                message: "Recipe deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}
