use crate::domain::model::{NewComment, Recipe, RecipeDraft};
use crate::transport::http::handlers::{comments, health, recipes};
use crate::transport::http::types::{
    AppState, DeleteRecipeResponse, ErrorResponse, HealthResponse, MessageResponse,
};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        recipes::list_recipes_handler,
        recipes::get_recipe_handler,
        recipes::create_recipe_handler,
        recipes::update_recipe_handler,
        recipes::delete_recipe_handler,
        comments::add_comment_handler,
        comments::list_comments_handler,
        comments::delete_comment_handler
    ),
    components(schemas(
        Recipe,
        RecipeDraft,
        NewComment,
        DeleteRecipeResponse,
        MessageResponse,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/recipes",
            get(recipes::list_recipes_handler).post(recipes::create_recipe_handler),
        )
        .route(
            "/recipes/:id",
            get(recipes::get_recipe_handler)
                .put(recipes::update_recipe_handler)
                .delete(recipes::delete_recipe_handler),
        )
        .route(
            "/recipes/:id/comments",
            get(comments::list_comments_handler).post(comments::add_comment_handler),
        )
        .route(
            "/recipes/:id/comments/:index",
            axum::routing::delete(comments::delete_comment_handler),
        )
        .with_state(app_state)
}
