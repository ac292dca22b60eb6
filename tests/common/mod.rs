#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use recipe_store::transport::http::{create_router, AppState};
use recipe_store::{CommentService, RecipeService};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub dir: TempDir,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = AppState::new(
            RecipeService::open(dir.path().join("recipes.json")),
            CommentService::open(dir.path().join("comments.json")),
        );
        Self {
            router: create_router(state),
            dir,
        }
    }

    pub fn recipes_file(&self) -> PathBuf {
        self.dir.path().join("recipes.json")
    }

    pub fn comments_file(&self) -> PathBuf {
        self.dir.path().join("comments.json")
    }

    /// Sends one request; the body is decoded as JSON when it is JSON, else `Null`.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
