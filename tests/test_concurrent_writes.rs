//! Concurrent writers against a live server:
//! 1) Start the API on an ephemeral port over a fresh data directory.
//! 2) Fire many creates and comment adds at once.
//! 3) Ensure no write was lost: ids are 1..=N with no duplicates and every
//!    comment is present in the thread.

use recipe_store::transport;
use recipe_store::{CommentService, RecipeService};
use serde_json::json;
use std::collections::BTreeSet;

const WRITERS: i64 = 20;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writes_are_not_lost() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let state = transport::http::AppState::new(
        RecipeService::open(dir.path().join("recipes.json")),
        CommentService::open(dir.path().join("comments.json")),
    );
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let mut tasks = Vec::new();
    for n in 0..WRITERS {
        let client = client.clone();
        let base_url = base_url.clone();
        tasks.push(tokio::spawn(async move {
            let created = client
                .post(format!("{}/recipes", base_url))
                .json(&json!({
                    "name": format!("Recipe {}", n),
                    "ingredients": ["salt"],
                    "steps": "Mix."
                }))
                .send()
                .await?
                .json::<serde_json::Value>()
                .await?;
            client
                .post(format!("{}/recipes/1/comments", base_url))
                .json(&json!({ "comment": format!("comment {}", n) }))
                .send()
                .await?
                .error_for_status()?;
            Ok::<_, reqwest::Error>(created["id"].as_i64())
        }));
    }

    let mut ids = BTreeSet::new();
    for task in tasks {
        let id = task.await??.expect("created recipe carries an id");
        assert!(ids.insert(id), "id {} assigned twice", id);
    }
    assert_eq!(ids, (1..=WRITERS).collect::<BTreeSet<_>>());

    let listed = client
        .get(format!("{}/recipes", base_url))
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?;
    assert_eq!(listed.len() as i64, WRITERS);

    let comments = client
        .get(format!("{}/recipes/1/comments", base_url))
        .send()
        .await?
        .json::<Vec<String>>()
        .await?;
    assert_eq!(comments.len() as i64, WRITERS);

    server.abort();
    let _ = server.await;
    Ok(())
}
