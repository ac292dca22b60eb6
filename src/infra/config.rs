//! Centralized configuration (environment variables + defaults).
//!
//! Call `load_dotenv()` once at startup so a local `.env` file can supply
//! any of these.

use anyhow::{bail, Context};
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_RECIPES_FILE: &str = "recipes.json";
pub const DEFAULT_COMMENTS_FILE: &str = "comments.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Backing file for the recipes collection.
pub fn recipes_file() -> PathBuf {
    PathBuf::from(var_or("RECIPES_FILE", DEFAULT_RECIPES_FILE))
}

/// Backing file for the comment threads.
pub fn comments_file() -> PathBuf {
    PathBuf::from(var_or("COMMENTS_FILE", DEFAULT_COMMENTS_FILE))
}

/// Recipes and comments files, checked to be distinct.
///
/// Each store writes through `<file>.tmp`, so a shared path would let the two
/// collections overwrite each other's data and temp file.
pub fn collection_files() -> anyhow::Result<(PathBuf, PathBuf)> {
    let recipes = recipes_file();
    let comments = comments_file();
    ensure_distinct(&recipes, &comments)?;
    Ok((recipes, comments))
}

pub fn ensure_distinct(recipes: &Path, comments: &Path) -> anyhow::Result<()> {
    if normalize(recipes) == normalize(comments) {
        bail!(
            "RECIPES_FILE and COMMENTS_FILE must differ, both are {}",
            recipes.display()
        );
    }
    Ok(())
}

/// Absolute, `.`-free form used only for comparing paths. Files need not exist.
fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    };
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Listen address for the API server.
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = var_or("BIND_ADDR", DEFAULT_BIND_ADDR);
    raw.parse()
        .with_context(|| format!("BIND_ADDR must be a socket address, got {raw:?}"))
}
