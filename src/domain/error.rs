//! Error kinds surfaced by the stores and services.

use crate::domain::model::RecipeId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt collection file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode collection for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Lookup by id found nothing.
    #[error("Recipe does not exist")]
    RecipeMissing(RecipeId),

    /// Update or delete targeted an id that is not stored.
    #[error("Recipe not found")]
    RecipeNotFound(RecipeId),

    #[error("Comment not found")]
    CommentNotFound { recipe_id: RecipeId, index: i64 },

    /// The largest stored id leaves no room for another.
    #[error("No recipe id left after {max_id}")]
    IdSpaceExhausted { max_id: RecipeId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::RecipeMissing(_)
                | ServiceError::RecipeNotFound(_)
                | ServiceError::CommentNotFound { .. }
        )
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
