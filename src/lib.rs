//! File-backed recipe records with per-recipe comment threads, served over HTTP.
//!
//! Each collection lives in one JSON file that is read in full and rewritten
//! in full by every operation. The file is the only state kept between
//! requests.

pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::comment_service::CommentService;
pub use app::recipe_service::{next_recipe_id, RecipeService};
pub use domain::error::{ServiceError, StoreError};
pub use domain::model::{CommentMap, NewComment, Recipe, RecipeDraft, RecipeId};
pub use storage::json_file::{JsonFileStore, RecordStore};
