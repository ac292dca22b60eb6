//! Record shapes persisted by the service.
//!
//! Both collections are plain serde types; the backing files hold exactly what
//! these types serialize to.

pub mod comment;
pub mod recipe;

pub use comment::{CommentMap, NewComment};
pub use recipe::{Recipe, RecipeDraft, RecipeId};
