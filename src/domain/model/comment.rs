use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::RecipeId;

/// Comment threads keyed by the decimal form of the recipe id.
///
/// A key that is absent is the same as an empty thread. Keys are not checked
/// against the recipes collection.
pub type CommentMap = BTreeMap<String, Vec<String>>;

/// Request body for adding a comment. Only the text is persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct NewComment {
    pub comment: String,
}

pub fn thread_key(recipe_id: RecipeId) -> String {
    recipe_id.to_string()
}
