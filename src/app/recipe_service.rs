//! The Recipe Collection Service.
//!
//! Every operation is a full cycle against the backing store:
//! load the whole collection, compute the new state in memory and, for
//! mutations, write the whole collection back before returning. No state is
//! kept between calls.
//!
//! Two overlapping cycles on the same store can lose an update (both read the
//! same snapshot, the second save wins). Callers serialize cycles per
//! collection; see `transport::http::AppState`.

use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::model::{Recipe, RecipeDraft, RecipeId};
use crate::storage::json_file::{JsonFileStore, RecordStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// `max(existing ids, default 0) + 1`. Gaps left by deletes are never reused.
///
/// Fails when the stored maximum is already `RecipeId::MAX`.
pub fn next_recipe_id(recipes: &[Recipe]) -> ServiceResult<RecipeId> {
    let max_id = recipes.iter().map(|r| r.id).max().unwrap_or(0);
    max_id
        .checked_add(1)
        .ok_or(ServiceError::IdSpaceExhausted { max_id })
}

pub struct RecipeService {
    store: Arc<dyn RecordStore<Vec<Recipe>>>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecordStore<Vec<Recipe>>>) -> Self {
        Self { store }
    }

    /// Service over a JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileStore::<Vec<Recipe>>::new(path)))
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// All recipes, or only those whose name contains `search`
    /// (case-insensitive). An empty `search` is the same as none.
    pub async fn list(&self, search: Option<&str>) -> ServiceResult<Vec<Recipe>> {
        let recipes = self.store.load().await?;
        match search.filter(|s| !s.is_empty()) {
            Some(search) => {
                let needle = search.to_lowercase();
                let filtered: Vec<Recipe> = recipes
                    .into_iter()
                    .filter(|r| r.name_matches(&needle))
                    .collect();
                debug!(search, matched = filtered.len(), "filtered recipes");
                Ok(filtered)
            }
            None => Ok(recipes),
        }
    }

    pub async fn get(&self, id: RecipeId) -> ServiceResult<Recipe> {
        let recipes = self.store.load().await?;
        recipes
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(ServiceError::RecipeMissing(id))
    }

    pub async fn create(&self, draft: RecipeDraft) -> ServiceResult<Recipe> {
        let mut recipes = self.store.load().await?;
        let recipe = draft.into_recipe(next_recipe_id(&recipes)?);
        recipes.push(recipe.clone());
        self.store.save(&recipes).await?;
        info!(id = recipe.id, name = %recipe.name, "recipe created");
        Ok(recipe)
    }

    /// Replaces every field of recipe `id` with `draft`. The stored id is
    /// always `id`.
    pub async fn update(&self, id: RecipeId, draft: RecipeDraft) -> ServiceResult<Recipe> {
        let mut recipes = self.store.load().await?;
        let Some(index) = recipes.iter().position(|r| r.id == id) else {
            warn!(id, "update of unknown recipe");
            return Err(ServiceError::RecipeNotFound(id));
        };

        let recipe = draft.into_recipe(id);
        recipes[index] = recipe.clone();
        self.store.save(&recipes).await?;
        info!(id, "recipe updated");
        Ok(recipe)
    }

    pub async fn delete(&self, id: RecipeId) -> ServiceResult<()> {
        let mut recipes = self.store.load().await?;
        let Some(index) = recipes.iter().position(|r| r.id == id) else {
            warn!(id, "delete of unknown recipe");
            return Err(ServiceError::RecipeNotFound(id));
        };

        recipes.remove(index);
        self.store.save(&recipes).await?;
        info!(id, "recipe deleted");
        Ok(())
    }
}
