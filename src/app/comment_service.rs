//! The Comment Sub-collection Service.
//!
//! Comments live in their own file, independent of the recipes file. Thread
//! membership is never checked against stored recipes, so comments may exist
//! for ids that were deleted or never created.
//!
//! A comment's only identity is its position in the thread. Deleting shifts
//! later comments down by one, so a delete racing with another delete or an
//! add can remove a different comment than the client saw.

use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::model::comment::thread_key;
use crate::domain::model::{CommentMap, NewComment, RecipeId};
use crate::storage::json_file::{JsonFileStore, RecordStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub struct CommentService {
    store: Arc<dyn RecordStore<CommentMap>>,
}

impl CommentService {
    pub fn new(store: Arc<dyn RecordStore<CommentMap>>) -> Self {
        Self { store }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileStore::<CommentMap>::new(path)))
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Number of recipe ids with a stored thread (including emptied ones).
    pub async fn thread_count(&self) -> ServiceResult<usize> {
        Ok(self.store.load().await?.len())
    }

    /// Appends to the thread for `recipe_id`, starting it if needed.
    pub async fn add(&self, recipe_id: RecipeId, comment: NewComment) -> ServiceResult<()> {
        let mut threads = self.store.load().await?;
        let thread = threads.entry(thread_key(recipe_id)).or_default();
        thread.push(comment.comment);
        let len = thread.len();
        self.store.save(&threads).await?;
        info!(recipe_id, comments = len, "comment added");
        Ok(())
    }

    /// Comments for `recipe_id` in insertion order; empty if there are none.
    pub async fn list(&self, recipe_id: RecipeId) -> ServiceResult<Vec<String>> {
        let mut threads = self.store.load().await?;
        Ok(threads.remove(&thread_key(recipe_id)).unwrap_or_default())
    }

    /// Removes the comment at `index`. Negative indexes never match.
    pub async fn delete_at(&self, recipe_id: RecipeId, index: i64) -> ServiceResult<()> {
        let mut threads = self.store.load().await?;
        let not_found = ServiceError::CommentNotFound { recipe_id, index };

        let Some(thread) = threads.get_mut(&thread_key(recipe_id)) else {
            warn!(recipe_id, index, "delete in unknown comment thread");
            return Err(not_found);
        };
        let position = match usize::try_from(index) {
            Ok(position) if position < thread.len() => position,
            _ => {
                warn!(recipe_id, index, len = thread.len(), "comment index out of range");
                return Err(not_found);
            }
        };

        thread.remove(position);
        self.store.save(&threads).await?;
        info!(recipe_id, index, "comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn comment(text: &str) -> NewComment {
        NewComment {
            comment: text.to_string(),
        }
    }

    fn service() -> (TempDir, CommentService) {
        let dir = tempdir().unwrap();
        let service = CommentService::open(dir.path().join("comments.json"));
        (dir, service)
    }

    #[tokio::test]
    async fn thread_without_comments_lists_empty() {
        let (_dir, service) = service();
        assert!(service.list(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn comments_keep_insertion_order_and_shift_on_delete() {
        let (_dir, service) = service();
        service.add(5, comment("Great!")).await.unwrap();
        service.add(5, comment("Too salty")).await.unwrap();
        assert_eq!(
            service.list(5).await.unwrap(),
            vec!["Great!".to_string(), "Too salty".to_string()]
        );

        service.delete_at(5, 0).await.unwrap();
        assert_eq!(service.list(5).await.unwrap(), vec!["Too salty".to_string()]);
    }

    #[tokio::test]
    async fn threads_are_independent() {
        let (_dir, service) = service();
        service.add(1, comment("one")).await.unwrap();
        service.add(2, comment("two")).await.unwrap();
        assert_eq!(service.list(1).await.unwrap(), vec!["one".to_string()]);
        assert_eq!(service.list(2).await.unwrap(), vec!["two".to_string()]);
    }

    #[tokio::test]
    async fn out_of_range_index_is_not_found_and_writes_nothing() {
        let (dir, service) = service();
        service.add(5, comment("Great!")).await.unwrap();
        let path = dir.path().join("comments.json");
        let before = std::fs::read(&path).unwrap();

        for index in [1, -1, i64::MIN] {
            assert!(matches!(
                service.delete_at(5, index).await,
                Err(ServiceError::CommentNotFound { recipe_id: 5, .. })
            ));
        }
        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert_eq!(service.list(5).await.unwrap(), vec!["Great!".to_string()]);
    }

    #[tokio::test]
    async fn delete_in_unknown_thread_is_not_found() {
        let (dir, service) = service();
        assert!(matches!(
            service.delete_at(3, 0).await,
            Err(ServiceError::CommentNotFound { recipe_id: 3, index: 0 })
        ));
        assert!(!dir.path().join("comments.json").exists());
    }

    #[tokio::test]
    async fn emptied_thread_still_lists_empty() {
        let (_dir, service) = service();
        service.add(8, comment("only")).await.unwrap();
        service.delete_at(8, 0).await.unwrap();
        assert!(service.list(8).await.unwrap().is_empty());
        assert!(service.delete_at(8, 0).await.is_err());
    }
}
