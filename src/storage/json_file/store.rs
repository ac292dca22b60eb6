//! Whole-collection record store contract.

use crate::domain::error::StoreResult;
use async_trait::async_trait;

/// Load-all / save-all persistence for one collection.
///
/// Every call goes to the backing medium; nothing is cached between calls.
/// Implementations do no locking of their own, so callers that need a
/// load-mutate-save cycle to be exclusive must serialize it themselves
/// (the HTTP layer holds a per-collection mutex for this).
#[async_trait]
pub trait RecordStore<C>: Send + Sync {
    /// Returns the stored collection, or `C::default()` when nothing has been
    /// stored yet.
    async fn load(&self) -> StoreResult<C>;

    /// Replaces the stored collection with `collection`.
    async fn save(&self, collection: &C) -> StoreResult<()>;

    /// Human-readable location of the backing data (used in logs).
    fn location(&self) -> String;
}
