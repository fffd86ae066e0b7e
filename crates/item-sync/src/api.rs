//! Item API Trait
//!
//! Abstract interface to the remote item collection.
//! Implementations can use HTTP, in-memory fakes, etc.

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::models::{Item, ItemDraft, ItemId};

/// CRUD operations against the item resource.
///
/// Mutation responses are discarded; callers reload the collection instead.
/// Futures are `?Send` because the browser transport is single-threaded.
#[async_trait(?Send)]
pub trait ItemApi {
    /// Fetch the full collection in server order
    async fn list(&self) -> SyncResult<Vec<Item>>;

    /// Create a new item from a draft
    async fn create(&self, draft: &ItemDraft) -> SyncResult<()>;

    /// Replace an item's name and description
    async fn update(&self, id: ItemId, draft: &ItemDraft) -> SyncResult<()>;

    /// Delete an item by ID
    async fn delete(&self, id: ItemId) -> SyncResult<()>;
}
