//! Item Manager
//!
//! Controller for the item table and edit modal. Every mutation is followed
//! by a full collection reload; server responses to mutations are never
//! merged into local state.

use std::rc::Rc;

use log::{debug, info, warn};

use crate::api::ItemApi;
use crate::error::{SyncError, SyncResult};
use crate::models::{Item, ItemId};
use crate::sequence::ReloadSequencer;
use crate::state::{ManagerState, StateStore};

/// Owns the transport and the state handle.
///
/// Cloning is cheap and clones share the transport and reload sequence,
/// so each UI handler can move its own copy into a spawned task.
pub struct ItemManager<A, S> {
    api: Rc<A>,
    store: S,
    sequencer: Rc<ReloadSequencer>,
}

impl<A, S: Clone> Clone for ItemManager<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
            sequencer: Rc::clone(&self.sequencer),
        }
    }
}

impl<A: ItemApi, S: StateStore> ItemManager<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api: Rc::new(api),
            store,
            sequencer: Rc::new(ReloadSequencer::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Initial fetch on mount
    pub async fn load(&self) -> SyncResult<()> {
        self.reload().await
    }

    /// Fetch the full collection and replace the cache, unless a
    /// later-issued reload has already been applied. A stale reload's
    /// failure is dropped as well.
    pub async fn reload(&self) -> SyncResult<()> {
        let ticket = self.sequencer.issue();
        let items = match self.api.list().await {
            Ok(items) => items,
            Err(e) if self.sequencer.is_stale(ticket) => {
                debug!("Ignoring failure of stale reload {ticket:?}: {e}");
                return Ok(());
            }
            Err(e) => return Err(self.fail("reload", e)),
        };

        if self.sequencer.commit(ticket) {
            info!("Loaded {} items", items.len());
            self.store.write(|s| s.replace_items(items));
        } else {
            debug!("Discarding stale reload {ticket:?}");
        }
        Ok(())
    }

    /// POST the create form, reset it, reload
    pub async fn create(&self) -> SyncResult<()> {
        let draft = self.store.read(|s| s.create_form.clone());
        self.api
            .create(&draft)
            .await
            .map_err(|e| self.fail("create", e))?;

        self.store.write(ManagerState::reset_create_form);
        self.reload().await
    }

    /// Open the edit modal for `item` (no network call)
    pub fn begin_edit(&self, item: &Item) {
        self.store.write(|s| s.begin_edit(item));
    }

    /// Close the edit modal (no network call)
    pub fn cancel_edit(&self) {
        self.store.write(ManagerState::cancel_edit);
    }

    /// PUT the edit form to the item being edited, close the modal, reload.
    /// On failure the modal stays open.
    pub async fn update(&self) -> SyncResult<()> {
        let Some(session) = self.store.read(|s| s.editing.clone()) else {
            return Err(self.fail("update", SyncError::NotEditing));
        };
        self.api
            .update(session.id, &session.draft)
            .await
            .map_err(|e| self.fail("update", e))?;

        self.store.write(ManagerState::cancel_edit);
        self.reload().await
    }

    /// DELETE one item, reload
    pub async fn delete(&self, id: ItemId) -> SyncResult<()> {
        self.api
            .delete(id)
            .await
            .map_err(|e| self.fail("delete", e))?;
        self.reload().await
    }

    pub fn dismiss_error(&self) {
        self.store.write(ManagerState::dismiss_error);
    }

    fn fail(&self, operation: &str, error: SyncError) -> SyncError {
        warn!("Item {operation} failed: {error}");
        let message = format!("{operation} failed: {error}");
        self.store.write(|s| s.record_error(message));
        error
    }
}
