//! Application Context
//!
//! The item manager and its reactive state, bundled into one `Copy` handle
//! that the root component passes down to its children as a prop.

use std::future::Future;

use item_sync::{HttpItemApi, ItemManager, ManagerState, StateStore, SyncResult};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Manager state kept in a Leptos signal so views re-render on change
#[derive(Clone, Copy)]
pub struct SignalState(pub RwSignal<ManagerState>);

impl StateStore for SignalState {
    fn read<R>(&self, f: impl FnOnce(&ManagerState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut ManagerState)) {
        self.0.update(f);
    }
}

pub type Manager = ItemManager<HttpItemApi, SignalState>;

#[derive(Clone, Copy)]
pub struct ItemsContext {
    /// Reactive state - read in views, written by the manager and form inputs
    pub state: RwSignal<ManagerState>,
    /// Controller (holds an `Rc`, so kept in local storage)
    manager: StoredValue<Manager, LocalStorage>,
}

impl ItemsContext {
    pub fn new(state: RwSignal<ManagerState>, api: HttpItemApi) -> Self {
        let manager = ItemManager::new(api, SignalState(state));
        Self {
            state,
            manager: StoredValue::new_local(manager),
        }
    }

    /// Run a synchronous manager operation (begin/cancel edit, dismiss error)
    pub fn with_manager<R>(&self, f: impl FnOnce(&Manager) -> R) -> R {
        self.manager.with_value(f)
    }

    /// Spawn an async manager operation on the event loop.
    ///
    /// Failures are already logged and recorded in state by the manager.
    pub fn spawn<F, Fut>(&self, label: &'static str, op: F)
    where
        F: FnOnce(Manager) -> Fut,
        Fut: Future<Output = SyncResult<()>> + 'static,
    {
        let task = op(self.manager.get_value());
        spawn_local(async move {
            if let Err(e) = task.await {
                log::debug!("[APP] {label} ended with error: {e}");
            }
        });
    }
}
