//! Item Sync
//!
//! Client-side synchronization for the item manager:
//! - models: Item and form drafts (wire format)
//! - config: API base URL and endpoint paths
//! - api: transport trait and its HTTP implementation
//! - state: form/modal/collection state and where it is stored
//! - manager: the refetch-after-every-mutation controller

mod api;
mod config;
mod error;
mod http;
mod manager;
mod models;
mod sequence;
mod state;


pub use api::ItemApi;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{SyncError, SyncResult};
pub use http::HttpItemApi;
pub use manager::ItemManager;
pub use models::{EditSession, Item, ItemDraft, ItemId};
pub use state::{ManagerState, StateStore};
