//! UI Components
//!
//! Leptos components for the item manager.

mod edit_modal;
mod error_banner;
mod item_table;
mod new_item_form;

pub use edit_modal::EditModal;
pub use error_banner::ErrorBanner;
pub use item_table::ItemTable;
pub use new_item_form::NewItemForm;
