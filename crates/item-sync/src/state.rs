//! Manager State
//!
//! Collection cache, create form and edit modal state, plus the
//! `StateStore` seam that lets the UI keep it in a reactive signal.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{EditSession, Item, ItemDraft};

/// Everything the item manager renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagerState {
    /// Last applied server collection, server order
    pub items: Vec<Item>,
    /// "New item" form
    pub create_form: ItemDraft,
    /// Open edit modal (None = closed)
    pub editing: Option<EditSession>,
    /// Set by the first successful fetch
    pub loaded: bool,
    /// Message of the most recent failed request
    pub last_error: Option<String>,
}

impl ManagerState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn set_create_name(&mut self, name: String) {
        self.create_form.name = name;
    }

    pub fn set_create_description(&mut self, description: String) {
        self.create_form.description = description;
    }

    pub fn reset_create_form(&mut self) {
        self.create_form = ItemDraft::default();
    }

    /// Open the modal with a copy of the item's fields
    pub fn begin_edit(&mut self, item: &Item) {
        self.editing = Some(EditSession::begin(item));
    }

    /// Close the modal and drop the edit form
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn set_edit_name(&mut self, name: String) {
        if let Some(session) = self.editing.as_mut() {
            session.draft.name = name;
        }
    }

    pub fn set_edit_description(&mut self, description: String) {
        if let Some(session) = self.editing.as_mut() {
            session.draft.description = description;
        }
    }

    /// Whole-collection replacement; the only way `items` changes
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.loaded = true;
        self.last_error = None;
    }

    pub fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }
}

/// Where a manager keeps its [`ManagerState`].
///
/// Closures run synchronously and must not be held across an await.
pub trait StateStore {
    fn read<R>(&self, f: impl FnOnce(&ManagerState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut ManagerState));
}

impl StateStore for Rc<RefCell<ManagerState>> {
    fn read<R>(&self, f: impl FnOnce(&ManagerState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut ManagerState)) {
        f(&mut self.borrow_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, description: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_begin_then_cancel_edit() {
        let mut state = ManagerState::default();
        state.begin_edit(&item(3, "A", "first"));
        assert!(state.is_editing());
        assert_eq!(state.editing.as_ref().unwrap().draft.name, "A");

        state.cancel_edit();
        assert!(!state.is_editing());
    }

    #[test]
    fn test_edit_fields_do_not_touch_items() {
        let mut state = ManagerState::default();
        state.replace_items(vec![item(3, "A", "first")]);
        let first = state.items[0].clone();
        state.begin_edit(&first);
        state.set_edit_name("B".to_string());
        state.set_edit_description("second".to_string());

        let session = state.editing.as_ref().unwrap();
        assert_eq!(session.draft, ItemDraft::new("B", "second"));
        assert_eq!(state.items[0].name, "A");
    }

    #[test]
    fn test_edit_field_without_session_is_noop() {
        let mut state = ManagerState::default();
        state.set_edit_name("ignored".to_string());
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_create_form_reset() {
        let mut state = ManagerState::default();
        state.set_create_name("Book".to_string());
        state.set_create_description("Notebook".to_string());
        assert_eq!(state.create_form, ItemDraft::new("Book", "Notebook"));

        state.reset_create_form();
        assert_eq!(state.create_form, ItemDraft::default());
    }

    #[test]
    fn test_replace_items_marks_loaded_and_clears_error() {
        let mut state = ManagerState::default();
        assert!(!state.loaded);
        state.record_error("HTTP status 500: boom".to_string());

        state.replace_items(Vec::new());
        assert!(state.loaded);
        assert!(state.last_error.is_none());
    }
}
