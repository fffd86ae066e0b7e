//! Item Models
//!
//! Data structures matching the REST resource.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned item identifier
pub type ItemId = u32;

/// Item as returned by the collection endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Name/description pair: form state and POST/PUT request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self::new(item.name.clone(), item.description.clone())
    }
}

/// Edit form plus the id of the item being edited.
/// Present only while the edit modal is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: ItemId,
    pub draft: ItemDraft,
}

impl EditSession {
    pub fn begin(item: &Item) -> Self {
        Self {
            id: item.id,
            draft: ItemDraft::from(item),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
