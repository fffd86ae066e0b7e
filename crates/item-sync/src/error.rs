//! Typed error enum for item synchronization.

use thiserror::Error;

/// Errors from item API calls and controller operations.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("no item is being edited")]
    NotEditing,
}

pub type SyncResult<T> = Result<T, SyncError>;
