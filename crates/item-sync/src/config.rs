//! API Configuration
//!
//! Base URL of the item service and the endpoint paths derived from it.

use reqwest::Url;

use crate::error::{SyncError, SyncResult};
use crate::models::ItemId;

/// Local development server the UI talks to unless overridden.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Build-time variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "ITEMS_API_BASE_URL";

const ITEMS_PATH: &str = "api/items/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Always ends with `/`
    base_url: String,
}

impl ApiConfig {
    /// Validates `base_url` as an absolute http(s) URL.
    ///
    /// # Errors
    /// Returns [`SyncError::InvalidBaseUrl`] if it does not parse, uses another
    /// scheme, or carries a query or fragment (endpoint paths are appended).
    pub fn new(base_url: &str) -> SyncResult<Self> {
        let trimmed = base_url.trim();
        let parsed = Url::parse(trimmed).map_err(|e| SyncError::InvalidBaseUrl {
            url: trimmed.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SyncError::InvalidBaseUrl {
                url: trimmed.to_owned(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(SyncError::InvalidBaseUrl {
                url: trimmed.to_owned(),
                reason: "query and fragment are not allowed".to_owned(),
            });
        }

        let mut base_url = trimmed.to_owned();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self { base_url })
    }

    /// Uses `value` when it is set and non-empty, the default otherwise.
    ///
    /// The UI passes `option_env!("ITEMS_API_BASE_URL")` here.
    pub fn from_override(value: Option<&str>) -> SyncResult<Self> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List/create route
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, ITEMS_PATH)
    }

    /// Update/delete route for one item
    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}{}{}/", self.base_url, ITEMS_PATH, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let config = ApiConfig::default();
        assert_eq!(config.collection_url(), "http://127.0.0.1:8000/api/items/");
        assert_eq!(config.item_url(42), "http://127.0.0.1:8000/api/items/42/");
    }

    #[test]
    fn test_trailing_slash_is_added() {
        let config = ApiConfig::new("https://items.example.com/v2").unwrap();
        assert_eq!(config.base_url(), "https://items.example.com/v2/");
        assert_eq!(
            config.collection_url(),
            "https://items.example.com/v2/api/items/"
        );
    }

    #[test]
    fn test_rejects_relative_and_non_http_urls() {
        assert!(matches!(
            ApiConfig::new("localhost:8000"),
            Err(SyncError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiConfig::new("/api"),
            Err(SyncError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiConfig::new("ftp://example.com/"),
            Err(SyncError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_query_and_fragment() {
        assert!(matches!(
            ApiConfig::new("http://h/?x=1"),
            Err(SyncError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiConfig::new("http://h/base#top"),
            Err(SyncError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_empty_override_falls_back_to_default() {
        assert_eq!(ApiConfig::from_override(None).unwrap(), ApiConfig::default());
        assert_eq!(ApiConfig::from_override(Some("  ")).unwrap(), ApiConfig::default());

        let config = ApiConfig::from_override(Some("http://10.0.0.5:9000")).unwrap();
        assert_eq!(config.item_url(1), "http://10.0.0.5:9000/api/items/1/");
    }
}
