//! HTTP Item API
//!
//! `ItemApi` over the REST service using reqwest (browser fetch on wasm32).

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use crate::api::ItemApi;
use crate::config::ApiConfig;
use crate::error::{SyncError, SyncResult};
use crate::models::{Item, ItemDraft, ItemId};

/// REST client for `/api/items/`
#[derive(Debug, Clone)]
pub struct HttpItemApi {
    client: Client,
    config: ApiConfig,
}

impl HttpItemApi {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> SyncResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Turn non-2xx responses into [`SyncError::Status`].
async fn ensure_success(response: Response) -> SyncResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SyncError::Status {
        code: status.as_u16(),
        body,
    })
}

#[async_trait(?Send)]
impl ItemApi for HttpItemApi {
    async fn list(&self) -> SyncResult<Vec<Item>> {
        let url = self.config.collection_url();
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let items = ensure_success(response).await?.json::<Vec<Item>>().await?;
        Ok(items)
    }

    async fn create(&self, draft: &ItemDraft) -> SyncResult<()> {
        let url = self.config.collection_url();
        debug!("POST {url}");
        let response = self.client.post(&url).json(draft).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: ItemId, draft: &ItemDraft) -> SyncResult<()> {
        let url = self.config.item_url(id);
        debug!("PUT {url}");
        let response = self.client.put(&url).json(draft).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> SyncResult<()> {
        let url = self.config.item_url(id);
        debug!("DELETE {url}");
        let response = self.client.delete(&url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, HttpItemApi) {
        let server = MockServer::start().await;
        let config = ApiConfig::new(&server.uri()).expect("mock server uri");
        let api = HttpItemApi::new(config).expect("client");
        (server, api)
    }

    #[tokio::test]
    async fn test_list_parses_collection_in_server_order() {
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/items/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 2, "name": "Book", "description": "Notebook" },
                { "id": 1, "name": "Pen", "description": "Blue pen" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let items = api.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 2);
        assert_eq!(items[1].name, "Pen");
    }

    #[tokio::test]
    async fn test_create_posts_draft_to_collection() {
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/items/"))
            .and(body_json(json!({ "name": "Book", "description": "Notebook" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 2, "name": "Book", "description": "Notebook"
            })))
            .expect(1)
            .mount(&server)
            .await;

        api.create(&ItemDraft::new("Book", "Notebook")).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_puts_to_single_item_endpoint() {
        let (server, api) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/items/3/"))
            .and(body_json(json!({ "name": "B", "description": "" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        api.update(3, &ItemDraft::new("B", "")).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let (server, api) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/items/5/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        api.delete(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/items/"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"name":["This field may not be blank."]}"#),
            )
            .mount(&server)
            .await;

        let err = api.create(&ItemDraft::default()).await.unwrap_err();
        match err {
            SyncError::Status { code, body } => {
                assert_eq!(code, 400);
                assert!(body.contains("may not be blank"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_list_is_an_error() {
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/items/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(matches!(api.list().await, Err(SyncError::Http(_))));
    }
}
