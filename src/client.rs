//! HTTP client for remote mode.
//!
//! Wraps `reqwest` with the REST resource conventions the console expects:
//! one collection per catalog at `<base_url>/<path>`, records at
//! `<base_url>/<path>/{id}`, JSON bodies throughout. A 404 maps to
//! [`ServiceError::NotFound`]; any other failure maps to
//! [`ServiceError::Transport`].

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ServiceError;

/// Client for one console API server.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the collection URL for a catalog path.
    pub fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Constructs the record URL for a catalog path and id.
    pub fn record_url(&self, path: &str, id: i64) -> String {
        format!("{}/{}/{}", self.base_url.trim_end_matches('/'), path, id)
    }

    /// Fetches every record in a collection.
    pub async fn get_all(&self, path: &str) -> Result<Vec<Value>, ServiceError> {
        let response = self.client.get(self.collection_url(path)).send().await?;
        handle_response(response).await
    }

    /// Fetches one record by id.
    pub async fn get_by_id(&self, path: &str, id: i64) -> Result<Value, ServiceError> {
        let response = self.client.get(self.record_url(path, id)).send().await?;
        handle_response(response).await
    }

    /// Creates a record from a draft.
    pub async fn create(&self, path: &str, draft: &Value) -> Result<Value, ServiceError> {
        let response = self.client.post(self.collection_url(path)).json(draft).send().await?;
        handle_response(response).await
    }

    /// Replaces the record at `id` with a draft.
    pub async fn update(&self, path: &str, id: i64, draft: &Value) -> Result<Value, ServiceError> {
        let response = self.client.put(self.record_url(path, id)).json(draft).send().await?;
        handle_response(response).await
    }

    /// Deletes the record at `id`, returning the server's acknowledgment.
    pub async fn delete(&self, path: &str, id: i64) -> Result<Value, ServiceError> {
        let response = self.client.delete(self.record_url(path, id)).send().await?;
        handle_response(response).await
    }
}

async fn handle_response<T>(response: Response) -> Result<T, ServiceError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ServiceError::NotFound);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = if body.is_empty() {
            "no error details".to_string()
        } else {
            body
        };
        return Err(ServiceError::Transport(format!("HTTP {}: {}", status.as_u16(), detail)));
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slashes() {
        let client = ApiClient::new("http://localhost:8080/api/".to_string());
        assert_eq!(client.collection_url("empresas"), "http://localhost:8080/api/empresas");
        assert_eq!(client.record_url("empresas", 7), "http://localhost:8080/api/empresas/7");
    }

    #[test]
    fn urls_join_without_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/api".to_string());
        assert_eq!(
            client.collection_url("tipos-proyecto"),
            "http://localhost:8080/api/tipos-proyecto"
        );
    }
}
