//! Thin async client for the groups API. Each call maps to one endpoint and returns the decoded body.

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error {status}: {message}")]
    Api { status: StatusCode, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub id: i64,
    pub group_name: String,
    pub arrival: DateTime<Utc>,
    pub departure: DateTime<Utc>,
}

/// Body for create and update. Timestamps are sent as given; the server validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupPayload {
    pub group_name: String,
    pub arrival: String,
    pub departure: String,
}

impl GroupPayload {
    pub fn new(group_name: impl Into<String>, arrival: impl Into<String>, departure: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            arrival: arrival.into(),
            departure: departure.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct GroupsClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for GroupsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GroupsClient {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_groups(&self) -> Result<Vec<Group>, ClientError> {
        self.send(Method::GET, "groups", None).await
    }

    pub async fn get_group_by_id(&self, id: i64) -> Result<Group, ClientError> {
        self.send(Method::GET, &format!("groups/{}", id), None).await
    }

    pub async fn create_group(&self, group: &GroupPayload) -> Result<Group, ClientError> {
        self.send(Method::POST, "groups", Some(group)).await
    }

    pub async fn update_group(&self, id: i64, group: &GroupPayload) -> Result<Group, ClientError> {
        self.send(Method::PUT, &format!("groups/{}", id), Some(group)).await
    }

    pub async fn delete_group(&self, id: i64) -> Result<DeleteResponse, ClientError> {
        self.send(Method::DELETE, &format!("groups/{}", id), None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&GroupPayload>,
    ) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "request");
        let mut req = self.http.request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            return Err(ClientError::Api { status, message });
        }
        Ok(resp.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = GroupsClient::new("http://example.test/api/");
        assert_eq!(client.base_url(), "http://example.test/api");
        assert_eq!(GroupsClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn payload_serializes_flat() {
        let payload = GroupPayload::new("Group A", "2024-01-01T10:00:00Z", "2024-01-10T10:00:00Z");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "group_name": "Group A",
                "arrival": "2024-01-01T10:00:00Z",
                "departure": "2024-01-10T10:00:00Z"
            })
        );
    }
}
