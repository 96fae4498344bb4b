//! HTTP Backend
//!
//! reqwest client for the roster REST endpoints.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::Backend;
use crate::catalog::ActivityCatalog;
use crate::endpoints::{self, DetailResponse, MessageResponse, Mutation};
use crate::error::{ClientError, ClientResult};

/// Connection settings for [`HttpBackend`]
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the roster service (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Request timeout; `None` leaves the transport default
    pub request_timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: None,
        }
    }
}

/// Roster REST API client
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: endpoints::normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_mutation(&self, mutation: Mutation, activity: &str, email: &str) -> ClientResult<String> {
        let url = endpoints::mutation_url(&self.base_url, mutation, activity, email);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).send().await?;
        let body: MessageResponse = read_json(response).await?;
        Ok(body.message)
    }
}

/// Decode a 2xx body as `T`, or turn a non-2xx body into a rejection.
///
/// Either way the body must be JSON; anything else is a parse failure.
async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        return Ok(serde_json::from_str(&text)?);
    }

    let error: DetailResponse = serde_json::from_str(&text).map_err(|e| {
        ClientError::Parse(format!("Invalid error body from server ({}): {}", status, e))
    })?;
    Err(ClientError::Rejected {
        status: status.as_u16(),
        detail: error.detail,
    })
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_activities(&self) -> ClientResult<ActivityCatalog> {
        let url = endpoints::activities_url(&self.base_url);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> ClientResult<String> {
        self.post_mutation(Mutation::Signup, activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<String> {
        self.post_mutation(Mutation::Unregister, activity, email).await
    }
}
