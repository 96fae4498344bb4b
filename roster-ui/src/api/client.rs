//! HTTP API Client
//!
//! Functions for communicating with the roster service via fetch.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use roster::endpoints::{self, DetailResponse, MessageResponse, Mutation};
use roster::{ActivityCatalog, ClientError, ClientResult};

/// Local storage key of an optional API base override
pub const API_URL_KEY: &str = "roster_api_url";

/// API base URL: the local storage override, or same-origin
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .map(|url| endpoints::normalize_base(&url))
        .unwrap_or_default()
}

/// Fetch the whole catalog
pub async fn fetch_activities() -> ClientResult<ActivityCatalog> {
    let response = Request::get(&endpoints::activities_url(&get_api_base()))
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    read_json(response).await
}

/// Send a signup or unregister; returns the server's message
pub async fn submit_mutation(mutation: Mutation, activity: &str, email: &str) -> ClientResult<String> {
    let url = endpoints::mutation_url(&get_api_base(), mutation, activity, email);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    let body: MessageResponse = read_json(response).await?;
    Ok(body.message)
}

/// Decode a 2xx body as `T`, or a non-2xx body as a rejection
async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if ok {
        return Ok(serde_json::from_str(&text)?);
    }

    let error: DetailResponse = serde_json::from_str(&text)?;
    Err(ClientError::Rejected {
        status,
        detail: error.detail,
    })
}
