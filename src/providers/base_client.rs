use crate::core::error::ChatError;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

/// Fixed per-request timeout. Requests that exceed it surface as a timeout
/// failure; nothing is retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP plumbing for inference endpoints: one reqwest client with a
/// fixed timeout, bearer-token POSTs of JSON payloads.
pub struct HttpClient {
    endpoint: String,
    client: Client,
}

impl HttpClient {
    pub fn new(endpoint: String) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ChatError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { endpoint, client })
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        bearer_token: &str,
        payload: &T,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), path);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", bearer_token))
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
    }
}
