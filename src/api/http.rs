//! HTTP API Client
//!
//! `reqwest`-backed [`ActivityApi`]. On wasm32 reqwest goes through the
//! browser's fetch, so the same client serves the web frontend.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{activities_url, decode_reply, decode_roster, signup_url, unregister_url};
use super::{ActivityApi, Confirmation};
use crate::error::{ClientError, ClientResult};
use crate::model::Roster;

/// Activities API over HTTP
pub struct HttpActivityApi {
    client: Client,
    base_url: String,
}

impl HttpActivityApi {
    /// Create a client rooted at `base_url` (e.g. "http://localhost:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, url: String) -> ClientResult<Confirmation> {
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let (status, body) = read_body(response).await?;
        decode_reply(status, &body)
    }
}

async fn read_body(response: Response) -> ClientResult<(u16, String)> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    Ok((status, body))
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn fetch_all(&self) -> ClientResult<Roster> {
        let response = self
            .client
            .get(activities_url(&self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let (status, body) = read_body(response).await?;
        decode_roster(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ClientResult<Confirmation> {
        tracing::debug!(activity, email, "POST signup");
        self.post(signup_url(&self.base_url, activity, email)).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<Confirmation> {
        tracing::debug!(activity, email, "POST unregister");
        self.post(unregister_url(&self.base_url, activity, email)).await
    }
}
