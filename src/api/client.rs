//! reqwest-backed client for the idk backend.

use std::time::Duration;

use async_trait::async_trait;

use super::types::{AuthUrlResponse, TokenRequest, TokenResponse};
use super::{ActionResponse, PromptRequest, PromptService};
use crate::error::ApiError;

/// Client for the idk backend HTTP API.
#[derive(Debug, Clone)]
pub struct IdkClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdkClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend for the provider authorization URL carrying `state`.
    pub async fn authorization_url(
        &self,
        state: &str,
        redirect_url: &str,
    ) -> Result<String, ApiError> {
        let response = self
            .http
            .get(format!("{}/auth/url", self.base_url))
            .query(&[("state", state), ("redirectUrl", redirect_url)])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let payload: AuthUrlResponse = response.json().await?;
        let url = payload.url.trim().to_string();
        if url.is_empty() {
            return Err(ApiError::Decode(
                "authorization url missing from response".to_string(),
            ));
        }
        Ok(url)
    }

    /// Exchange a one-time authorization code for an idk token.
    pub async fn exchange_code(&self, code: &str, redirect_url: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(format!("{}/token", self.base_url))
            .json(&TokenRequest { code, redirect_url })
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let payload: TokenResponse = response.json().await?;
        let token = payload.jwt_token.trim().to_string();
        if token.is_empty() {
            return Err(ApiError::Decode("token not found".to_string()));
        }
        Ok(token)
    }
}

#[async_trait]
impl PromptService for IdkClient {
    async fn submit(
        &self,
        request: &PromptRequest,
        token: &str,
    ) -> Result<ActionResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/prompt", self.base_url))
            .header("Authorization", token)
            .json(request)
            .send()
            .await?;
        tracing::debug!(status = response.status().as_u16(), "prompt response");
        let response = ensure_success(response).await?;
        response
            .json::<ActionResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Build an HTTP client with timeout applied.
fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, body))
}
