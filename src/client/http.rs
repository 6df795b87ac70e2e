//! HTTP Client
//!
//! The transport seam and its reqwest-backed session.

use crate::error::{Result, TronError};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

/// `User-Agent` sent on every request
pub const USER_AGENT: &str = concat!("tron-http/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Posts JSON bodies and hands back the raw response.
///
/// Errors are only for failures before a response arrived; non-2xx statuses
/// come back as a `RawResponse` for the provider to classify.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(
        &self,
        url: Url,
        headers: HeaderMap,
        body: &Value,
        timeout: Duration,
    ) -> Result<RawResponse>;
}

/// Persistent HTTP session
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Inner reqwest client
    client: Client,
}

impl HttpTransport {
    /// Create a new session with the fixed `User-Agent`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TronError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: Url,
        headers: HeaderMap,
        body: &Value,
        timeout: Duration,
    ) -> Result<RawResponse> {
        let resp = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .timeout(timeout)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        Ok(RawResponse { status, body })
    }
}
