//! HTTP transport for import requests.
//!
//! # Responsibilities
//! - POST the request body to the keymanager endpoint
//! - Present the virtual host in the `Host` header
//! - Read the full response body
//!
//! # Design Decisions
//! - The transport makes exactly one attempt; retries live in `resilience`
//! - Any HTTP response, whatever its status, is a successful transport
//! - No request timeout beyond the client's defaults

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HOST};
use thiserror::Error;
use url::Url;

use crate::http::response::ImportResult;

const APPLICATION_JSON: &str = "application/json";

/// Transport level failures. These are the only failures worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("error POSTing to keymanager API: {0}")]
    Send(String),

    #[error("error reading response body: {0}")]
    Body(String),
}

/// One-shot delivery of a request body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        url: &Url,
        virtual_host: &str,
        body: &str,
    ) -> Result<ImportResult, TransportError>;
}

/// reqwest backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport that connects directly, ignoring proxy settings.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &Url,
        virtual_host: &str,
        body: &str,
    ) -> Result<ImportResult, TransportError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .header(HOST, virtual_host)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(ImportResult::new(status, body))
    }
}
