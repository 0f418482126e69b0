//! HTTP transport for the helpdesk service
//!
//! The service exposes a single endpoint addressed by query parameters. The
//! [`ApiTransport`] trait isolates the typed client from the actual HTTP
//! stack so tests can drive it with canned responses.

use crate::error::{Result, ShadowError};
use async_trait::async_trait;
use serde_json::Value;

/// Query parameters for one service call
pub type Params = [(String, String)];

/// Transport abstraction over the service's single GET endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Perform a GET against the endpoint with the given query parameters and
    /// return the parsed JSON body
    async fn get(&self, params: &Params) -> Result<Value>;
}

/// Transport backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport for the given base URL (e.g.
    /// `http://localhost:8000/api.php`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ticket-shadow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| {
                ShadowError::Transport(format!("failed to initialize HTTP client: {err}"))
            })?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// The configured base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, params: &Params) -> Result<Value> {
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .send()
            .await
            .map_err(|err| ShadowError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ShadowError::Transport(format!("failed to read response: {err}")))?;

        if !status.is_success() {
            return Err(ShadowError::Transport(format!(
                "service returned HTTP {}: {}",
                status,
                truncate_for_error(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|err| {
            ShadowError::Transport(format!(
                "invalid JSON from service: {err} (body: {})",
                truncate_for_error(&body)
            ))
        })
    }
}

fn truncate_for_error(body: &str) -> String {
    const MAX_LEN: usize = 200;
    if body.chars().count() <= MAX_LEN {
        body.to_owned()
    } else {
        format!("{}...", body.chars().take(MAX_LEN).collect::<String>())
    }
}
