//! reqwest-backed transport used by the CLI.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::COOKIE;

use super::{CHECK_SESSION_PATH, RawResponse, SessionToken, SessionTransport, TransportError};

/// Session-check transport over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Build a transport for `base_url` with a per-request timeout.
    ///
    /// A rustls crypto provider must be installed before calling this.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the session-check endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHECK_SESSION_PATH)
    }
}

impl SessionTransport for HttpTransport {
    async fn check_session(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<RawResponse, TransportError> {
        let mut request = self.client.get(self.endpoint());
        if let Some(token) = token {
            request = request.header(COOKIE, token.cookie_header());
        }

        let response = request.send().await.map_err(request_error)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn request_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::Unreachable(e.to_string())
    } else {
        TransportError::Client(e.to_string())
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;
