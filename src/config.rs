//! Probe configuration.
//!
//! Precedence for every setting: explicit value (CLI flag) > environment
//! variable > default.

use std::env;
use std::time::Duration;

use crate::probe::SessionToken;

/// Environment variable for the session service origin.
pub const API_URL_ENV: &str = "NOTES_API_URL";
/// Environment variable for the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "NOTES_PROBE_TIMEOUT_SECS";
/// Environment variable for the session token.
pub const TOKEN_ENV: &str = "NOTES_SESSION_TOKEN";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for running the session probe outside the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub token: Option<SessionToken>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

impl ProbeConfig {
    /// Defaults overlaid with whatever the environment provides.
    pub fn new() -> Self {
        let defaults = Self::default();

        let api_url = env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_url);

        // Unparseable values fall back to the default
        let timeout = env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let token = env::var(TOKEN_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(SessionToken::new);

        Self {
            api_url,
            timeout,
            token,
        }
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    /// A zero timeout is ignored and the current value kept.
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs.filter(|s| *s > 0) {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.token = Some(SessionToken::new(token));
        }
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
