use gloo_net::http::Request;
use web_sys::RequestCredentials;

use notes_landing::probe::{
    CHECK_SESSION_PATH, RawResponse, SessionToken, SessionTransport, TransportError,
};

/// Session service origin. Override at build time with NOTES_API_URL.
pub const SESSION_API_ORIGIN: &str = match option_env!("NOTES_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// Browser transport for the session check.
///
/// Cookies set by the session service travel with the request
/// (`credentials: include`). Browsers refuse a script-set `Cookie` header, so
/// an explicit token is ignored here and the ambient cookie is used.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    origin: String,
}

impl GlooTransport {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }
}

impl SessionTransport for GlooTransport {
    async fn check_session(
        &self,
        _token: Option<&SessionToken>,
    ) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.origin, CHECK_SESSION_PATH);

        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(RawResponse::new(status, body))
    }
}
