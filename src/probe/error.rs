use thiserror::Error;

/// Reasons a session-check round trip did not complete.
///
/// These are operator diagnostics. The user only ever sees
/// [`CONNECTIVITY_MESSAGE`](super::CONNECTIVITY_MESSAGE).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("session service unreachable: {0}")]
    Unreachable(String),

    #[error("session check timed out: {0}")]
    Timeout(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("http client error: {0}")]
    Client(String),
}
