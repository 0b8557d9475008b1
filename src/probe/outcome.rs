//! Mapping from a session-check response to what the user is told.

use serde::Deserialize;
use serde_json::Value;

/// Text shown when the session service could not be reached or answered
/// with something unreadable. Never carries internal error detail.
pub const CONNECTIVITY_MESSAGE: &str = "An error occurred while connecting to the server.";

/// Status and body of a completed session-check round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outcome of exactly one probe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCheckResult {
    /// The service accepted the session.
    Success { message: String },
    /// The service refused the session.
    Failure { detail: String },
    /// No usable answer arrived. `description` is for operators only.
    TransportError { description: String },
}

impl SessionCheckResult {
    pub fn transport(description: impl Into<String>) -> Self {
        SessionCheckResult::TransportError {
            description: description.into(),
        }
    }

    /// The terminal state this outcome puts the invocation in.
    pub fn state(&self) -> ProbeState {
        match self {
            SessionCheckResult::Success { .. } => ProbeState::NotifiedSuccess,
            SessionCheckResult::Failure { .. } => ProbeState::NotifiedFailure,
            SessionCheckResult::TransportError { .. } => ProbeState::NotifiedTransportError,
        }
    }

    /// The user-facing notification for this outcome.
    pub fn notification(&self) -> Notification {
        match self {
            SessionCheckResult::Success { message } => Notification {
                kind: NotificationKind::Success,
                text: format!("Success: {}", message),
            },
            SessionCheckResult::Failure { detail } => Notification {
                kind: NotificationKind::Error,
                text: format!("Error: {}", detail),
            },
            SessionCheckResult::TransportError { .. } => Notification {
                kind: NotificationKind::Connectivity,
                text: CONNECTIVITY_MESSAGE.to_string(),
            },
        }
    }
}

/// Lifecycle of a single probe invocation.
///
/// Every invocation starts `Pending` and moves to exactly one of the
/// `Notified*` states. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Pending,
    NotifiedSuccess,
    NotifiedFailure,
    NotifiedTransportError,
}

impl ProbeState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProbeState::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Connectivity,
}

/// One-shot message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Deserialize)]
struct AcceptedBody {
    message: Option<Value>,
}

#[derive(Deserialize)]
struct RefusedBody {
    detail: Option<Value>,
}

/// Map a completed round trip onto an outcome.
///
/// 2xx bodies must carry `message`, everything else must carry `detail`.
/// A body that is not JSON or lacks the expected field is treated the same
/// as a transport failure.
pub fn classify(response: &RawResponse) -> SessionCheckResult {
    if response.is_success() {
        match serde_json::from_slice::<AcceptedBody>(&response.body) {
            Ok(AcceptedBody {
                message: Some(message),
            }) => match field_text(message) {
                Some(message) => SessionCheckResult::Success { message },
                None => missing_field(response.status, "message"),
            },
            Ok(_) => missing_field(response.status, "message"),
            Err(e) => malformed(response.status, e),
        }
    } else {
        match serde_json::from_slice::<RefusedBody>(&response.body) {
            Ok(RefusedBody {
                detail: Some(detail),
            }) => match field_text(detail) {
                Some(detail) => SessionCheckResult::Failure { detail },
                None => missing_field(response.status, "detail"),
            },
            Ok(_) => missing_field(response.status, "detail"),
            Err(e) => malformed(response.status, e),
        }
    }
}

// Strings are shown as-is; structured values (e.g. validation error lists)
// are shown as compact JSON. Null counts as absent.
fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn missing_field(status: u16, field: &str) -> SessionCheckResult {
    SessionCheckResult::transport(format!(
        "response with status {} has no `{}` field",
        status, field
    ))
}

fn malformed(status: u16, err: serde_json::Error) -> SessionCheckResult {
    SessionCheckResult::transport(format!(
        "malformed response body (status {}): {}",
        status, err
    ))
}
