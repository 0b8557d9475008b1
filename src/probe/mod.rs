//! Session probe
//!
//! Asks the session service whether the current user has a usable session
//! and turns the answer into exactly one notification:
//! - `Success: {message}` when the service accepts the session
//! - `Error: {detail}` when it refuses
//! - a generic connectivity message when no usable answer arrives
//!
//! The network call sits behind [`SessionTransport`] and the user-facing
//! surface behind [`Notifier`], so the mapping can be exercised without a
//! browser or a live service.

mod error;
mod guard;
#[cfg(feature = "backend")]
pub mod http;
mod outcome;

use std::future::Future;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

pub use error::TransportError;
pub use guard::{InFlight, InFlightTicket};
pub use outcome::{
    CONNECTIVITY_MESSAGE, Notification, NotificationKind, ProbeState, RawResponse,
    SessionCheckResult, classify,
};

/// Path of the session-check endpoint on the session service.
pub const CHECK_SESSION_PATH: &str = "/users/check-session";

/// Name of the cookie the session service issues at sign-in.
pub const SESSION_COOKIE: &str = "access_token";

/// Opaque session credential.
///
/// The value is never printed; `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `Cookie` header value carrying this token.
    pub fn cookie_header(&self) -> String {
        format!("{}={}", SESSION_COOKIE, self.0)
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// One GET against the session-check endpoint.
///
/// Implementations return any completed round trip as a [`RawResponse`],
/// whatever its status. Only failures to complete the round trip are errors.
pub trait SessionTransport {
    fn check_session(
        &self,
        token: Option<&SessionToken>,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// Surface that shows a notification to the user.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// What happened when the control was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The probe ran and the user was notified.
    Completed(SessionCheckResult),
    /// Another probe was already in flight; nothing was sent or shown.
    Coalesced,
}

/// Runs session checks over a transport.
///
/// Each call is independent: no outcome is cached or carried into the next
/// call. Concurrent activations are coalesced by the shared [`InFlight`]
/// guard.
#[derive(Debug, Clone)]
pub struct SessionProbe<T> {
    transport: T,
    in_flight: InFlight,
}

impl<T: SessionTransport> SessionProbe<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            in_flight: InFlight::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    /// Perform one round trip and classify it. Does not notify.
    pub async fn check(&self, token: Option<&SessionToken>) -> SessionCheckResult {
        debug!(path = CHECK_SESSION_PATH, with_token = token.is_some(), "checking session");

        let result = match self.transport.check_session(token).await {
            Ok(response) => classify(&response),
            Err(e) => SessionCheckResult::transport(e.to_string()),
        };

        if let SessionCheckResult::TransportError { description } = &result {
            warn!(error = %description, "session check did not complete");
        }

        result
    }

    /// Handle one activation of the call-to-action control.
    ///
    /// Emits exactly one notification when the probe runs, none when it is
    /// coalesced into a probe already in flight.
    pub async fn activate(
        &self,
        token: Option<&SessionToken>,
        notifier: &dyn Notifier,
    ) -> Activation {
        let Some(_ticket) = self.in_flight.try_begin() else {
            debug!("session check already in flight, coalescing activation");
            return Activation::Coalesced;
        };

        let result = self.check(token).await;
        notifier.notify(&result.notification());
        Activation::Completed(result)
    }
}
