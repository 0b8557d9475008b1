//! Probe command - one session check from the terminal

use std::io::Write;

use crate::cli::error::{CliError, CliResult};
use crate::config::ProbeConfig;
use crate::probe::http::HttpTransport;
use crate::probe::{
    Activation, Notification, NotificationKind, Notifier, SessionCheckResult, SessionProbe,
};

/// Prints notifications to the terminal.
///
/// Success goes to stdout, everything else to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => {
                let _ = writeln!(std::io::stdout(), "{}", notification);
            }
            NotificationKind::Error | NotificationKind::Connectivity => {
                let _ = writeln!(std::io::stderr(), "{}", notification);
            }
        }
    }
}

/// Run one probe activation against the configured session service.
///
/// The notifier is told exactly once. Rejection and transport failure are
/// returned as errors so the process exits non-zero.
pub async fn run(config: &ProbeConfig, notifier: &dyn Notifier) -> CliResult<String> {
    let transport = HttpTransport::new(&config.api_url, config.timeout)?;
    let probe = SessionProbe::new(transport);

    match probe.activate(config.token.as_ref(), notifier).await {
        Activation::Completed(SessionCheckResult::Success { message }) => Ok(message),
        Activation::Completed(SessionCheckResult::Failure { detail }) => {
            Err(CliError::SessionRejected { detail })
        }
        Activation::Completed(SessionCheckResult::TransportError { .. }) => {
            Err(CliError::Connectivity)
        }
        // A fresh probe has nothing in flight
        Activation::Coalesced => Err(CliError::Connectivity),
    }
}
