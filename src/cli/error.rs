use miette::Diagnostic;
use thiserror::Error;

use crate::api::ApiError;
use crate::probe::TransportError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Session rejected: {detail}")]
    #[diagnostic(
        code(notes::cli::session_rejected),
        help("Sign in again, or pass a valid token with --token or NOTES_SESSION_TOKEN.")
    )]
    SessionRejected { detail: String },

    #[error("Failed to connect to the session service")]
    #[diagnostic(
        code(notes::cli::connectivity),
        help(
            "Is the session service running? Set NOTES_API_URL or pass --api-url to point at it.\nRe-run with -v to see the underlying error."
        )
    )]
    Connectivity,

    #[error("Failed to build HTTP client: {0}")]
    #[diagnostic(code(notes::cli::client))]
    Client(#[from] TransportError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Server(#[from] ApiError),
}

pub type CliResult<T> = Result<T, CliError>;
