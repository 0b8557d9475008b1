//! Landing page server.
//!
//! Serves the compiled Leptos frontend and a health endpoint. When the
//! frontend bundle has not been built, the statically rendered landing page
//! is served instead.

mod handlers;
mod routes;
pub mod static_assets;

use std::net::{IpAddr, SocketAddr};

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use handlers::HealthResponse;
pub use routes::create_router;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(notes::api::bind),
        help("Is another process already listening on this port? Try --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(notes::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Log verbosity (0 = warn, 1 = info, 2 = debug, 3+ = trace)
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5173,
            verbosity: 1,
        }
    }
}

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("notes_landing={level},tower_http={level}")
}

/// Initialize tracing subscriber with env filter. Logs go to stderr.
pub fn init_tracing(verbosity: u8) {
    init_tracing_with_filter(default_filter(verbosity));
}

/// Like [`init_tracing`], with a caller-chosen fallback when `RUST_LOG` is unset.
pub fn init_tracing_with_filter(fallback: String) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Run the landing server with the given configuration
pub async fn run(config: Config) -> Result<(), ApiError> {
    init_tracing(config.verbosity);

    let app = create_router().layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("Landing server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
