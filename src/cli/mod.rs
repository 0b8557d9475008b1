mod commands;
pub mod error;

use std::net::IpAddr;

use clap::{Parser, Subcommand};

use crate::api;
use crate::config::ProbeConfig;
use error::CliResult;

pub use commands::probe::ConsoleNotifier;

#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about = "Notes landing page server and session probe", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the landing page
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on
        #[arg(short, long, default_value = "5173")]
        port: u16,
    },
    /// Check whether the session service accepts the current session
    Probe {
        /// Session service origin (default: NOTES_API_URL env or http://127.0.0.1:8000)
        #[arg(long)]
        api_url: Option<String>,
        /// Session token sent as the access_token cookie (default: NOTES_SESSION_TOKEN env)
        #[arg(long)]
        token: Option<String>,
        /// Request timeout in seconds (default: NOTES_PROBE_TIMEOUT_SECS env or 10)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            commands::serve::run(host, port, cli.verbose.max(1)).await?;
        }
        Some(Commands::Probe {
            api_url,
            token,
            timeout,
        }) => {
            probe(api_url, token, timeout, cli.verbose).await?;
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["notes", "--help"]);
        }
    }

    Ok(())
}

/// Log filter for one-shot commands when `RUST_LOG` is unset.
///
/// One level quieter than the server: the outcome is already printed, so the
/// underlying error only shows from `-v` up.
fn one_shot_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    };
    format!("notes_landing={level},tower_http={level}")
}

async fn probe(
    api_url: Option<String>,
    token: Option<String>,
    timeout: Option<u64>,
    verbosity: u8,
) -> CliResult<()> {
    api::init_tracing_with_filter(one_shot_filter(verbosity));
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = ProbeConfig::new()
        .with_api_url(api_url)
        .with_token(token)
        .with_timeout_secs(timeout);

    commands::probe::run(&config, &ConsoleNotifier).await?;
    Ok(())
}
