//! Serve command - starts the landing page server

use std::net::IpAddr;

use crate::api::{self, Config};
use crate::cli::error::CliResult;

/// Run the landing server
pub async fn run(host: IpAddr, port: u16, verbosity: u8) -> CliResult<()> {
    // Print startup banner before logging is initialized
    println!();
    println!("notes landing server starting...");
    println!("   Landing: http://{}:{}/", host, port);
    println!("   Health:  http://{}:{}/health", host, port);
    println!();

    api::run(Config {
        host,
        port,
        verbosity,
    })
    .await?;

    Ok(())
}
