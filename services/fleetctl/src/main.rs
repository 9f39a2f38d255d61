//! fleetctl CLI
//!
//! Command-line interface for the fleet monitoring API.

use clap::Parser;
use fleet_api::ApiClient;
use fleetctl::{execute, resolve_config, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        cli.config,
        cli.base_url,
        cli.log_level
    );

    let config = resolve_config(&cli)?;
    tracing::debug!("Using backend at {}", config.base_url);

    let client = ApiClient::new(&config)?;
    let output = execute(&cli.command, &client).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
