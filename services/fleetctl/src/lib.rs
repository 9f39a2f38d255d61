//! fleetctl - command-line front end for the fleet monitoring API
//!
//! Every subcommand maps onto exactly one client operation and prints the
//! result as JSON.

pub mod cli;

pub use cli::{Cli, Command, DatabaseCommand, ServerCommand};

use fleet_api::types::{DatabaseRegisterRequest, ServerRegisterRequest};
use fleet_api::{load_config, ApiClient, ClientConfig};
use serde_json::{json, Value};

/// Build the client configuration from the config file and command-line overrides
pub fn resolve_config(cli: &Cli) -> fleet_api::Result<ClientConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        ClientConfig::default()
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    config.resolve_secrets()?;
    Ok(config)
}

/// Run one command against the backend and return its JSON output
pub async fn execute(command: &Command, client: &ApiClient) -> fleet_api::Result<Value> {
    match command {
        Command::Servers(command) => execute_server(command, client).await,
        Command::Databases(command) => execute_database(command, client).await,
    }
}

async fn execute_server(command: &ServerCommand, client: &ApiClient) -> fleet_api::Result<Value> {
    let servers = client.servers();
    let output = match command {
        ServerCommand::List => serde_json::to_value(servers.list().await?)?,
        ServerCommand::Containers => {
            serde_json::to_value(servers.list_with_containers().await?)?
        }
        ServerCommand::Collect { id } => {
            serde_json::to_value(servers.collect_containers(*id).await?)?
        }
        ServerCommand::Health { id } => serde_json::to_value(servers.health(*id).await?)?,
        ServerCommand::CollectAll => serde_json::to_value(servers.collect_all().await?)?,
        ServerCommand::Register(args) => {
            let request = ServerRegisterRequest::from(args);
            serde_json::to_value(servers.register(&request).await?)?
        }
        ServerCommand::Update(args) => {
            serde_json::to_value(servers.update(args.id, &args.patch()).await?)?
        }
        ServerCommand::Delete { id } => {
            servers.delete(*id).await?;
            tracing::info!("Deleted server {}", id);
            json!({ "deleted": id })
        }
    };
    Ok(output)
}

async fn execute_database(
    command: &DatabaseCommand,
    client: &ApiClient,
) -> fleet_api::Result<Value> {
    let databases = client.databases();
    let output = match command {
        DatabaseCommand::List => serde_json::to_value(databases.list().await?)?,
        DatabaseCommand::Health => serde_json::to_value(databases.list_with_health().await?)?,
        DatabaseCommand::Register(args) => {
            let request = DatabaseRegisterRequest::from(args);
            serde_json::to_value(databases.register(&request).await?)?
        }
        DatabaseCommand::Update(args) => {
            serde_json::to_value(databases.update(args.id, &args.patch()).await?)?
        }
        DatabaseCommand::Delete { id } => {
            databases.delete(*id).await?;
            tracing::info!("Deleted database {}", id);
            json!({ "deleted": id })
        }
    };
    Ok(output)
}
