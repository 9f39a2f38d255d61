//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use fleet_api::types::{
    DatabaseRegisterRequest, DatabaseUpdateRequest, ServerRegisterRequest, ServerStatus,
    ServerUpdateRequest,
};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "fleetctl")]
#[command(about = "Manage servers and databases of the fleet monitoring backend")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Server registry and monitoring
    #[command(subcommand)]
    Servers(ServerCommand),

    /// Database registry and health
    #[command(subcommand)]
    Databases(DatabaseCommand),
}

#[derive(Debug, Subcommand)]
pub enum ServerCommand {
    /// List servers without enrichment
    List,
    /// List servers with health and containers
    Containers,
    /// Collect containers for one server
    Collect { id: i64 },
    /// Latest health sample for one server
    Health { id: i64 },
    /// Run a full monitoring sweep
    CollectAll,
    /// Register a new server
    Register(ServerRegisterArgs),
    /// Change fields of a server
    Update(ServerUpdateArgs),
    /// Remove a server
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum DatabaseCommand {
    /// List databases without health
    List,
    /// List databases with their latest health probe
    Health,
    /// Register a new database
    Register(DatabaseRegisterArgs),
    /// Change fields of a database
    Update(DatabaseUpdateArgs),
    /// Remove a database
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct ServerRegisterArgs {
    #[arg(long)]
    pub registrator_id: i64,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub ip_address: String,
    #[arg(long)]
    pub port: u16,
    #[arg(long)]
    pub user_name: Option<String>,
    /// Initial status (up, down, decommissioned, inactive)
    #[arg(long)]
    pub status: Option<ServerStatus>,
}

impl From<&ServerRegisterArgs> for ServerRegisterRequest {
    fn from(args: &ServerRegisterArgs) -> Self {
        ServerRegisterRequest {
            registrator_id: args.registrator_id,
            name: args.name.clone(),
            password: args.password.clone(),
            ip_address: args.ip_address.clone(),
            port: args.port,
            user_name: args.user_name.clone(),
            status: args.status,
        }
    }
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("fields").required(true).multiple(true)))]
pub struct ServerUpdateArgs {
    pub id: i64,
    #[arg(long, group = "fields")]
    pub name: Option<String>,
    #[arg(long, group = "fields")]
    pub password: Option<String>,
    #[arg(long, group = "fields")]
    pub ip_address: Option<String>,
    #[arg(long, group = "fields")]
    pub port: Option<u16>,
    #[arg(long, group = "fields")]
    pub status: Option<ServerStatus>,
}

impl ServerUpdateArgs {
    pub fn patch(&self) -> ServerUpdateRequest {
        ServerUpdateRequest {
            name: self.name.clone(),
            password: self.password.clone(),
            ip_address: self.ip_address.clone(),
            port: self.port,
            status: self.status,
        }
    }
}

#[derive(Debug, Args)]
pub struct DatabaseRegisterArgs {
    #[arg(long)]
    pub server_id: i64,
    #[arg(long)]
    pub name: String,
    /// Engine, e.g. postgres, mysql, oracle
    #[arg(long)]
    pub db_type: String,
    #[arg(long)]
    pub host: String,
    #[arg(long)]
    pub port: u16,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub database_name: Option<String>,
    #[arg(long)]
    pub service_name: Option<String>,
}

impl From<&DatabaseRegisterArgs> for DatabaseRegisterRequest {
    fn from(args: &DatabaseRegisterArgs) -> Self {
        DatabaseRegisterRequest {
            server_id: args.server_id,
            name: args.name.clone(),
            db_type: args.db_type.clone(),
            host: args.host.clone(),
            port: args.port,
            username: args.username.clone(),
            password: args.password.clone(),
            database_name: args.database_name.clone(),
            service_name: args.service_name.clone(),
        }
    }
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("fields").required(true).multiple(true)))]
pub struct DatabaseUpdateArgs {
    pub id: i64,
    #[arg(long, group = "fields")]
    pub server_id: Option<i64>,
    #[arg(long, group = "fields")]
    pub name: Option<String>,
    #[arg(long, group = "fields")]
    pub db_type: Option<String>,
    #[arg(long, group = "fields")]
    pub host: Option<String>,
    #[arg(long, group = "fields")]
    pub port: Option<u16>,
    #[arg(long, group = "fields")]
    pub database_name: Option<String>,
    #[arg(long, group = "fields")]
    pub service_name: Option<String>,
    #[arg(long, group = "fields")]
    pub username: Option<String>,
    #[arg(long, group = "fields")]
    pub password: Option<String>,
}

impl DatabaseUpdateArgs {
    pub fn patch(&self) -> DatabaseUpdateRequest {
        DatabaseUpdateRequest {
            server_id: self.server_id,
            name: self.name.clone(),
            db_type: self.db_type.clone(),
            host: self.host.clone(),
            port: self.port,
            database_name: self.database_name.clone(),
            service_name: self.service_name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
