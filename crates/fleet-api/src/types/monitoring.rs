//! Composite read views assembled by the backend

use serde::{Deserialize, Serialize};

use super::{Container, DatabaseWithHealth, Server, ServerHealth};

/// A server with its current health, containers and (optionally) databases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerWithHealth {
    pub server: Server,
    #[serde(default)]
    pub health: Option<ServerHealth>,
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<DatabaseWithHealth>>,
}

/// One entry of a full monitoring sweep: a server, its health and every database on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringData {
    pub server: Server,
    #[serde(default)]
    pub health: Option<ServerHealth>,
    #[serde(default)]
    pub databases: Vec<DatabaseWithHealth>,
}

impl MonitoringData {
    /// Databases whose latest probe reported a live connection
    pub fn connected_databases(&self) -> impl Iterator<Item = &DatabaseWithHealth> {
        self.databases
            .iter()
            .filter(|db| db.health.as_ref().is_some_and(|h| h.is_connected))
    }
}

/// Per-server database listing; same shape as a monitoring sweep entry
pub type ServerDatabasesData = MonitoringData;
