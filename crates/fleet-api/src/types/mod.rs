//! Entity, request and composite view types shared with the backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod container;
pub mod database;
pub mod monitoring;
pub mod server;
pub mod timestamp;

pub use container::Container;
pub use database::{
    Database, DatabaseHealth, DatabaseRegisterRequest, DatabaseUpdateRequest, DatabaseWithHealth,
};
pub use monitoring::{MonitoringData, ServerDatabasesData, ServerWithHealth};
pub use server::{Server, ServerHealth, ServerRegisterRequest, ServerUpdateRequest};

/// Administrative state of a registered server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    Up,
    Down,
    Decommissioned,
    Inactive,
}

impl ServerStatus {
    pub const ALL: [ServerStatus; 4] = [
        ServerStatus::Up,
        ServerStatus::Down,
        ServerStatus::Decommissioned,
        ServerStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Up => "up",
            ServerStatus::Down => "down",
            ServerStatus::Decommissioned => "decommissioned",
            ServerStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServerStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown server status {:?}", s))
    }
}

/// Outcome of a health probe against a server or database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Offline,
    Error,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unhealthy => "unhealthy",
            HealthStatus::Offline => "offline",
            HealthStatus::Error => "error",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes a secret field as `Some("<redacted>")` in hand-written `Debug` impls
pub(crate) fn redact(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "<redacted>")
}
