//! Database entity and its connection health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{redact, HealthStatus};

/// A managed database instance attached to a server.
///
/// Passwords are write-only: they go out on register/update and never come
/// back. A password echoed by the backend is dropped during decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: i64,
    pub server_id: i64,
    pub name: String,
    pub db_type: String,
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Oracle-style service name, used instead of `database_name` by some engines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub username: String,
    #[serde(
        default,
        with = "super::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "super::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /databases/register`
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseRegisterRequest {
    pub server_id: i64,
    pub name: String,
    pub db_type: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl std::fmt::Debug for DatabaseRegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseRegisterRequest")
            .field("server_id", &self.server_id)
            .field("name", &self.name)
            .field("db_type", &self.db_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database_name", &self.database_name)
            .field("service_name", &self.service_name)
            .finish()
    }
}

/// Body of `PATCH /databases/edit/{id}`; unset fields are left unchanged
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl DatabaseUpdateRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Debug for DatabaseUpdateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseUpdateRequest")
            .field("server_id", &self.server_id)
            .field("name", &self.name)
            .field("db_type", &self.db_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_name", &self.database_name)
            .field("service_name", &self.service_name)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}

/// Point-in-time connection probe result for a database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseHealth {
    #[serde(default)]
    pub id: Option<i64>,
    pub database_id: i64,
    pub status: HealthStatus,
    pub is_connected: bool,
    #[serde(default)]
    pub connection_time_ms: Option<f64>,
    #[serde(default)]
    pub query_time_ms: Option<f64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(with = "super::timestamp")]
    pub checked_at: DateTime<Utc>,
}

/// A database together with its latest health probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseWithHealth {
    pub database: Database,
    #[serde(default)]
    pub health: Option<DatabaseHealth>,
}
