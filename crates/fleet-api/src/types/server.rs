//! Server entity and its health samples

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{redact, HealthStatus, ServerStatus};

/// A monitored host as persisted by the backend
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrator_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Password as stored by the backend (encrypted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub ip_address: String,
    pub port: u16,
    pub status: ServerStatus,
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

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("user_name", &self.user_name)
            .field("password", &redact(&self.password))
            .field("ip_address", &self.ip_address)
            .field("port", &self.port)
            .field("status", &self.status)
            .finish()
    }
}

/// Body of `POST /servers/register`
#[derive(Clone, Serialize, Deserialize)]
pub struct ServerRegisterRequest {
    pub registrator_id: i64,
    pub name: String,
    /// Plaintext, encrypted by the backend on receipt
    pub password: String,
    pub ip_address: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatus>,
}

impl ServerRegisterRequest {
    pub fn new(
        registrator_id: i64,
        name: impl Into<String>,
        password: impl Into<String>,
        ip_address: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            registrator_id,
            name: name.into(),
            password: password.into(),
            ip_address: ip_address.into(),
            port,
            user_name: None,
            status: None,
        }
    }

    pub fn with_status(mut self, status: ServerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}

impl std::fmt::Debug for ServerRegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerRegisterRequest")
            .field("registrator_id", &self.registrator_id)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("ip_address", &self.ip_address)
            .field("port", &self.port)
            .field("user_name", &self.user_name)
            .field("status", &self.status)
            .finish()
    }
}

/// Body of `PATCH /servers/edit/{id}`; unset fields are left unchanged
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatus>,
}

impl ServerUpdateRequest {
    pub fn status(status: ServerStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Debug for ServerUpdateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerUpdateRequest")
            .field("name", &self.name)
            .field("password", &redact(&self.password))
            .field("ip_address", &self.ip_address)
            .field("port", &self.port)
            .field("status", &self.status)
            .finish()
    }
}

/// Point-in-time health sample for a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerHealth {
    /// Absent for samples that were not persisted
    #[serde(default)]
    pub id: Option<i64>,
    pub server_id: i64,
    pub status: HealthStatus,
    #[serde(default)]
    pub cpu_usage: Option<f64>,
    #[serde(default)]
    pub memory_usage: Option<f64>,
    #[serde(default)]
    pub disk_usage: Option<f64>,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(with = "super::timestamp")]
    pub checked_at: DateTime<Utc>,
}
