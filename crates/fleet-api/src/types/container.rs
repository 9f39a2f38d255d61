//! Container workloads running on a server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A container seen on a server.
///
/// Identity and timestamps are optional because the same shape is used for
/// freshly collected containers and persisted ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub server_id: i64,
    /// Runtime identifier assigned by the container engine
    pub container_id: String,
    pub name: String,
    pub image: String,
    /// Free-form status string as reported by the runtime, e.g. `Up 3 hours`
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
    #[serde(
        default,
        with = "super::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_seen_at: Option<DateTime<Utc>>,
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
