//! Client for the database endpoints

use std::sync::Arc;

use crate::io::HttpClient;
use crate::response::{check_status, decode_enveloped, decode_raw};
use crate::types::{Database, DatabaseRegisterRequest, DatabaseUpdateRequest, DatabaseWithHealth};

/// Register, edit, remove and read databases
#[derive(Clone)]
pub struct DatabasesApi {
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for DatabasesApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasesApi").finish_non_exhaustive()
    }
}

impl DatabasesApi {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Register a database. The returned entity never carries the password.
    pub async fn register(&self, request: &DatabaseRegisterRequest) -> crate::Result<Database> {
        tracing::debug!(
            "Registering {} database '{}' on server {}",
            request.db_type,
            request.name,
            request.server_id
        );
        let body = serde_json::to_value(request)?;
        let response = self.http.post_json("/databases/register", Some(body)).await?;
        let database: Database = decode_enveloped(response)?;
        tracing::debug!("Registered database '{}' with id {}", database.name, database.id);
        Ok(database)
    }

    /// Apply a partial patch; fields left unset in `patch` are not touched
    pub async fn update(&self, id: i64, patch: &DatabaseUpdateRequest) -> crate::Result<Database> {
        tracing::debug!("Updating database {}", id);
        let body = serde_json::to_value(patch)?;
        let response = self
            .http
            .patch_json(&format!("/databases/edit/{}", id), body)
            .await?;
        decode_enveloped(response)
    }

    /// Remove a database. Deleting an id that no longer exists is `NotFound`.
    pub async fn delete(&self, id: i64) -> crate::Result<()> {
        tracing::debug!("Deleting database {}", id);
        let response = self
            .http
            .delete(&format!("/databases/delete/{}", id))
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// All databases with their latest health probe
    pub async fn list_with_health(&self) -> crate::Result<Vec<DatabaseWithHealth>> {
        let response = self.http.get("/databases/collect/all").await?;
        decode_raw(response)
    }

    /// All databases, without health.
    ///
    /// The backend has no plain listing endpoint, so this reads the health
    /// listing and drops the probe results.
    pub async fn list(&self) -> crate::Result<Vec<Database>> {
        Ok(self
            .list_with_health()
            .await?
            .into_iter()
            .map(|entry| entry.database)
            .collect())
    }
}
