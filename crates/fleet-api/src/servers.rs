//! Client for the server endpoints

use std::sync::Arc;

use crate::io::HttpClient;
use crate::response::{check_status, decode_enveloped, decode_raw};
use crate::types::{
    MonitoringData, Server, ServerHealth, ServerRegisterRequest, ServerUpdateRequest,
    ServerWithHealth,
};

/// Register, edit, remove and read servers
#[derive(Clone)]
pub struct ServersApi {
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ServersApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServersApi").finish_non_exhaustive()
    }
}

impl ServersApi {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Register a new server; the backend encrypts the password and fills defaults
    pub async fn register(&self, request: &ServerRegisterRequest) -> crate::Result<Server> {
        tracing::debug!("Registering server '{}' at {}", request.name, request.ip_address);
        let body = serde_json::to_value(request)?;
        let response = self.http.post_json("/servers/register", Some(body)).await?;
        let server: Server = decode_enveloped(response)?;
        tracing::debug!("Registered server '{}' with id {}", server.name, server.id);
        Ok(server)
    }

    /// Apply a partial patch; fields left unset in `patch` are not touched
    pub async fn update(&self, id: i64, patch: &ServerUpdateRequest) -> crate::Result<Server> {
        tracing::debug!("Updating server {}", id);
        let body = serde_json::to_value(patch)?;
        let response = self
            .http
            .patch_json(&format!("/servers/edit/{}", id), body)
            .await?;
        decode_enveloped(response)
    }

    /// Remove a server. Deleting an id that no longer exists is `NotFound`.
    pub async fn delete(&self, id: i64) -> crate::Result<()> {
        tracing::debug!("Deleting server {}", id);
        let response = self.http.delete(&format!("/servers/delete/{}", id)).await?;
        check_status(response)?;
        Ok(())
    }

    /// All servers, without health or container enrichment
    pub async fn list(&self) -> crate::Result<Vec<Server>> {
        let response = self.http.get("/servers/all-servers").await?;
        decode_raw(response)
    }

    /// All servers with their current health and container list
    pub async fn list_with_containers(&self) -> crate::Result<Vec<ServerWithHealth>> {
        let response = self.http.get("/containers/all").await?;
        decode_raw(response)
    }

    /// Collect the containers of one server and return it with its health
    pub async fn collect_containers(&self, id: i64) -> crate::Result<ServerWithHealth> {
        tracing::debug!("Collecting containers for server {}", id);
        let response = self
            .http
            .post_json(&format!("/containers/collect/{}", id), None)
            .await?;
        decode_raw(response)
    }

    /// Latest health sample for one server
    pub async fn health(&self, id: i64) -> crate::Result<ServerHealth> {
        let response = self
            .http
            .get(&format!("/servers/server-health/{}", id))
            .await?;
        decode_raw(response)
    }

    /// Run a full monitoring sweep over servers, containers and databases.
    ///
    /// The backend probes every host actively, so this is meant for
    /// dashboard refreshes rather than tight polling loops.
    pub async fn collect_all(&self) -> crate::Result<Vec<MonitoringData>> {
        tracing::debug!("Requesting full monitoring sweep");
        let response = self.http.post_json("/monitoring/collect-all", None).await?;
        let data: Vec<MonitoringData> = decode_raw(response)?;
        tracing::debug!("Monitoring sweep returned {} servers", data.len());
        Ok(data)
    }
}
