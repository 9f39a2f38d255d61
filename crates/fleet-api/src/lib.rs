//! Fleet API - typed client for the fleet monitoring backend
//!
//! Wraps the REST endpoints for servers, databases and their health data.
//! Every operation is a single request over an injected [`io::HttpClient`].

pub mod config;
pub mod databases;
pub mod error;
pub mod io;
pub mod response;
pub mod servers;
pub mod types;

pub use config::{load_config, ClientConfig};
pub use databases::DatabasesApi;
pub use error::{ApiError, Result};
pub use servers::ServersApi;

use std::sync::Arc;

use crate::io::{HttpClient, ReqwestHttpClient};

/// Both entity clients over one shared transport
#[derive(Debug, Clone)]
pub struct ApiClient {
    servers: ServersApi,
    databases: DatabasesApi,
}

impl ApiClient {
    /// Build a client backed by reqwest from the given configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(config)?);
        Ok(Self::with_transport(http))
    }

    /// Build a client over any transport, e.g. a test double
    pub fn with_transport(http: Arc<dyn HttpClient>) -> Self {
        Self {
            servers: ServersApi::new(Arc::clone(&http)),
            databases: DatabasesApi::new(http),
        }
    }

    pub fn servers(&self) -> &ServersApi {
        &self.servers
    }

    pub fn databases(&self) -> &DatabasesApi {
        &self.databases
    }
}
