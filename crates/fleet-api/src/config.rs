//! Configuration for the fleet API client

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable consulted for the bearer token when the config has none
pub const TOKEN_ENV_VAR: &str = "FLEET_API_TOKEN";

/// Transport configuration shared by every entity client
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ClientConfig {
    /// Fill in the bearer token from the environment if the file left it out
    pub fn resolve_secrets(&mut self) -> crate::Result<()> {
        self.resolve_secrets_from(|key| std::env::var(key).ok())
    }

    pub fn resolve_secrets_from<F>(&mut self, lookup: F) -> crate::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.token.is_none() {
            if let Some(token) = lookup(TOKEN_ENV_VAR).filter(|t| !t.is_empty()) {
                tracing::debug!("Using bearer token from {}", TOKEN_ENV_VAR);
                self.token = Some(token);
            }
        }
        self.validate()
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(crate::ApiError::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(crate::ApiError::Config(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<ClientConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ApiError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: ClientConfig = serde_json::from_str(&content)?;
    Ok(config)
}
