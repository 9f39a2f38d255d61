//! HTTP transport abstraction for testability

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::ApiError;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP transport for dependency injection.
///
/// Paths are relative to the backend base URL and start with `/`.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request
    async fn get(&self, path: &str) -> crate::Result<HttpResponse>;

    /// Send a POST request with an optional JSON body
    async fn post_json(&self, path: &str, body: Option<Value>) -> crate::Result<HttpResponse>;

    /// Send a PATCH request with a JSON body
    async fn patch_json(&self, path: &str, body: Value) -> crate::Result<HttpResponse>;

    /// Send a DELETE request
    async fn delete(&self, path: &str) -> crate::Result<HttpResponse>;
}

/// Production HTTP transport using reqwest
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for ReqwestHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestHttpClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

impl ReqwestHttpClient {
    pub fn new(config: &ClientConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Config(format!("Building HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created ReqwestHttpClient for {}", base_url);

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> crate::Result<HttpResponse> {
        tracing::debug!("{} {}", method, url);
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Reading response body: {}", e)))?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, path: &str) -> crate::Result<HttpResponse> {
        let url = self.url(path);
        self.send("GET", &url, self.client.get(&url)).await
    }

    async fn post_json(&self, path: &str, body: Option<Value>) -> crate::Result<HttpResponse> {
        let url = self.url(path);
        let request = match body {
            Some(body) => self.client.post(&url).json(&body),
            None => self.client.post(&url),
        };
        self.send("POST", &url, request).await
    }

    async fn patch_json(&self, path: &str, body: Value) -> crate::Result<HttpResponse> {
        let url = self.url(path);
        self.send("PATCH", &url, self.client.patch(&url).json(&body))
            .await
    }

    async fn delete(&self, path: &str) -> crate::Result<HttpResponse> {
        let url = self.url(path);
        self.send("DELETE", &url, self.client.delete(&url)).await
    }
}
