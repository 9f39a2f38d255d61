//! Error types for the fleet API client

/// Errors that can occur while talking to the fleet monitoring backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Not found ({status}): {message}")]
    NotFound { status: u16, message: String },

    #[error("Conflict ({status}): {message}")]
    Conflict { status: u16, message: String },

    #[error("Request failed ({status}): {message}")]
    Request { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Backend status code, for errors that came back as an HTTP response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { status, .. }
            | ApiError::NotFound { status, .. }
            | ApiError::Conflict { status, .. }
            | ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// Result type alias for fleet API operations
pub type Result<T> = std::result::Result<T, ApiError>;
