//! Client error types.

use thiserror::Error;

pub type AdminResult<T> = Result<T, AdminError>;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("{method} {url} -> {status}\n{body}")]
    Api {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("User already exists unexpectedly while creating: {0}")]
    Conflict(String),

    #[error("Created user but couldn't determine id for {0}")]
    IdDiscovery(String),

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for AdminError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            AdminError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            AdminError::Network("Request timed out".to_string())
        } else {
            AdminError::Network(e.to_string())
        }
    }
}
