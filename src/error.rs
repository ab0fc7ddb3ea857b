// src/error.rs

use std::fmt;

/// Global Client Error Enum.
/// Centralizes failure handling for board actions and maps each failure
/// to the notification shown at the point of the failed action.
///
/// Lookup misses inside the stores are not errors; they are absorbed as no-ops.
#[derive(Debug)]
pub enum ClientError {
    // Transport failure (connection refused, reset, DNS)
    Network(String),

    // Mutation attempted without a session, or the server answered 401
    AuthRequired,

    // Signed in, but lacking the capability (not the author, not an admin)
    Forbidden(String),

    // Rejected before dispatch (empty title, empty comment, bad upload)
    Validation(String),

    // Server rejected the request
    Server { status: u16, message: String },

    // Response body could not be decoded
    Decode(String),

    // Missing or malformed configuration
    Config(String),
}

impl ClientError {
    /// Renders the user-visible notification for a failed `action`
    /// (e.g. "delete content").
    pub fn notice(&self, action: &str) -> String {
        match self {
            ClientError::AuthRequired => "Login required.".to_string(),
            ClientError::Forbidden(msg) | ClientError::Validation(msg) => msg.clone(),
            ClientError::Network(_) => {
                format!("Failed to {} due to a network error.", action)
            }
            ClientError::Server { message, .. } => format!("Failed to {}: {}", action, message),
            ClientError::Decode(_) | ClientError::Config(_) => format!("Failed to {}.", action),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {}", msg),
            ClientError::AuthRequired => write!(f, "authentication required"),
            ClientError::Forbidden(msg) => write!(f, "forbidden: {}", msg),
            ClientError::Validation(msg) => write!(f, "validation failed: {}", msg),
            ClientError::Server { status, message } => {
                write!(f, "server rejected request ({}): {}", status, message)
            }
            ClientError::Decode(msg) => write!(f, "failed to decode response: {}", msg),
            ClientError::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Converts `reqwest::Error`, keeping status-bearing failures apart from
/// plain transport failures.
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ClientError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) if status == reqwest::StatusCode::UNAUTHORIZED => {
                ClientError::AuthRequired
            }
            Some(status) => ClientError::Server {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ClientError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::Validation(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Config(err.to_string())
    }
}
