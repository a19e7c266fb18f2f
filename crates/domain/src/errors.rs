//! Error types used throughout the SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the SDK
///
/// Every failure surfaces to the immediate caller of a facade operation.
/// Nothing is retried and nothing is swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CtctError {
    /// Network, DNS or TLS failure before a response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a status the operation does not accept.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not have the shape the operation expects.
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Pagination metadata was present but malformed.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The caller passed an argument that cannot be turned into a request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A multipart body could not be constructed.
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Authorization server rejected a token exchange or introspection.
    #[error("OAuth error: {0}")]
    OAuth(String),
}

impl CtctError {
    /// HTTP status carried by an [`CtctError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable label suitable for logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Api { .. } => "api",
            Self::Mapping(_) => "mapping",
            Self::Protocol(_) => "protocol",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Encoding(_) => "encoding",
            Self::Config(_) => "config",
            Self::OAuth(_) => "oauth",
        }
    }

    /// Best-effort decode of the server error payload of an API error.
    ///
    /// The v2 API reports failures as `[{"error_key": .., "error_message": ..}]`.
    /// Returns an empty list for other variants or bodies in another shape.
    pub fn api_details(&self) -> Vec<ApiErrorDetail> {
        match self {
            Self::Api { body, .. } => serde_json::from_str(body).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// One entry of the error payload returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub error_key: String,
    #[serde(default)]
    pub error_message: String,
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, CtctError>;
