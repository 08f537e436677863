//! Client error types
//!
//! Every API operation resolves to one of these. The UI boundary turns them
//! into an error banner and leaves the rendered roster untouched.

use thiserror::Error;

/// Banner text for API rejections that carry no `detail`
pub const GENERIC_API_ERROR: &str = "An error occurred";

/// Errors that can occur while talking to the activities API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never completed (connectivity, server unreachable)
    #[error("Network error: {0}")]
    Network(String),

    /// The request completed with a non-2xx status
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or(GENERIC_API_ERROR))]
    Api { status: u16, detail: Option<String> },

    /// A response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text to show in the error banner.
    ///
    /// API rejections surface the server's `detail`. Transport and decode
    /// failures surface the operation-specific `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Api { detail: None, .. } => GENERIC_API_ERROR.to_string(),
            ClientError::Network(_) | ClientError::Decode(_) => fallback.to_string(),
        }
    }

    /// HTTP status for API rejections
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type alias for API operations
pub type ClientResult<T> = Result<T, ClientError>;
