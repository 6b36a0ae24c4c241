//! Error types for RPC operations.

use vchain_vida::ChainReadError;

/// Errors that can occur when calling a VChain RPC node.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Node returned a non-2xx response.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Error message from the node.
        message: String,
    },

    /// Resource not found (404).
    #[error("not found")]
    NotFound,

    /// Transaction was rejected by the node.
    #[error("transaction rejected ({code}): {description}")]
    Rejected {
        /// The rejection status code.
        code: i32,
        /// Human-readable rejection description.
        description: String,
    },
}

impl RpcError {
    /// Whether this failure happened at the transport level, before the
    /// node produced any response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout())
    }
}

impl From<RpcError> for ChainReadError {
    fn from(err: RpcError) -> Self {
        if err.is_network() {
            ChainReadError::Network(err.to_string())
        } else {
            ChainReadError::Rpc(err.to_string())
        }
    }
}
