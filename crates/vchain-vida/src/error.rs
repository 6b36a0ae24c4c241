//! Error types for VIDA ingestion.

/// Error returned by caller-supplied callbacks (transaction handlers and
/// checkpoint sinks). Carried only for logging; never propagated into the
/// subscription loop.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by a [`ChainReader`](crate::ChainReader) operation.
///
/// Implementors classify their own failures so the subscription can log
/// transport problems and node-side problems distinctly. Both classes are
/// retried on the next cycle.
#[derive(Debug, thiserror::Error)]
pub enum ChainReadError {
    /// Transport-level failure: the node could not be reached at all
    /// (connection refused, DNS failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The node was reached but the call failed (bad status code,
    /// malformed response body).
    #[error("rpc error: {0}")]
    Rpc(String),
}
