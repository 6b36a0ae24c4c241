//! VIDA data types.

use serde::{Deserialize, Serialize};

/// A transaction posted under a VIDA (virtual-chain identifier).
///
/// The payload in `data` is opaque to the SDK; decoding it is the
/// application's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VidaDataTransaction {
    /// Transaction hash (hex-encoded).
    #[serde(default)]
    pub transaction_hash: String,
    /// Sender address (hex-encoded).
    #[serde(default)]
    pub sender: String,
    /// Sender nonce at submission time.
    #[serde(default)]
    pub nonce: u32,
    /// Serialized transaction size in bytes.
    #[serde(default)]
    pub size: u32,
    /// Height of the block containing this transaction.
    #[serde(default)]
    pub block_number: u64,
    /// Index of the transaction within its block.
    #[serde(default)]
    pub position_in_block: u32,
    /// Block timestamp (seconds since the Unix epoch).
    #[serde(default)]
    pub timestamp: u64,
    /// The VIDA this transaction was posted under.
    #[serde(default)]
    pub vida_id: u64,
    /// Application payload (hex-encoded).
    #[serde(default)]
    pub data: String,
}
