//! RPC data types: configuration and response envelopes.

use serde::{Deserialize, Serialize};
use vchain_vida::VidaDataTransaction;

/// Configuration for an [`RpcClient`](crate::RpcClient).
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Base URL of the RPC node (e.g. `https://rpc.vchain.network`).
    pub base_url: String,
    /// API version prefix (e.g. `v1`).
    pub api_version: String,
    /// Optional Bearer token for authenticated endpoints.
    pub api_key: Option<String>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rpc.vchain.network".to_string(),
            api_version: "v1".to_string(),
            api_key: None,
        }
    }
}

/// A block returned by the RPC node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block height.
    #[serde(default)]
    pub block_number: u64,
    /// Block hash (hex-encoded).
    #[serde(default)]
    pub block_hash: String,
    /// Hash of the parent block.
    #[serde(default)]
    pub parent_hash: Option<String>,
    /// Block timestamp (seconds since the Unix epoch).
    #[serde(default)]
    pub timestamp: u64,
    /// Address of the block proposer.
    #[serde(default)]
    pub proposer: Option<String>,
    /// Number of transactions in the block.
    #[serde(default)]
    pub transaction_count: u32,
    /// Serialized block size in bytes.
    #[serde(default)]
    pub size: Option<u32>,
}

/// Response from the transaction broadcast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResponse {
    /// Hash of the submitted transaction.
    pub txid: String,
    /// Numeric acceptance status; `0` means rejected.
    #[serde(default)]
    pub status: Option<i32>,
    /// Detail message from the node.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BlockNumberResponse {
    #[serde(default)]
    pub block_number: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BalanceResponse {
    #[serde(default)]
    pub balance: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NonceResponse {
    #[serde(default)]
    pub nonce: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VidaTransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<VidaDataTransaction>,
}
