//! RPC HTTP client for chain-state reads, VIDA queries, and broadcast.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use vchain_vida::{ChainReadError, ChainReader, VidaDataTransaction};

use crate::error::RpcError;
use crate::types::{
    BalanceResponse, Block, BlockNumberResponse, BroadcastResponse, NonceResponse, RpcConfig,
    VidaTransactionsResponse,
};

/// HTTP client for a VChain RPC node.
#[derive(Debug, Clone)]
pub struct RpcClient {
    /// Client configuration.
    config: RpcConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl RpcClient {
    /// Create a new RPC client with the given configuration.
    pub fn new(config: RpcConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Get the height of the latest block.
    pub async fn latest_block_number(&self) -> Result<u64, RpcError> {
        let resp: BlockNumberResponse = self.get_json("block/latest/number").await?;
        Ok(resp.block_number)
    }

    /// Get a block by height.
    pub async fn block_by_number(&self, height: u64) -> Result<Block, RpcError> {
        let path = format!("block/get/{height}");
        self.get_json(&path).await
    }

    /// Get the balance of an address.
    pub async fn balance_of(&self, address: &str) -> Result<u64, RpcError> {
        let path = format!("balance/get/{address}");
        let resp: BalanceResponse = self.get_json(&path).await?;
        Ok(resp.balance)
    }

    /// Get the next nonce of an address.
    pub async fn nonce_of(&self, address: &str) -> Result<u32, RpcError> {
        let path = format!("nonce/get/{address}");
        let resp: NonceResponse = self.get_json(&path).await?;
        Ok(resp.nonce)
    }

    /// Get all transactions posted under a VIDA in the inclusive block
    /// range `[from_block, to_block]`.
    pub async fn vida_transactions_in_range(
        &self,
        vida_id: u64,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<VidaDataTransaction>, RpcError> {
        let path = format!("vida/{vida_id}/transactions?from={from_block}&to={to_block}");
        let resp: VidaTransactionsResponse = self.get_json(&path).await?;
        Ok(resp.transactions)
    }

    /// Submit an externally signed, serialized transaction.
    ///
    /// Signing and byte-encoding are the caller's concern; the client only
    /// transports the bytes.
    pub async fn broadcast_transaction(
        &self,
        raw_tx: &[u8],
    ) -> Result<BroadcastResponse, RpcError> {
        let url = format!(
            "{}/{}/transaction/broadcast",
            self.config.base_url, self.config.api_version
        );
        let headers = self.build_headers();

        let resp = self
            .client
            .post(&url)
            .headers(headers)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(raw_tx.to_vec())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RpcError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let response: BroadcastResponse = resp.json().await?;

        // Check for rejection
        if let Some(0) = response.status {
            return Err(RpcError::Rejected {
                code: 0,
                description: response
                    .message
                    .clone()
                    .unwrap_or_else(|| "rejected".to_string()),
            });
        }

        Ok(response)
    }

    /// Perform a GET request against the node and deserialize the response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RpcError> {
        let url = format!(
            "{}/{}/{}",
            self.config.base_url, self.config.api_version, path
        );
        let headers = self.build_headers();

        let resp = self.client.get(&url).headers(headers).send().await?;

        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(RpcError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RpcError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Build common headers from config.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(ref key) = self.config.api_key {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {key}")) {
                headers.insert(AUTHORIZATION, val);
            }
        }

        headers
    }
}

impl ChainReader for RpcClient {
    async fn latest_block_number(&self) -> Result<u64, ChainReadError> {
        Ok(RpcClient::latest_block_number(self).await?)
    }

    async fn vida_transactions_in_range(
        &self,
        vida_id: u64,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<VidaDataTransaction>, ChainReadError> {
        Ok(RpcClient::vida_transactions_in_range(self, vida_id, from_block, to_block).await?)
    }
}
