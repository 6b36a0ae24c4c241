//! Chain access trait consumed by subscriptions.

use std::future::Future;

use crate::error::ChainReadError;
use crate::types::VidaDataTransaction;

/// Trait providing the two chain reads a subscription needs.
///
/// Implementors classify their own failures: transport-level problems
/// map to [`ChainReadError::Network`], everything else to
/// [`ChainReadError::Rpc`]. The subscription retries both classes on its
/// next cycle; neither is fatal to the run loop.
pub trait ChainReader: Send + Sync {
    /// Get the highest block height currently known to the node.
    fn latest_block_number(
        &self,
    ) -> impl Future<Output = Result<u64, ChainReadError>> + Send;

    /// Get all transactions posted under `vida_id` in the inclusive block
    /// range `[from_block, to_block]`, in source order.
    ///
    /// An empty list is a valid result for a range with no activity.
    fn vida_transactions_in_range(
        &self,
        vida_id: u64,
        from_block: u64,
        to_block: u64,
    ) -> impl Future<Output = Result<Vec<VidaDataTransaction>, ChainReadError>> + Send;
}
