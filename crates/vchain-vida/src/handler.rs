//! Collaborator traits for transaction delivery and checkpoint persistence.

use crate::error::CallbackError;
use crate::types::VidaDataTransaction;

/// Trait for receiving the transactions delivered by a subscription.
///
/// Invoked once per transaction, in the order the chain returned them.
///
/// # Errors
/// A returned error is logged with the transaction hash and isolated to
/// that single delivery: sibling deliveries in the same batch and the
/// checkpoint advance proceed regardless. The subscription does not
/// re-deliver; retrying failed transactions is the caller's concern.
pub trait TransactionHandler: Send + Sync {
    /// Process a single delivered transaction.
    fn handle(&self, tx: &VidaDataTransaction) -> Result<(), CallbackError>;
}

impl<F> TransactionHandler for F
where
    F: Fn(&VidaDataTransaction) -> Result<(), CallbackError> + Send + Sync,
{
    fn handle(&self, tx: &VidaDataTransaction) -> Result<(), CallbackError> {
        self(tx)
    }
}

/// Trait for persisting subscription progress externally.
///
/// Called with the new highest fully-processed block height after each
/// successful batch advance.
///
/// # Errors
/// A returned error is logged; the in-memory checkpoint keeps the
/// advanced value and the run loop continues either way.
pub trait CheckpointSink: Send + Sync {
    /// Persist the given block height.
    fn save(&self, height: u64) -> Result<(), CallbackError>;
}

impl<F> CheckpointSink for F
where
    F: Fn(u64) -> Result<(), CallbackError> + Send + Sync,
{
    fn save(&self, height: u64) -> Result<(), CallbackError> {
        self(height)
    }
}
