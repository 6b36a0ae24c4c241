#![deny(missing_docs)]

//! # vchain-vida
//!
//! VIDA transaction ingestion for the VChain SDK.
//!
//! Provides the continuous block-range subscription that discovers and
//! delivers every transaction posted under a VIDA (virtual-chain
//! identifier) as new blocks are produced, plus the collaborator traits
//! it consumes: [`ChainReader`] for chain access, [`TransactionHandler`]
//! for per-transaction delivery, and [`CheckpointSink`] for external
//! progress persistence.
//!
//! The subscription polls the chain tip, fetches bounded block ranges
//! (at most [`MAX_BLOCKS_PER_BATCH`] blocks per cycle), and delivers
//! transactions in source order. Collaborator failures are logged and
//! isolated; the run loop ends only through [`VidaSubscription::stop`].

pub mod error;
pub mod handler;
pub mod range;
pub mod reader;
pub mod subscription;
pub mod types;


pub use error::{CallbackError, ChainReadError};
pub use handler::{CheckpointSink, TransactionHandler};
pub use range::{next_range, MAX_BLOCKS_PER_BATCH};
pub use reader::ChainReader;
pub use subscription::{VidaSubscription, DEFAULT_POLL_INTERVAL};
pub use types::VidaDataTransaction;
