#![deny(missing_docs)]

//! # vchain-rpc
//!
//! HTTP client for a VChain RPC node: chain-state reads, VIDA transaction
//! queries, and submission of externally signed transaction bytes.
//!
//! This crate provides an async HTTP client for the node's REST API and
//! implements [`vchain_vida::ChainReader`], so it can drive a
//! [`vchain_vida::VidaSubscription`] directly.
//!
//! # Example
//!
//! ```no_run
//! use vchain_rpc::{RpcClient, RpcConfig};
//! use vchain_vida::{CallbackError, VidaDataTransaction, VidaSubscription};
//!
//! # async fn example() {
//! let client = RpcClient::new(RpcConfig {
//!     base_url: "https://rpc.example.org".to_string(),
//!     ..Default::default()
//! });
//!
//! let handler = |tx: &VidaDataTransaction| -> Result<(), CallbackError> {
//!     println!("tx {} at block {}", tx.transaction_hash, tx.block_number);
//!     Ok(())
//! };
//!
//! let subscription = VidaSubscription::new(client, 7070, 1, handler);
//! subscription.start();
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::RpcClient;
pub use error::RpcError;
pub use types::{Block, BroadcastResponse, RpcConfig};
