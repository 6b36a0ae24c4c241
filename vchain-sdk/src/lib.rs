#![deny(missing_docs)]

//! VChain SDK - Complete SDK.
//!
//! Re-exports all VChain SDK components for convenient single-crate usage.

pub use vchain_rpc as rpc;
pub use vchain_vida as vida;
