//! Per-chain configuration.
//!
//! This module contains [`ChainConfig`], the constants that locate pools
//! on one chain, and [`ChainRegistry`], the explicit mapping from chain id
//! to those constants that callers pass into address derivation.

mod chain;
mod registry;

pub use chain::ChainConfig;
pub use registry::{ChainRegistry, INIT_CODE_HASH};
