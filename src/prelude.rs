//! Convenience re-exports for common types.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pairswap_sdk::prelude::*;
//! ```

pub use crate::config::{ChainConfig, ChainRegistry};
pub use crate::domain::{
    ChainId, Currency, CurrencyAmount, CurrencyLike, Decimals, Fraction, NativeCurrency, Price,
    Rounding, Token, TokenAmount,
};
pub use crate::error::{Result, SdkError};
pub use crate::pools::Pair;
