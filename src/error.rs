//! Unified error types for the pair SDK.
//!
//! All fallible operations across the crate return [`SdkError`] as their
//! error type, so callers match on a single taxonomy whether the failure
//! came from parsing, arithmetic, token identity, or pool math.

use thiserror::Error;

/// Every failure mode reported by the crate.
///
/// None of these are transient: they describe a violated precondition,
/// so nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    /// A value is negative or does not fit the declared unsigned bit width.
    #[error("value is outside the uint{bits} range")]
    OutOfRange {
        /// Declared bit width (8 for decimals, 256 for amounts).
        bits: u32,
    },

    /// Two operands belong to different chains.
    #[error("chain id mismatch: {left} vs {right}")]
    ChainMismatch {
        /// Chain id of the left-hand operand.
        left: u64,
        /// Chain id of the right-hand operand.
        right: u64,
    },

    /// Arithmetic or comparison between amounts or prices of different tokens.
    #[error("operands refer to different tokens")]
    TokenMismatch,

    /// The queried token is not one of the pair's two tokens.
    #[error("token is not part of this pair")]
    UnrelatedToken,

    /// Two tokens that must differ share one address.
    #[error("tokens share the same address")]
    IdenticalAddresses,

    /// A reserve on the relevant side is zero or too small for the request.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A zero, negative, or otherwise unusable amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Malformed numeric or address input.
    #[error("parse error: {0}")]
    Parse(&'static str),

    /// A rational with a zero denominator was requested.
    #[error("division by zero")]
    DivisionByZero,

    /// An unusable precision argument (significant digits, decimal places).
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// No configuration is registered for the chain id.
    #[error("unsupported chain id {0}")]
    UnsupportedChain(u64),

    /// A chain registry document could not be loaded.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SdkError>;
