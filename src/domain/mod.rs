//! Fundamental domain value types used throughout the SDK.
//!
//! This module contains the value types that model a two-token pool:
//! chain ids, addresses, currencies and tokens, exact fractions, prices
//! and currency amounts. Constructors validate their inputs, and every
//! type is immutable once built.

mod address;
mod amount;
mod chain_id;
mod currency;
mod decimals;
mod fraction;
mod price;
mod rounding;
mod token;

pub use address::{to_checksum, validate_and_parse_address};
pub use amount::{CurrencyAmount, TokenAmount};
pub use chain_id::ChainId;
pub use currency::{Currency, CurrencyLike, NativeCurrency};
pub use decimals::Decimals;
pub use fraction::Fraction;
pub use price::Price;
pub use rounding::Rounding;
pub use token::Token;
