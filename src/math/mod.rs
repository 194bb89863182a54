//! Exact integer arithmetic helpers.
//!
//! This module provides the bit-width validation layer, explicit-rounding
//! division, decimal-string parsing and decimal-string formatting. Every
//! value is an arbitrary-precision integer; binary floating point is never
//! used.

mod format;
mod parse;
mod rounding;
mod validate;

pub use format::{to_fixed, to_significant, MAX_DISPLAY_PRECISION};
pub use parse::{parse_integer, parse_units};
pub use rounding::div_round;
pub use validate::{validate_amount_fits, validate_solidity_type_instance, SolidityType};
