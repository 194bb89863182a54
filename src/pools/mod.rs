//! Constant-product pool math and the [`Pair`] entity.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Pair`] | canonical reserves, prices, swap and liquidity quotes |
//! | [`get_amount_out`] / [`get_amount_in`] | raw-integer swap math |
//! | [`compute_pair_address`] | CREATE2 pool address |

mod address;
mod pair;
mod swap_math;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use address::compute_pair_address;
pub use pair::{Pair, LIQUIDITY_TOKEN_NAME, LIQUIDITY_TOKEN_SYMBOL};
pub use swap_math::{
    get_amount_in, get_amount_out, FEE_DENOMINATOR, FEE_NUMERATOR, MINIMUM_LIQUIDITY,
};
