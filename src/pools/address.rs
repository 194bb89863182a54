//! Deterministic pool address derivation.

use alloy_primitives::{keccak256, Address, B256};
use tracing::debug;

use crate::domain::Token;
use crate::error::Result;

/// Computes the CREATE2 address of the pool for `token_a` and `token_b`.
///
/// The tokens are sorted first, so argument order does not matter. The
/// salt is `keccak256(token0 ‖ token1)` over the two packed 20-byte
/// addresses, and the address is the last 20 bytes of
/// `keccak256(0xff ‖ factory ‖ salt ‖ init_code_hash)`.
///
/// # Errors
///
/// - [`SdkError::ChainMismatch`](crate::error::SdkError::ChainMismatch) if
///   the tokens are on different chains.
/// - [`SdkError::IdenticalAddresses`](crate::error::SdkError::IdenticalAddresses)
///   if they share an address.
pub fn compute_pair_address(
    factory: Address,
    init_code_hash: B256,
    token_a: &Token,
    token_b: &Token,
) -> Result<Address> {
    let (token0, token1) = if token_a.sorts_before(token_b)? {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };

    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.address().as_slice());
    packed[20..].copy_from_slice(token1.address().as_slice());
    let salt = keccak256(packed);

    let pair = factory.create2(salt.0, init_code_hash.0);
    debug!(
        chain_id = %token0.chain_id(),
        token0 = %token0.address(),
        token1 = %token1.address(),
        %pair,
        "derived pair address"
    );
    Ok(pair)
}
