//! Property-based tests using `proptest` for pair invariants.
//!
//! 1. **Canonical ordering**: argument order never changes the pair.
//! 2. **Address order-independence**: both orders derive one address.
//! 3. **Price inversion**: `token0_price⁻¹ == token1_price` exactly.
//! 4. **Invariant preservation**: `k` never decreases across a swap.
//! 5. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 6. **Exact-out sufficiency**: paying the quoted input buys the output.

use alloy_primitives::Address;
use num_bigint::BigUint;
use proptest::prelude::*;

use crate::config::ChainRegistry;
use crate::domain::{ChainId, Decimals, Token, TokenAmount};
use crate::pools::{get_amount_in, get_amount_out, Pair};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn token(bytes: [u8; 20]) -> Token {
    Token::new(ChainId::MOONBEAM_TEST, Address::from(bytes), Decimals::EIGHTEEN)
}

fn tok_a() -> Token {
    token([0x11; 20])
}

fn tok_b() -> Token {
    token([0xee; 20])
}

fn amount(token: Token, raw: u64) -> TokenAmount {
    let Ok(a) = TokenAmount::new(token, raw) else {
        panic!("valid amount");
    };
    a
}

fn make_pair(ra: u64, rb: u64) -> Pair {
    let Ok(pair) = Pair::new(amount(tok_a(), ra), amount(tok_b(), rb)) else {
        panic!("valid pair");
    };
    pair
}

fn k(pair: &Pair) -> BigUint {
    pair.reserve0().raw() * pair.reserve1().raw()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000_000u64
}

/// Two distinct 20-byte addresses.
fn address_pair_strategy() -> impl Strategy<Value = ([u8; 20], [u8; 20])> {
    (any::<[u8; 20]>(), any::<[u8; 20]>()).prop_filter("distinct addresses", |(a, b)| a != b)
}

// ---------------------------------------------------------------------------
// Properties 1-3: ordering, addresses, prices
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_canonical_ordering_commutes(
        (a, b) in address_pair_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let Ok(ab) = Pair::new(amount(token(a), ra), amount(token(b), rb)) else {
            return Err(TestCaseError::fail("pair a/b"));
        };
        let Ok(ba) = Pair::new(amount(token(b), rb), amount(token(a), ra)) else {
            return Err(TestCaseError::fail("pair b/a"));
        };
        prop_assert_eq!(ab.token0(), ba.token0());
        prop_assert_eq!(ab.reserve0(), ba.reserve0());
        prop_assert_eq!(ab.reserve1(), ba.reserve1());
        prop_assert!(ab.token0().address() < ab.token1().address());
    }

    #[test]
    fn prop_address_order_independent((a, b) in address_pair_strategy()) {
        let registry = ChainRegistry::default();
        let forward = Pair::get_address(&token(a), &token(b), &registry);
        let backward = Pair::get_address(&token(b), &token(a), &registry);
        prop_assert!(forward.is_ok());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_token0_price_inverts_to_token1_price(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pair = make_pair(ra, rb);
        let Ok(price0) = pair.token0_price() else {
            return Err(TestCaseError::fail("token0 price"));
        };
        prop_assert_eq!(price0.invert(), pair.token1_price());
        prop_assert_eq!(pair.price_of(pair.token0()), Ok(price0));
    }
}

// ---------------------------------------------------------------------------
// Properties 4-6: swap math
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_k_never_decreases_exact_in(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 2u64..=10_000u64,
    ) {
        let pair = make_pair(ra, rb);
        let swap_in = (ra / divisor).max(1);
        let Ok((_, next)) = pair.get_output_amount(&amount(tok_a(), swap_in)) else {
            return Ok(());
        };
        prop_assert!(k(&next) >= k(&pair));
    }

    #[test]
    fn prop_k_never_decreases_exact_out(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 2u64..=10_000u64,
    ) {
        let pair = make_pair(ra, rb);
        let want = (rb / divisor).max(1);
        let Ok((_, next)) = pair.get_input_amount(&amount(tok_b(), want)) else {
            return Ok(());
        };
        prop_assert!(k(&next) >= k(&pair));
    }

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pair = make_pair(ra, rb);
        let swap_in = (ra / 1_000).max(1);

        // A → B
        let Ok((received_b, after_ab)) = pair.get_output_amount(&amount(tok_a(), swap_in)) else {
            return Ok(());
        };

        // B → A
        let Ok((final_a, _)) = after_ab.get_output_amount(&received_b) else {
            return Ok(());
        };

        prop_assert!(
            final_a.raw() <= &BigUint::from(swap_in),
            "round-trip should lose value: final={} > original={}",
            final_a.raw(), swap_in
        );
    }

    #[test]
    fn prop_exact_out_quote_is_sufficient(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 2u64..=10_000u64,
    ) {
        let (r_in, r_out) = (BigUint::from(ra), BigUint::from(rb));
        let want = BigUint::from((rb / divisor).max(1));
        let Ok(paid) = get_amount_in(&want, &r_in, &r_out) else {
            return Ok(());
        };
        let Ok(got) = get_amount_out(&paid, &r_in, &r_out) else {
            return Err(TestCaseError::fail("quoted input bought nothing"));
        };
        prop_assert!(got >= want, "paid {} for {}, wanted {}", paid, got, want);
    }
}
