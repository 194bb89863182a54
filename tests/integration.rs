//! Integration tests exercising the public API end to end.
//!
//! These tests verify the pair flows a caller goes through: building
//! tokens, wrapping reserves, locating the pool, reading prices and
//! quoting swaps against a chain registry.

#![allow(clippy::panic)]

use num_bigint::BigUint;
use pairswap_sdk::config::{ChainConfig, ChainRegistry};
use pairswap_sdk::domain::{ChainId, Price, Rounding, Token, TokenAmount};
use pairswap_sdk::error::SdkError;
use pairswap_sdk::pools::Pair;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const DCA: &str = "0x5b1869D9A4C187F2EAa108f3062412ecf0526b24";
const DCB: &str = "0xCfEB869F69431e42cdB54A4F4f105C19C080A601";

fn token(chain_id: ChainId, address: &str, symbol: &str) -> Token {
    let Ok(t) = Token::parse(chain_id, address, 18) else {
        panic!("valid token");
    };
    t.with_symbol(symbol).with_name(format!("{symbol} Token"))
}

fn dca() -> Token {
    token(ChainId::MOONBEAM_TEST, DCA, "DCA")
}

fn dcb() -> Token {
    token(ChainId::MOONBEAM_TEST, DCB, "DCB")
}

fn stranger() -> Token {
    token(
        ChainId::MOONBEAM_TEST,
        "0xd909178cc99d318e4d46e7e66a972955859670e1",
        "WGLMR",
    )
}

fn amount(token: Token, raw: &str) -> TokenAmount {
    let Ok(a) = TokenAmount::from_raw_str(token, raw) else {
        panic!("valid amount");
    };
    a
}

fn pair(a: TokenAmount, b: TokenAmount) -> Pair {
    let Ok(p) = Pair::new(a, b) else {
        panic!("valid pair");
    };
    p
}

fn price(base: Token, quote: Token, b: u32, q: u32) -> Price<Token> {
    let Ok(p) = Price::new(base, quote, b, q) else {
        panic!("valid price");
    };
    p
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn pair_rejects_tokens_on_different_chains() {
    let mainnet = token(ChainId::MAINNET, DCB, "DCB");
    assert_eq!(
        Pair::new(amount(dca(), "100"), amount(mainnet, "100")),
        Err(SdkError::ChainMismatch {
            left: 1287,
            right: 1
        })
    );
}

#[test]
fn token0_and_token1_follow_address_order() {
    for p in [
        pair(amount(dca(), "100"), amount(dcb(), "100")),
        pair(amount(dcb(), "100"), amount(dca(), "100")),
    ] {
        assert_eq!(p.token0(), &dca());
        assert_eq!(p.token1(), &dcb());
        assert_eq!(p.chain_id(), ChainId::MOONBEAM_TEST);
    }
}

#[test]
fn reserves_follow_their_tokens() {
    for p in [
        pair(amount(dcb(), "100"), amount(dca(), "101")),
        pair(amount(dca(), "101"), amount(dcb(), "100")),
    ] {
        assert_eq!(p.reserve0(), &amount(dca(), "101"));
        assert_eq!(p.reserve1(), &amount(dcb(), "100"));
        assert_eq!(p.reserve_of(&dcb()), Ok(&amount(dcb(), "100")));
        assert_eq!(p.reserve_of(&stranger()), Err(SdkError::UnrelatedToken));
    }
}

#[test]
fn involves_token() {
    let p = pair(amount(dcb(), "100"), amount(dca(), "100"));
    assert!(p.involves_token(&dca()));
    assert!(p.involves_token(&dcb()));
    assert!(!p.involves_token(&stranger()));
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

#[test]
fn moonbase_pair_address() {
    let registry = ChainRegistry::default();
    let Ok(address) = Pair::get_address(&dca(), &dcb(), &registry) else {
        panic!("expected Ok");
    };
    assert_eq!(
        address.to_checksum(None),
        "0xE790D24E1c486B0155c8D965970fDf22142d28a8"
    );
}

#[test]
fn lowercase_input_derives_same_address() {
    let registry = ChainRegistry::default();
    let lower = token(ChainId::MOONBEAM_TEST, &DCA.to_lowercase(), "DCA");
    assert_eq!(
        Pair::get_address(&lower, &dcb(), &registry),
        Pair::get_address(&dca(), &dcb(), &registry)
    );
}

#[test]
fn uniswap_mainnet_deployment_from_custom_registry() {
    let Ok(registry) = ChainRegistry::from_toml_str(
        r#"
[[chains]]
chain_id = 1
factory_address = "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"
init_code_hash = "0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f"
"#,
    ) else {
        panic!("valid registry");
    };
    let usdc = token(
        ChainId::MAINNET,
        "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        "USDC",
    );
    let weth = token(
        ChainId::MAINNET,
        "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        "WETH",
    );
    let Ok(address) = Pair::get_address(&weth, &usdc, &registry) else {
        panic!("expected Ok");
    };
    assert_eq!(
        address.to_checksum(None),
        "0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc"
    );
}

#[test]
fn registry_override_moves_the_pool() {
    let registry = ChainRegistry::default();
    let Ok(base) = registry.get(ChainId::MOONBEAM_TEST) else {
        panic!("built-in chain");
    };
    let moved = ChainConfig::new(
        ChainId::MOONBEAM_TEST,
        base.factory_address(),
        alloy_primitives::B256::repeat_byte(1),
    );
    let Ok(custom) = registry.with_chain(moved) else {
        panic!("valid config");
    };
    assert_ne!(
        Pair::get_address(&dca(), &dcb(), &registry),
        Pair::get_address(&dca(), &dcb(), &custom)
    );
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

#[test]
fn token0_price() {
    for p in [
        pair(amount(dcb(), "101"), amount(dca(), "100")),
        pair(amount(dca(), "100"), amount(dcb(), "101")),
    ] {
        assert_eq!(p.token0_price(), Ok(price(dca(), dcb(), 100, 101)));
    }
}

#[test]
fn token1_price() {
    for p in [
        pair(amount(dcb(), "101"), amount(dca(), "100")),
        pair(amount(dca(), "100"), amount(dcb(), "101")),
    ] {
        assert_eq!(p.token1_price(), Ok(price(dcb(), dca(), 101, 100)));
    }
}

#[test]
fn price_of() {
    let p = pair(amount(dcb(), "101"), amount(dca(), "100"));
    assert_eq!(p.price_of(&dca()), p.token0_price());
    assert_eq!(p.price_of(&dcb()), p.token1_price());
    assert_eq!(p.price_of(&stranger()), Err(SdkError::UnrelatedToken));
}

#[test]
fn price_renders_with_rounding() {
    let p = pair(amount(dcb(), "101"), amount(dca(), "100"));
    let Ok(token1_price) = p.token1_price() else {
        panic!("expected Ok");
    };
    // 100 / 101 = 0.990099...
    assert_eq!(
        token1_price.to_significant(3, Rounding::Down).as_deref(),
        Ok("0.99")
    );
    assert_eq!(
        token1_price.to_fixed(4, Rounding::HalfUp).as_deref(),
        Ok("0.9901")
    );
    assert_eq!(token1_price.to_fixed(1, Rounding::Up).as_deref(), Ok("1.0"));
}

// ---------------------------------------------------------------------------
// Trading lifecycle
// ---------------------------------------------------------------------------

#[test]
fn quote_swap_chain_and_reverse() {
    let start = pair(
        amount(dca(), "1000000000000000000000"),
        amount(dcb(), "2000000000000000000000"),
    );
    let Ok(input) = TokenAmount::parse_units(dca(), "10") else {
        panic!("valid amount");
    };

    let Ok((output, after)) = start.get_output_amount(&input) else {
        panic!("expected Ok");
    };
    assert_eq!(output.currency().symbol(), Some("DCB"));
    assert!(output.raw() < &BigUint::from(20_000_000_000_000_000_000u128));

    let k_before = start.reserve0().raw() * start.reserve1().raw();
    let k_after = after.reserve0().raw() * after.reserve1().raw();
    assert!(k_after >= k_before);

    // Asking for the same output from the start state never costs less
    // than what was paid.
    let Ok((required, _)) = start.get_input_amount(&output) else {
        panic!("expected Ok");
    };
    assert!(required.raw() <= input.raw());
    assert_eq!(required.token(), &dca());

    // Spot price moved against the buyer.
    let (Ok(before), Ok(later)) = (start.token0_price(), after.token0_price()) else {
        panic!("expected prices");
    };
    assert!(later.raw() < before.raw());
}

#[test]
fn draining_a_reserve_is_rejected() {
    let p = pair(amount(dca(), "1000"), amount(dcb(), "1000"));
    assert_eq!(
        p.get_input_amount(&amount(dcb(), "1000")).map(|(a, _)| a),
        Err(SdkError::InsufficientLiquidity)
    );
}

#[test]
fn liquidity_round_trip() {
    let registry = ChainRegistry::default();
    let p = pair(amount(dca(), "0"), amount(dcb(), "0"));
    let Ok(lp_token) = p.liquidity_token(&registry) else {
        panic!("expected Ok");
    };
    let Ok(minted) = p.get_liquidity_minted(
        &amount(lp_token.clone(), "0"),
        &amount(dca(), "4000000"),
        &amount(dcb(), "1000000"),
        &registry,
    ) else {
        panic!("expected Ok");
    };
    // sqrt(4e12) - 1000
    assert_eq!(minted, amount(lp_token.clone(), "1999000"));

    let funded = pair(amount(dca(), "4000000"), amount(dcb(), "1000000"));
    let Ok(supply) = minted.checked_add(&amount(lp_token, "1000")) else {
        panic!("expected Ok");
    };
    let Ok(value) = funded.get_liquidity_value(&dcb(), &supply, &minted, None, &registry) else {
        panic!("expected Ok");
    };
    // 1_999_000 * 1_000_000 / 2_000_000
    assert_eq!(value, amount(dcb(), "999500"));
}
