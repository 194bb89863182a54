//! Pair quoting example (Uniswap V2 style).
//!
//! Demonstrates building two tokens, wrapping reserves in a pair, deriving
//! the pool address from the built-in chain registry, reading prices and
//! quoting swaps in both directions.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pairswap_sdk=debug cargo run --example pair_quote
//! ```

use pairswap_sdk::config::ChainRegistry;
use pairswap_sdk::domain::{ChainId, Rounding, Token, TokenAmount};
use pairswap_sdk::pools::Pair;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Pair quote (x · y = k, 0.30% fee) ===\n");

    // ── 1. Define tokens ────────────────────────────────────────────────
    let dca = Token::parse(
        ChainId::MOONBEAM_TEST,
        "0x5b1869D9A4C187F2EAa108f3062412ecf0526b24",
        18,
    )?
    .with_symbol("DCA")
    .with_name("DCA Token");
    let dcb = Token::parse(
        ChainId::MOONBEAM_TEST,
        "0xCfEB869F69431e42cdB54A4F4f105C19C080A601",
        18,
    )?
    .with_symbol("DCB")
    .with_name("DCB Token");

    // ── 2. Wrap observed reserves ───────────────────────────────────────
    let pair = Pair::new(
        TokenAmount::parse_units(dcb.clone(), "250000")?,
        TokenAmount::parse_units(dca.clone(), "100000")?,
    )?;
    println!("token0:   {} ({})", pair.token0(), pair.token0().checksum_address());
    println!("token1:   {} ({})", pair.token1(), pair.token1().checksum_address());
    println!("reserve0: {}", pair.reserve0());
    println!("reserve1: {}", pair.reserve1());

    // ── 3. Locate the pool ──────────────────────────────────────────────
    let registry = ChainRegistry::default();
    let address = pair.address(&registry)?;
    let lp = pair.liquidity_token(&registry)?;
    println!("\nPool address: {}", address.to_checksum(None));
    println!("LP token:     {lp} ({} decimals)", lp.decimals());

    // ── 4. Prices ───────────────────────────────────────────────────────
    println!("\n1 {} = {}", pair.token0(), pair.token0_price()?);
    println!("1 {} = {}", pair.token1(), pair.token1_price()?);

    // ── 5. Exact-in quote ───────────────────────────────────────────────
    let input = TokenAmount::parse_units(dca.clone(), "1000")?;
    let (output, after) = pair.get_output_amount(&input)?;
    println!(
        "\nSell {input} -> receive {} {}",
        output.to_significant(8, Rounding::Down)?,
        dcb
    );
    println!("New price: 1 {} = {}", after.token0(), after.token0_price()?);

    // ── 6. Exact-out quote ──────────────────────────────────────────────
    let wanted = TokenAmount::parse_units(dcb, "1000")?;
    let (required, _) = pair.get_input_amount(&wanted)?;
    println!(
        "Buy {wanted} -> pay {} {}",
        required.to_fixed(6, Rounding::Up)?,
        dca
    );

    Ok(())
}
