//! # Pairswap SDK
//!
//! Exact-arithmetic valuation core for constant-product (Uniswap V2 style)
//! pools: derive a pool's address, price its two tokens against each other,
//! and quote swaps without touching a network.
//!
//! Every amount is an arbitrary-precision integer and every ratio an exact
//! rational. Binary floating point is never used, so results match on-chain
//! computation bit for bit. Rounding happens only when a value is rendered
//! as a decimal string, and the caller picks the [`Rounding`](domain::Rounding).
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pairswap-sdk = "0.1"
//! ```
//!
//! ## Build a pair and quote a swap
//!
//! ```rust
//! use pairswap_sdk::config::ChainRegistry;
//! use pairswap_sdk::domain::{ChainId, Rounding, Token, TokenAmount};
//! use pairswap_sdk::pools::Pair;
//!
//! // 1. Define two tokens on Moonbase Alpha
//! let dca = Token::parse(ChainId::MOONBEAM_TEST, "0x5b1869D9A4C187F2EAa108f3062412ecf0526b24", 18)
//!     .expect("valid token")
//!     .with_symbol("DCA");
//! let dcb = Token::parse(ChainId::MOONBEAM_TEST, "0xCfEB869F69431e42cdB54A4F4f105C19C080A601", 18)
//!     .expect("valid token")
//!     .with_symbol("DCB");
//!
//! // 2. Wrap observed reserves; argument order does not matter
//! let pair = Pair::new(
//!     TokenAmount::parse_units(dcb.clone(), "2000").expect("valid amount"),
//!     TokenAmount::parse_units(dca.clone(), "1000").expect("valid amount"),
//! )
//! .expect("same chain");
//! assert_eq!(pair.token0(), &dca);
//!
//! // 3. Locate the pool with the built-in chain table
//! let registry = ChainRegistry::default();
//! let address = pair.address(&registry).expect("known chain");
//! assert_eq!(address.to_checksum(None), "0xE790D24E1c486B0155c8D965970fDf22142d28a8");
//!
//! // 4. Price and quote
//! let price = pair.price_of(&dca).expect("pair token");
//! assert_eq!(price.to_significant(6, Rounding::Down).as_deref(), Ok("2"));
//!
//! let input = TokenAmount::parse_units(dca, "1").expect("valid amount");
//! let (output, _next) = pair.get_output_amount(&input).expect("liquid pool");
//! assert_eq!(output.to_significant(4, Rounding::Down).as_deref(), Ok("1.992"));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  holds Tokens, TokenAmounts and a ChainRegistry
//! └──────┬──────┘
//!        │ Pair::new(reserve_a, reserve_b)
//!        ▼
//! ┌─────────────┐
//! │    Pools     │  Pair, swap math, CREATE2 address
//! └──────┬──────┘
//!        │ per-chain constants
//!        ▼
//! ┌─────────────┐
//! │   Config     │  ChainRegistry, ChainConfig
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Token, Currency, Fraction, Price, TokenAmount, …
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │    Math      │  bit-width validation, rounding, decimal I/O
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Token`](domain::Token), [`Fraction`](domain::Fraction), [`Price`](domain::Price), [`TokenAmount`](domain::TokenAmount), etc. |
//! | [`config`] | Per-chain constants: [`ChainRegistry`](config::ChainRegistry) and [`ChainConfig`](config::ChainConfig) |
//! | [`pools`]  | [`Pair`](pools::Pair) and constant-product swap math |
//! | [`math`]   | Bit-width validation, rounding division, decimal parsing and formatting |
//! | [`error`]  | [`SdkError`](error::SdkError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` for pair construction,
//! address derivation and registry loading, `trace` for swap quotes) and
//! never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
