//! Reserve pair of one two-token pool (Uniswap V2 style).
//!
//! A [`Pair`] holds the reserves of a pool in canonical order: `token0`
//! is the token whose address sorts first. Construction is the only place
//! the order is decided; a new reserve state is a new `Pair`.
//!
//! # Queries
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`Pair::token0_price`] | `reserve1 / reserve0` as a [`Price`] |
//! | [`Pair::get_output_amount`] | exact-in swap quote and post-swap pair |
//! | [`Pair::get_input_amount`] | exact-out swap quote and post-swap pair |
//! | [`Pair::get_liquidity_minted`] | LP units for a deposit |
//! | [`Pair::get_liquidity_value`] | underlying value of LP units |
//!
//! Pool and LP-token addresses depend on per-chain constants and take a
//! [`ChainRegistry`] explicitly.

use alloy_primitives::Address;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use super::{compute_pair_address, get_amount_in, get_amount_out, MINIMUM_LIQUIDITY};
use crate::config::ChainRegistry;
use crate::domain::{ChainId, Decimals, Price, Token, TokenAmount};
use crate::error::{Result, SdkError};

/// Symbol of every pool's LP token.
pub const LIQUIDITY_TOKEN_SYMBOL: &str = "UNI-V2";

/// Name of every pool's LP token.
pub const LIQUIDITY_TOKEN_NAME: &str = "Uniswap V2";

/// Immutable reserves of a constant-product pool.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::{ChainId, Token, TokenAmount};
/// use pairswap_sdk::pools::Pair;
///
/// let dca = Token::parse(ChainId::MOONBEAM_TEST, "0x5b1869D9A4C187F2EAa108f3062412ecf0526b24", 18)
///     .expect("valid token");
/// let dcb = Token::parse(ChainId::MOONBEAM_TEST, "0xCfEB869F69431e42cdB54A4F4f105C19C080A601", 18)
///     .expect("valid token");
///
/// let pair = Pair::new(
///     TokenAmount::new(dcb.clone(), 101u32).expect("fits"),
///     TokenAmount::new(dca.clone(), 100u32).expect("fits"),
/// )
/// .expect("same chain");
///
/// assert_eq!(pair.token0(), &dca);
/// assert_eq!(pair.reserve_of(&dcb).map(|r| r.raw().clone()), Ok(101u32.into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    reserve0: TokenAmount,
    reserve1: TokenAmount,
}

impl Pair {
    /// Creates a pair from two reserves given in any order.
    ///
    /// # Errors
    ///
    /// - [`SdkError::ChainMismatch`] if the tokens are on different chains.
    /// - [`SdkError::IdenticalAddresses`] if both reserves are the same token.
    pub fn new(amount_a: TokenAmount, amount_b: TokenAmount) -> Result<Self> {
        let (reserve0, reserve1) = if amount_a.token().sorts_before(amount_b.token())? {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        debug!(
            chain_id = %reserve0.token().chain_id(),
            token0 = %reserve0.token(),
            token1 = %reserve1.token(),
            reserve0 = %reserve0.raw(),
            reserve1 = %reserve1.raw(),
            "constructed pair"
        );
        Ok(Self { reserve0, reserve1 })
    }

    /// Computes the pool address for two tokens without building a pair.
    ///
    /// # Errors
    ///
    /// - [`SdkError::ChainMismatch`] if the tokens are on different chains.
    /// - [`SdkError::IdenticalAddresses`] if they share an address.
    /// - [`SdkError::UnsupportedChain`] if `registry` has no entry for the
    ///   chain.
    pub fn get_address(token_a: &Token, token_b: &Token, registry: &ChainRegistry) -> Result<Address> {
        // Reject mismatched chains before the registry lookup.
        token_a.sorts_before(token_b)?;
        let config = registry.get(token_a.chain_id())?;
        compute_pair_address(
            config.factory_address(),
            config.init_code_hash(),
            token_a,
            token_b,
        )
    }

    /// Returns this pool's address.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::UnsupportedChain`] if `registry` has no entry
    /// for the pair's chain.
    pub fn address(&self, registry: &ChainRegistry) -> Result<Address> {
        Self::get_address(self.token0(), self.token1(), registry)
    }

    /// Returns the pool's ERC-20 liquidity token.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::UnsupportedChain`] if `registry` has no entry
    /// for the pair's chain.
    pub fn liquidity_token(&self, registry: &ChainRegistry) -> Result<Token> {
        Ok(
            Token::new(self.chain_id(), self.address(registry)?, Decimals::EIGHTEEN)
                .with_symbol(LIQUIDITY_TOKEN_SYMBOL)
                .with_name(LIQUIDITY_TOKEN_NAME),
        )
    }

    /// Returns the token that sorts first.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        self.reserve0.token()
    }

    /// Returns the token that sorts second.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        self.reserve1.token()
    }

    /// Returns the reserve of [`token0`](Self::token0).
    #[must_use]
    pub const fn reserve0(&self) -> &TokenAmount {
        &self.reserve0
    }

    /// Returns the reserve of [`token1`](Self::token1).
    #[must_use]
    pub const fn reserve1(&self) -> &TokenAmount {
        &self.reserve1
    }

    /// Returns the chain both tokens live on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.token0().chain_id()
    }

    /// Returns `true` if `token` is one of the pair's tokens.
    #[must_use]
    pub fn involves_token(&self, token: &Token) -> bool {
        token == self.token0() || token == self.token1()
    }

    /// Returns the reserve of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::UnrelatedToken`] if `token` is not in the pair.
    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount> {
        if token == self.token0() {
            Ok(&self.reserve0)
        } else if token == self.token1() {
            Ok(&self.reserve1)
        } else {
            Err(SdkError::UnrelatedToken)
        }
    }

    /// Price of `token0` in units of `token1`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InsufficientLiquidity`] if either reserve is zero.
    pub fn token0_price(&self) -> Result<Price<Token>> {
        self.ensure_liquidity()?;
        Price::new(
            self.token0().clone(),
            self.token1().clone(),
            self.reserve0.raw().clone(),
            self.reserve1.raw().clone(),
        )
    }

    /// Price of `token1` in units of `token0`, the inverse of
    /// [`token0_price`](Self::token0_price).
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InsufficientLiquidity`] if either reserve is zero.
    pub fn token1_price(&self) -> Result<Price<Token>> {
        self.token0_price()?.invert()
    }

    /// Price of `token` in units of the other token.
    ///
    /// # Errors
    ///
    /// - [`SdkError::UnrelatedToken`] if `token` is not in the pair.
    /// - [`SdkError::InsufficientLiquidity`] if either reserve is zero.
    pub fn price_of(&self, token: &Token) -> Result<Price<Token>> {
        if token == self.token0() {
            self.token0_price()
        } else if token == self.token1() {
            self.token1_price()
        } else {
            Err(SdkError::UnrelatedToken)
        }
    }

    fn ensure_liquidity(&self) -> Result<()> {
        if self.reserve0.is_zero() || self.reserve1.is_zero() {
            return Err(SdkError::InsufficientLiquidity);
        }
        Ok(())
    }

    /// Returns the reserves as `(of token, of the other token)`.
    fn sides(&self, token: &Token) -> Result<(&TokenAmount, &TokenAmount)> {
        if token == self.token0() {
            Ok((&self.reserve0, &self.reserve1))
        } else if token == self.token1() {
            Ok((&self.reserve1, &self.reserve0))
        } else {
            Err(SdkError::UnrelatedToken)
        }
    }

    /// Quotes an exact-input swap of `input`.
    ///
    /// Returns the output amount and the pair after the swap.
    ///
    /// # Errors
    ///
    /// - [`SdkError::UnrelatedToken`] if `input` is not in the pair.
    /// - [`SdkError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`SdkError::InvalidAmount`] if `input` is zero or buys nothing.
    pub fn get_output_amount(&self, input: &TokenAmount) -> Result<(TokenAmount, Self)> {
        let (input_reserve, output_reserve) = self.sides(input.token())?;
        let amount_out = get_amount_out(input.raw(), input_reserve.raw(), output_reserve.raw())?;
        let output = TokenAmount::new(output_reserve.token().clone(), amount_out)?;
        let next = Self::new(
            input_reserve.checked_add(input)?,
            output_reserve.checked_sub(&output)?,
        )?;
        Ok((output, next))
    }

    /// Quotes an exact-output swap of `output`.
    ///
    /// Returns the input amount required and the pair after the swap.
    ///
    /// # Errors
    ///
    /// - [`SdkError::UnrelatedToken`] if `output` is not in the pair.
    /// - [`SdkError::InsufficientLiquidity`] if either reserve is zero or
    ///   `output` would drain its reserve.
    /// - [`SdkError::InvalidAmount`] if `output` is zero.
    pub fn get_input_amount(&self, output: &TokenAmount) -> Result<(TokenAmount, Self)> {
        let (output_reserve, input_reserve) = self.sides(output.token())?;
        let amount_in = get_amount_in(output.raw(), input_reserve.raw(), output_reserve.raw())?;
        let input = TokenAmount::new(input_reserve.token().clone(), amount_in)?;
        let next = Self::new(
            input_reserve.checked_add(&input)?,
            output_reserve.checked_sub(output)?,
        )?;
        Ok((input, next))
    }

    fn ensure_liquidity_token(&self, amount: &TokenAmount, registry: &ChainRegistry) -> Result<()> {
        if amount.token() != &self.liquidity_token(registry)? {
            return Err(SdkError::TokenMismatch);
        }
        Ok(())
    }

    /// LP units minted for depositing `amount_a` and `amount_b` when
    /// `total_supply` units are outstanding.
    ///
    /// The first deposit mints `sqrt(a0 × a1) − MINIMUM_LIQUIDITY`; later
    /// deposits mint `min(a0 × supply / r0, a1 × supply / r1)`.
    ///
    /// # Errors
    ///
    /// - [`SdkError::TokenMismatch`] if `total_supply` is not this pool's
    ///   LP token.
    /// - [`SdkError::UnrelatedToken`] if the deposits are not one of each
    ///   pair token.
    /// - [`SdkError::InsufficientLiquidity`] if supply exists over an empty
    ///   reserve.
    /// - [`SdkError::InvalidAmount`] if nothing would be minted.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
        registry: &ChainRegistry,
    ) -> Result<TokenAmount> {
        self.ensure_liquidity_token(total_supply, registry)?;
        let (amount0, amount1) = if amount_a.token() == self.token0() {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        if amount0.token() != self.token0() || amount1.token() != self.token1() {
            return Err(SdkError::UnrelatedToken);
        }

        let supply = total_supply.raw();
        let liquidity = if supply.is_zero() {
            let root = (amount0.raw() * amount1.raw()).sqrt();
            let minimum = BigUint::from(MINIMUM_LIQUIDITY);
            if root <= minimum {
                BigUint::zero()
            } else {
                root - minimum
            }
        } else {
            if self.reserve0.is_zero() || self.reserve1.is_zero() {
                return Err(SdkError::InsufficientLiquidity);
            }
            let share0 = amount0.raw() * supply / self.reserve0.raw();
            let share1 = amount1.raw() * supply / self.reserve1.raw();
            share0.min(share1)
        };

        if liquidity.is_zero() {
            return Err(SdkError::InvalidAmount(
                "deposit too small to mint liquidity",
            ));
        }
        TokenAmount::new(total_supply.token().clone(), liquidity)
    }

    /// Amount of `token` redeemable for `liquidity` LP units.
    ///
    /// With `k_last` set, the protocol fee is on: the supply is first
    /// diluted by the fee liquidity the pool would mint, which is
    /// `supply × (√k − √k_last) / (5 × √k + √k_last)` where `k` is the
    /// current reserve product.
    ///
    /// # Errors
    ///
    /// - [`SdkError::UnrelatedToken`] if `token` is not in the pair.
    /// - [`SdkError::TokenMismatch`] if `total_supply` or `liquidity` is
    ///   not this pool's LP token.
    /// - [`SdkError::InvalidAmount`] if `liquidity` exceeds `total_supply`.
    /// - [`SdkError::InsufficientLiquidity`] if the supply is zero.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        k_last: Option<&BigUint>,
        registry: &ChainRegistry,
    ) -> Result<TokenAmount> {
        let reserve = self.reserve_of(token)?;
        self.ensure_liquidity_token(total_supply, registry)?;
        self.ensure_liquidity_token(liquidity, registry)?;
        if liquidity.raw() > total_supply.raw() {
            return Err(SdkError::InvalidAmount("liquidity exceeds total supply"));
        }

        let mut supply = total_supply.raw().clone();
        if let Some(k_last) = k_last.filter(|k| !k.is_zero()) {
            let root_k = (self.reserve0.raw() * self.reserve1.raw()).sqrt();
            let root_k_last = k_last.sqrt();
            if root_k > root_k_last {
                let numerator = &supply * (&root_k - &root_k_last);
                let denominator = root_k * 5u32 + root_k_last;
                supply += numerator / denominator;
            }
        }
        if supply.is_zero() {
            return Err(SdkError::InsufficientLiquidity);
        }

        TokenAmount::new(token.clone(), liquidity.raw() * reserve.raw() / supply)
    }
}
