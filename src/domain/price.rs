//! Exchange rate between two currencies.

use core::fmt;

use num_bigint::{BigInt, BigUint};

use super::{Currency, CurrencyAmount, CurrencyLike, Fraction, Rounding};
use crate::error::{Result, SdkError};

/// Amount of `quote` paid per unit of `base`, held as an exact ratio of
/// raw amounts.
///
/// The raw ratio is in smallest units of each side. [`adjusted`](Self::adjusted)
/// rescales it by the two currencies' decimals for display. Two prices
/// are equal when both currencies match and the raw ratios are equal as
/// rationals.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::{ChainId, Price, Rounding, Token};
///
/// let usdc = Token::parse(ChainId::MAINNET, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6)
///     .expect("valid token");
/// let weth = Token::parse(ChainId::MAINNET, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18)
///     .expect("valid token");
///
/// // 1 WETH (1e18 raw) buys 2000 USDC (2e9 raw).
/// let price = Price::new(weth, usdc, 1_000_000_000_000_000_000u64, 2_000_000_000u64)
///     .expect("non-zero base");
/// assert_eq!(price.to_significant(4, Rounding::Down).as_deref(), Ok("2000"));
/// ```
#[derive(Debug, Clone)]
pub struct Price<C: CurrencyLike = Currency> {
    base: C,
    quote: C,
    raw: Fraction,
    scalar: Fraction,
}

impl<C: CurrencyLike> Price<C> {
    /// Creates the price `quote_amount / base_amount` from raw amounts.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::DivisionByZero`] if `base_amount` is zero.
    pub fn new(
        base: C,
        quote: C,
        base_amount: impl Into<BigUint>,
        quote_amount: impl Into<BigUint>,
    ) -> Result<Self> {
        let raw = Fraction::new(
            BigInt::from(quote_amount.into()),
            BigInt::from(base_amount.into()),
        )?;
        Ok(Self::from_raw(base, quote, raw))
    }

    fn from_raw(base: C, quote: C, raw: Fraction) -> Self {
        let scalar = Fraction::from_scaled(
            BigInt::from(base.decimals().scale()),
            quote.decimals(),
        );
        Self {
            base,
            quote,
            raw,
            scalar,
        }
    }

    /// Returns the currency being priced.
    #[must_use]
    pub const fn base_currency(&self) -> &C {
        &self.base
    }

    /// Returns the currency the price is expressed in.
    #[must_use]
    pub const fn quote_currency(&self) -> &C {
        &self.quote
    }

    /// Raw ratio of quote smallest units per base smallest unit.
    #[must_use]
    pub const fn raw(&self) -> &Fraction {
        &self.raw
    }

    /// Ratio of whole quote units per whole base unit.
    #[must_use]
    pub fn adjusted(&self) -> Fraction {
        &self.raw * &self.scalar
    }

    /// Swaps base and quote.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::DivisionByZero`] if the price is zero.
    pub fn invert(&self) -> Result<Self> {
        Ok(Self::from_raw(
            self.quote.clone(),
            self.base.clone(),
            self.raw.invert()?,
        ))
    }

    /// Chains `self` (`A -> B`) with `other` (`B -> C`) into `A -> C`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::TokenMismatch`] if `self`'s quote is not
    /// `other`'s base.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.quote != other.base {
            return Err(SdkError::TokenMismatch);
        }
        Ok(Self::from_raw(
            self.base.clone(),
            other.quote.clone(),
            &self.raw * &other.raw,
        ))
    }

    /// Converts an amount of the base currency into the quote currency,
    /// truncating to a whole smallest unit.
    ///
    /// # Errors
    ///
    /// - [`SdkError::TokenMismatch`] if `amount` is not in the base currency.
    /// - [`SdkError::OutOfRange`] if the result exceeds `uint256`.
    pub fn quote(&self, amount: &CurrencyAmount<C>) -> Result<CurrencyAmount<C>> {
        if amount.currency() != &self.base {
            return Err(SdkError::TokenMismatch);
        }
        let value = &self.raw * &Fraction::from_integer(BigInt::from(amount.raw().clone()));
        let raw = value
            .quotient()
            .to_biguint()
            .ok_or(SdkError::OutOfRange { bits: 256 })?;
        CurrencyAmount::new(self.quote.clone(), raw)
    }

    /// Formats the adjusted price to `significant_digits` significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidPrecision`] if `significant_digits` is zero.
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        self.adjusted().to_significant(significant_digits, rounding)
    }

    /// Formats the adjusted price with exactly `decimal_places` digits.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidPrecision`] if `decimal_places` is out of
    /// range; see [`Fraction::to_fixed`].
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> Result<String> {
        self.adjusted().to_fixed(decimal_places, rounding)
    }
}

// The scalar is derived from decimals, which are token metadata.
impl<C: CurrencyLike> PartialEq for Price<C> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.quote == other.quote && self.raw == other.raw
    }
}

impl<C: CurrencyLike + Eq> Eq for Price<C> {}

impl<C: CurrencyLike> fmt::Display for Price<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self
            .to_significant(6, Rounding::Down)
            .map_err(|_| fmt::Error)?;
        match (self.quote.symbol(), self.base.symbol()) {
            (Some(quote), Some(base)) => write!(f, "{value} {quote}/{base}"),
            _ => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use alloy_primitives::Address;

    use super::*;
    use crate::domain::{ChainId, Decimals, Token, TokenAmount};

    fn token(byte: u8, decimals: u8) -> Token {
        Token::new(
            ChainId::MAINNET,
            Address::repeat_byte(byte),
            Decimals::from_u8(decimals),
        )
    }

    fn price(base: Token, quote: Token, b: u64, q: u64) -> Price<Token> {
        let Ok(p) = Price::new(base, quote, b, q) else {
            panic!("expected Ok");
        };
        p
    }

    #[test]
    fn zero_base_amount_rejected() {
        assert_eq!(
            Price::new(token(1, 18), token(2, 18), 0u32, 5u32),
            Err(SdkError::DivisionByZero)
        );
    }

    #[test]
    fn equality_is_rational() {
        let a = price(token(1, 18), token(2, 18), 100, 101);
        let b = price(token(1, 18), token(2, 18), 200, 202);
        assert_eq!(a, b);
        let swapped = price(token(2, 18), token(1, 18), 100, 101);
        assert_ne!(a, swapped);
    }

    #[test]
    fn equality_ignores_token_metadata() {
        let eighteen = price(token(1, 18), token(2, 18), 100, 101);
        let six = price(token(1, 6), token(2, 18), 100, 101);
        assert_eq!(token(1, 18), token(1, 6));
        assert_eq!(eighteen, six);
        assert_ne!(eighteen, price(token(1, 6), token(2, 18), 100, 102));
    }

    #[test]
    fn invert_swaps_sides() {
        let p = price(token(1, 18), token(2, 18), 100, 101);
        let Ok(inv) = p.invert() else {
            panic!("expected Ok");
        };
        assert_eq!(inv, price(token(2, 18), token(1, 18), 101, 100));
        assert_eq!(inv.base_currency(), &token(2, 18));
        assert_eq!(inv.invert(), Ok(p));
    }

    #[test]
    fn invert_zero_price_fails() {
        let p = price(token(1, 18), token(2, 18), 1, 0);
        assert_eq!(p.invert(), Err(SdkError::DivisionByZero));
    }

    #[test]
    fn adjusted_accounts_for_decimals() {
        // 1 whole base (18 dp) for 5 whole quote (6 dp).
        let p = price(token(1, 18), token(2, 6), 1_000_000_000_000_000_000, 5_000_000);
        assert_eq!(p.adjusted(), Fraction::from_integer(5));
        assert_eq!(p.to_fixed(2, Rounding::Down).as_deref(), Ok("5.00"));
        assert_eq!(p.to_significant(1, Rounding::Down).as_deref(), Ok("5"));
    }

    #[test]
    fn multiply_chains_prices() {
        let ab = price(token(1, 18), token(2, 18), 1, 2);
        let bc = price(token(2, 18), token(3, 18), 1, 3);
        assert_eq!(ab.multiply(&bc), Ok(price(token(1, 18), token(3, 18), 1, 6)));
        assert_eq!(bc.multiply(&ab), Err(SdkError::TokenMismatch));
    }

    #[test]
    fn quote_truncates() {
        let p = price(token(1, 18), token(2, 18), 3, 2);
        let Ok(input) = TokenAmount::new(token(1, 18), 10u32) else {
            panic!("expected Ok");
        };
        let Ok(out) = p.quote(&input) else {
            panic!("expected Ok");
        };
        assert_eq!(out.token(), &token(2, 18));
        assert_eq!(out.raw(), &BigUint::from(6u32));
    }

    #[test]
    fn quote_rejects_wrong_currency() {
        let p = price(token(1, 18), token(2, 18), 3, 2);
        let Ok(input) = TokenAmount::new(token(2, 18), 10u32) else {
            panic!("expected Ok");
        };
        assert_eq!(p.quote(&input), Err(SdkError::TokenMismatch));
    }

    #[test]
    fn display_with_symbols() {
        let base = token(1, 18).with_symbol("WETH");
        let quote = token(2, 18).with_symbol("DAI");
        let p = price(base, quote, 2, 5);
        assert_eq!(p.to_string(), "2.5 DAI/WETH");
    }
}
