//! Currency identity: native gas currencies and contract tokens.
//!
//! A chain has exactly one native currency, which has no contract address.
//! Rather than a base class with a protected singleton, the two kinds are
//! variants of [`Currency`]; the canonical native value for a chain comes
//! from [`ChainRegistry::native_currency`](crate::config::ChainRegistry::native_currency).

use core::fmt;
use core::hash::{Hash, Hasher};

use super::{ChainId, Decimals, Token};

/// Behaviour shared by everything that can denominate an amount or price.
pub trait CurrencyLike: Clone + PartialEq + fmt::Debug {
    /// Decimal places of the smallest unit.
    fn decimals(&self) -> Decimals;

    /// Ticker symbol, if known.
    fn symbol(&self) -> Option<&str>;

    /// Display name, if known.
    fn name(&self) -> Option<&str>;
}

/// The native gas currency of one chain (ETH, GLMR, BNB, ...).
///
/// Two native currencies are equal when they belong to the same chain.
#[derive(Debug, Clone)]
pub struct NativeCurrency {
    chain_id: ChainId,
    decimals: Decimals,
    symbol: String,
    name: String,
}

impl NativeCurrency {
    /// Describes the native currency of `chain_id`.
    #[must_use]
    pub fn new(
        chain_id: ChainId,
        decimals: Decimals,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            decimals,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// Returns the chain this currency is native to.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}

impl PartialEq for NativeCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Eq for NativeCurrency {}

impl Hash for NativeCurrency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
    }
}

impl CurrencyLike for NativeCurrency {
    fn decimals(&self) -> Decimals {
        self.decimals
    }

    fn symbol(&self) -> Option<&str> {
        Some(&self.symbol)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl CurrencyLike for Token {
    fn decimals(&self) -> Decimals {
        Token::decimals(self)
    }

    fn symbol(&self) -> Option<&str> {
        Token::symbol(self)
    }

    fn name(&self) -> Option<&str> {
        Token::name(self)
    }
}

/// Any fungible asset: a chain's native currency or a contract token.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::{ChainId, Currency, Decimals, NativeCurrency};
///
/// let glmr = Currency::from(NativeCurrency::new(
///     ChainId::MOONBEAM_TEST,
///     Decimals::EIGHTEEN,
///     "GLMR",
///     "Glimmer",
/// ));
/// assert!(glmr.is_native());
/// assert_eq!(glmr.chain_id(), ChainId::MOONBEAM_TEST);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    /// The chain's native gas currency.
    Native(NativeCurrency),
    /// A contract token.
    Token(Token),
}

impl Currency {
    /// Returns the chain the currency belongs to.
    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        match self {
            Self::Native(native) => native.chain_id(),
            Self::Token(token) => token.chain_id(),
        }
    }

    /// Returns `true` for the native variant.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// Returns the token if this is a contract token.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Native(_) => None,
        }
    }
}

impl CurrencyLike for Currency {
    fn decimals(&self) -> Decimals {
        match self {
            Self::Native(native) => native.decimals(),
            Self::Token(token) => token.decimals(),
        }
    }

    fn symbol(&self) -> Option<&str> {
        match self {
            Self::Native(native) => CurrencyLike::symbol(native),
            Self::Token(token) => token.symbol(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Self::Native(native) => CurrencyLike::name(native),
            Self::Token(token) => token.name(),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Self::Native(native)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => write!(f, "{}", native.symbol),
            Self::Token(token) => write!(f, "{token}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn glmr() -> NativeCurrency {
        NativeCurrency::new(ChainId::MOONBEAM_TEST, Decimals::EIGHTEEN, "GLMR", "Glimmer")
    }

    fn dca() -> Token {
        let Ok(t) = Token::parse(
            ChainId::MOONBEAM_TEST,
            "0x5b1869D9A4C187F2EAa108f3062412ecf0526b24",
            18,
        ) else {
            panic!("valid token");
        };
        t.with_symbol("DCA")
    }

    #[test]
    fn native_equality_is_per_chain() {
        let other = NativeCurrency::new(ChainId::MAINNET, Decimals::EIGHTEEN, "ETH", "Ether");
        assert_eq!(glmr(), glmr());
        assert_ne!(glmr(), other);
    }

    #[test]
    fn native_never_equals_token() {
        let native = Currency::from(glmr());
        let token = Currency::from(dca());
        assert_ne!(native, token);
    }

    #[test]
    fn metadata_through_trait() {
        let native = Currency::from(glmr());
        assert_eq!(native.decimals(), Decimals::EIGHTEEN);
        assert_eq!(native.symbol(), Some("GLMR"));
        assert_eq!(native.name(), Some("Glimmer"));

        let token = Currency::from(dca());
        assert_eq!(token.symbol(), Some("DCA"));
        assert_eq!(token.name(), None);
    }

    #[test]
    fn as_token() {
        assert!(Currency::from(glmr()).as_token().is_none());
        assert_eq!(Currency::from(dca()).as_token(), Some(&dca()));
    }

    #[test]
    fn display() {
        assert_eq!(Currency::from(glmr()).to_string(), "GLMR");
        assert_eq!(Currency::from(dca()).to_string(), "DCA");
    }
}
