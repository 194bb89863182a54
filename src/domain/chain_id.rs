//! Numeric chain identifier.

use core::fmt;

/// Identifier of the network a token or pool lives on.
///
/// Any `u64` is accepted; the associated constants name the networks the
/// built-in [`ChainRegistry`](crate::config::ChainRegistry) knows about.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::ChainId;
///
/// assert_eq!(ChainId::MOONBEAM_TEST.get(), 1287);
/// assert_eq!(ChainId::from(1), ChainId::MAINNET);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u64);

impl ChainId {
    /// Ethereum mainnet.
    pub const MAINNET: Self = Self(1);
    /// Ropsten testnet.
    pub const ROPSTEN: Self = Self(3);
    /// BNB Smart Chain testnet.
    pub const BINANCE_TEST: Self = Self(97);
    /// Moonbase Alpha (Moonbeam testnet).
    pub const MOONBEAM_TEST: Self = Self(1287);

    /// Wraps a raw chain id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw chain id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
