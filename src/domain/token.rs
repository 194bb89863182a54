//! On-chain token identity.

use core::fmt;
use core::hash::{Hash, Hasher};

use alloy_primitives::Address;

use super::{to_checksum, validate_and_parse_address, ChainId, Decimals};
use crate::error::{Result, SdkError};

/// A contract token on a specific chain.
///
/// Identity is `(chain_id, address)`: decimals, symbol and name are
/// metadata and take no part in equality or hashing. The address is held
/// as raw bytes, so differently-cased inputs for one contract compare equal.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::{ChainId, Token};
///
/// let dca = Token::parse(ChainId::MOONBEAM_TEST, "0x5b1869D9A4C187F2EAa108f3062412ecf0526b24", 18)
///     .expect("valid token")
///     .with_symbol("DCA")
///     .with_name("DCA Token");
/// let same = Token::parse(ChainId::MOONBEAM_TEST, "0x5b1869d9a4c187f2eaa108f3062412ecf0526b24", 6)
///     .expect("valid token");
///
/// assert_eq!(dca, same);
/// assert_eq!(dca.symbol(), Some("DCA"));
/// ```
#[derive(Debug, Clone)]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: Decimals,
    symbol: Option<String>,
    name: Option<String>,
}

impl Token {
    /// Creates a token from an already-parsed address.
    #[must_use]
    pub const fn new(chain_id: ChainId, address: Address, decimals: Decimals) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    /// Creates a token from a textual address and a raw decimals value.
    ///
    /// # Errors
    ///
    /// - [`SdkError::Parse`] if the address is malformed.
    /// - [`SdkError::OutOfRange`] if `decimals` does not fit in `uint8`.
    pub fn parse(chain_id: ChainId, address: &str, decimals: u32) -> Result<Self> {
        let address = validate_and_parse_address(address)?;
        let decimals = Decimals::new(decimals)?;
        Ok(Self::new(chain_id, address, decimals))
    }

    /// Attaches a ticker symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Attaches a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the chain the token lives on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the decimal places of the token's smallest unit.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns the ticker symbol, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the display name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the address in EIP-55 checksum form.
    #[must_use]
    pub fn checksum_address(&self) -> String {
        to_checksum(&self.address)
    }

    /// Returns `true` if `self` is ordered before `other` in a pair.
    ///
    /// Tokens on one chain are ordered by the numeric value of their
    /// address, which is the big-endian byte order of the address.
    ///
    /// # Errors
    ///
    /// - [`SdkError::ChainMismatch`] if the tokens are on different chains.
    /// - [`SdkError::IdenticalAddresses`] if both tokens share an address.
    pub fn sorts_before(&self, other: &Self) -> Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(SdkError::ChainMismatch {
                left: self.chain_id.get(),
                right: other.chain_id.get(),
            });
        }
        if self.address == other.address {
            return Err(SdkError::IdenticalAddresses);
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol}"),
            None => write!(f, "{}", self.checksum_address()),
        }
    }
}
