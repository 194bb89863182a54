//! Per-chain deployment constants.

use alloy_primitives::{Address, B256};

use crate::domain::{ChainId, NativeCurrency};
use crate::error::{Result, SdkError};

/// Constants that locate pools on one chain.
///
/// Pool addresses are derived from `factory_address` and `init_code_hash`
/// with CREATE2; `native_currency` is the chain's gas currency, if the
/// SDK knows one.
///
/// # Validation
///
/// - The native currency, when present, must belong to `chain_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    chain_id: ChainId,
    factory_address: Address,
    init_code_hash: B256,
    native_currency: Option<NativeCurrency>,
}

impl ChainConfig {
    /// Creates a configuration with no native currency.
    #[must_use]
    pub const fn new(chain_id: ChainId, factory_address: Address, init_code_hash: B256) -> Self {
        Self {
            chain_id,
            factory_address,
            init_code_hash,
            native_currency: None,
        }
    }

    /// Attaches the chain's native currency.
    #[must_use]
    pub fn with_native_currency(mut self, native_currency: NativeCurrency) -> Self {
        self.native_currency = Some(native_currency);
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidConfiguration`] if the native currency
    /// belongs to another chain.
    pub fn validate(&self) -> Result<()> {
        if let Some(native) = &self.native_currency {
            if native.chain_id() != self.chain_id {
                return Err(SdkError::InvalidConfiguration(format!(
                    "native currency of chain {} registered under chain {}",
                    native.chain_id(),
                    self.chain_id
                )));
            }
        }
        Ok(())
    }

    /// Returns the chain id.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the pair factory (CREATE2 deployer) address.
    #[must_use]
    pub const fn factory_address(&self) -> Address {
        self.factory_address
    }

    /// Returns the keccak256 hash of the pair contract's init code.
    #[must_use]
    pub const fn init_code_hash(&self) -> B256 {
        self.init_code_hash
    }

    /// Returns the native currency, if one is configured.
    #[must_use]
    pub const fn native_currency(&self) -> Option<&NativeCurrency> {
        self.native_currency.as_ref()
    }
}
