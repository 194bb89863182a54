//! Immutable chain-id to [`ChainConfig`] mapping.
//!
//! A [`ChainRegistry`] is passed explicitly to every operation that needs
//! per-chain constants, such as pool address derivation. It can come from
//! the built-in table ([`ChainRegistry::default`]) or from a TOML document:
//!
//! ```toml
//! [[chains]]
//! chain_id = 1287
//! factory_address = "0xA57B8a5584442B467b4689F1144D269d096A3daF"
//! init_code_hash = "0xdbe8de032cd5a6eaf8be7cec100683c0cc1232085885978265102af9a7c6400c"
//!
//! [chains.native_currency]
//! symbol = "GLMR"
//! name = "Glimmer"
//! decimals = 18
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::{address, b256, B256};
use serde::Deserialize;
use tracing::debug;

use super::ChainConfig;
use crate::domain::{validate_and_parse_address, ChainId, Currency, Decimals, NativeCurrency};
use crate::error::{Result, SdkError};

/// keccak256 of the pair contract init code shared by the built-in chains.
pub const INIT_CODE_HASH: B256 =
    b256!("dbe8de032cd5a6eaf8be7cec100683c0cc1232085885978265102af9a7c6400c");

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    chains: Vec<ChainEntry>,
}

#[derive(Debug, Deserialize)]
struct ChainEntry {
    chain_id: u64,
    factory_address: String,
    #[serde(default)]
    init_code_hash: Option<String>,
    #[serde(default)]
    native_currency: Option<NativeEntry>,
}

#[derive(Debug, Deserialize)]
struct NativeEntry {
    symbol: String,
    name: String,
    decimals: u32,
}

impl ChainEntry {
    fn into_config(self) -> Result<ChainConfig> {
        let chain_id = ChainId::new(self.chain_id);
        let invalid = |what: &str| {
            SdkError::InvalidConfiguration(format!("chain {chain_id}: invalid {what}"))
        };

        let factory = validate_and_parse_address(&self.factory_address)
            .map_err(|_| invalid("factory_address"))?;
        let init_code_hash = match self.init_code_hash {
            Some(hash) => B256::from_str(&hash).map_err(|_| invalid("init_code_hash"))?,
            None => INIT_CODE_HASH,
        };

        let mut config = ChainConfig::new(chain_id, factory, init_code_hash);
        if let Some(native) = self.native_currency {
            let decimals =
                Decimals::new(native.decimals).map_err(|_| invalid("native currency decimals"))?;
            config = config.with_native_currency(NativeCurrency::new(
                chain_id,
                decimals,
                native.symbol,
                native.name,
            ));
        }
        Ok(config)
    }
}

/// Per-chain constants keyed by [`ChainId`].
///
/// # Examples
///
/// ```
/// use pairswap_sdk::config::ChainRegistry;
/// use pairswap_sdk::domain::ChainId;
///
/// let registry = ChainRegistry::default();
/// let moonbase = registry.get(ChainId::MOONBEAM_TEST).expect("built-in chain");
/// assert_eq!(
///     moonbase.factory_address().to_string(),
///     "0xA57B8a5584442B467b4689F1144D269d096A3daF"
/// );
/// assert!(registry.get(ChainId::new(424242)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: BTreeMap<ChainId, ChainConfig>,
}

impl ChainRegistry {
    /// Builds a registry from a list of configurations.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidConfiguration`] if a configuration is
    /// invalid or a chain id appears twice.
    pub fn new(configs: impl IntoIterator<Item = ChainConfig>) -> Result<Self> {
        let mut chains = BTreeMap::new();
        for config in configs {
            config.validate()?;
            let chain_id = config.chain_id();
            if chains.insert(chain_id, config).is_some() {
                return Err(SdkError::InvalidConfiguration(format!(
                    "chain {chain_id} is listed more than once"
                )));
            }
        }
        Ok(Self { chains })
    }

    /// Parses a registry from a TOML document of `[[chains]]` tables.
    ///
    /// `init_code_hash` may be omitted and defaults to [`INIT_CODE_HASH`].
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidConfiguration`] if the document is
    /// malformed, a field does not parse, or a chain id repeats.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(document).map_err(|e| {
            SdkError::InvalidConfiguration(format!("failed to parse chain registry: {e}"))
        })?;
        let configs = file
            .chains
            .into_iter()
            .map(ChainEntry::into_config)
            .collect::<Result<Vec<_>>>()?;
        let registry = Self::new(configs)?;
        debug!(chains = registry.chains.len(), "loaded chain registry");
        Ok(registry)
    }

    /// Reads and parses a TOML registry file.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidConfiguration`] if the file cannot be
    /// read or fails [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|e| {
            SdkError::InvalidConfiguration(format!(
                "failed to read chain registry {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&document)
    }

    /// Returns a copy of this registry with `config` added, replacing any
    /// existing entry for its chain.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidConfiguration`] if `config` is invalid.
    pub fn with_chain(&self, config: ChainConfig) -> Result<Self> {
        config.validate()?;
        let mut chains = self.chains.clone();
        chains.insert(config.chain_id(), config);
        Ok(Self { chains })
    }

    /// Looks up the configuration for `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::UnsupportedChain`] if the chain is unknown.
    pub fn get(&self, chain_id: ChainId) -> Result<&ChainConfig> {
        self.chains
            .get(&chain_id)
            .ok_or(SdkError::UnsupportedChain(chain_id.get()))
    }

    /// Returns the one canonical native currency of `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::UnsupportedChain`] if the chain is unknown or
    /// has no native currency configured.
    pub fn native_currency(&self, chain_id: ChainId) -> Result<Currency> {
        self.get(chain_id)?
            .native_currency()
            .cloned()
            .map(Currency::Native)
            .ok_or(SdkError::UnsupportedChain(chain_id.get()))
    }

    /// Iterates the registered chain ids in ascending order.
    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.chains.keys().copied()
    }
}

impl Default for ChainRegistry {
    /// The built-in table of known deployments.
    fn default() -> Self {
        let native = |chain_id, decimals, symbol: &str, name: &str| {
            NativeCurrency::new(chain_id, Decimals::from_u8(decimals), symbol, name)
        };
        let configs = [
            ChainConfig::new(
                ChainId::MAINNET,
                address!("0000000000000000000000000000000000000000"),
                INIT_CODE_HASH,
            )
            .with_native_currency(native(ChainId::MAINNET, 18, "ETH", "Ether")),
            ChainConfig::new(
                ChainId::ROPSTEN,
                address!("2F4a92dE564238dAf88774E5DE6d3d6A7d9Bb4D1"),
                INIT_CODE_HASH,
            ),
            ChainConfig::new(
                ChainId::BINANCE_TEST,
                address!("e1C915aBa8c97aD03E2803F744302783F7D81324"),
                INIT_CODE_HASH,
            )
            .with_native_currency(native(ChainId::BINANCE_TEST, 8, "BNB", "Binance Coin")),
            ChainConfig::new(
                ChainId::MOONBEAM_TEST,
                address!("A57B8a5584442B467b4689F1144D269d096A3daF"),
                INIT_CODE_HASH,
            )
            .with_native_currency(native(ChainId::MOONBEAM_TEST, 18, "GLMR", "Glimmer")),
        ];
        Self {
            chains: configs
                .into_iter()
                .map(|config| (config.chain_id(), config))
                .collect(),
        }
    }
}
