//! Runtime configuration loaded from `config.toml`.
//!
//! Provides per-chain RPC endpoint overrides for operators who run their
//! own nodes. When no config file is present, the registry's built-in RPC
//! lists are used as-is.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Per-chain RPC overrides, keyed by chain ID.
    #[serde(default)]
    pub chains: HashMap<u64, ChainRpcs>,
}

/// RPC endpoint list for a single chain.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainRpcs {
    /// Ordered list of RPC URLs (best first).
    pub rpcs: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns [`Config::default`] if the file does not exist,
    /// allowing the binary to work without any config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Return the RPC URL list for a chain, falling back to the registry's
    /// built-in list if the config has no entry for this chain.
    #[must_use]
    pub fn rpcs_for(&self, chain_id: u64, defaults: &[String]) -> Vec<String> {
        match self.chains.get(&chain_id) {
            Some(c) if !c.rpcs.is_empty() => c.rpcs.clone(),
            _ => defaults.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_built_in_list() {
        let config: Config = toml::from_str(
            r#"
            [chains.100010]
            rpcs = ["https://my-node.internal"]
            "#,
        )
        .unwrap();
        let defaults = vec!["https://testnet.veblocks.net".to_owned()];
        assert_eq!(
            config.rpcs_for(100_010, &defaults),
            vec!["https://my-node.internal".to_owned()]
        );
    }

    #[test]
    fn missing_or_empty_entry_falls_back_to_defaults() {
        let config = Config::default();
        let defaults = vec!["https://mainnet.veblocks.net".to_owned()];
        assert_eq!(config.rpcs_for(100_009, &defaults), defaults);

        let empty: Config = toml::from_str(
            r#"
            [chains.100009]
            rpcs = []
            "#,
        )
        .unwrap();
        assert_eq!(empty.rpcs_for(100_009, &defaults), defaults);
    }

    #[test]
    fn absent_file_loads_the_default_config() {
        let config = Config::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(config.chains.is_empty());
    }
}
