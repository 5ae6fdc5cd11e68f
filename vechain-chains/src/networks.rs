//! The closed set of VeChain network deployments.
//!
//! Three networks exist: mainnet (production), testnet (staging) and a
//! local devnet whose on-chain deployment mirrors the testnet. Chain IDs
//! outside this set have no descriptor.

use crate::chains;
use crate::types::ChainData;

/// A VeChain network deployment known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// VeChain mainnet (chain ID 100009).
    Mainnet,
    /// VeChain testnet (chain ID 100010).
    Testnet,
    /// Local development network (chain ID 100011). Shares the testnet's
    /// on-chain deployment; only the off-chain service endpoints differ.
    Devnet,
}

impl Network {
    /// All known network variants, in chain-ID order.
    pub const ALL: &[Self] = &[Self::Mainnet, Self::Testnet, Self::Devnet];

    /// Returns the chain ID for this network.
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Mainnet => 100_009,
            Self::Testnet => 100_010,
            Self::Devnet => 100_011,
        }
    }

    /// Look up a [`Network`] by its chain ID.
    ///
    /// Returns [`None`] if the chain ID is not a known VeChain network.
    #[must_use]
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            100_009 => Some(Self::Mainnet),
            100_010 => Some(Self::Testnet),
            100_011 => Some(Self::Devnet),
            _ => None,
        }
    }

    /// Whether this is a non-production deployment.
    #[must_use]
    pub const fn is_testnet(self) -> bool {
        !matches!(self, Self::Mainnet)
    }

    /// Returns the full descriptor record for this network.
    #[must_use]
    pub fn data(self) -> &'static ChainData {
        chains::chain_data(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_round_trips_through_from_chain_id() {
        for network in Network::ALL {
            assert_eq!(Network::from_chain_id(network.chain_id()), Some(*network));
        }
    }

    #[test]
    fn unknown_chain_ids_have_no_network() {
        for id in [0, 1, 100_008, 100_012, u64::MAX] {
            assert_eq!(Network::from_chain_id(id), None);
        }
    }

    #[test]
    fn only_mainnet_is_production() {
        assert!(!Network::Mainnet.is_testnet());
        assert!(Network::Testnet.is_testnet());
        assert!(Network::Devnet.is_testnet());
    }
}
