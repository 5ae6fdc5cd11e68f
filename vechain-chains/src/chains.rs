//! The compiled-in chain descriptor table and its lookup accessor.
//!
//! The table is built exactly once behind [`LazyLock`] and never mutated,
//! so lookups hand out `&'static` shared views that are safe to read from
//! any number of threads without synchronization.
//!
//! Dataset lineage follows <https://github.com/ethereum-lists/chains> for
//! the metadata fields; token, DEX and gas-pump addresses come from the
//! respective deployments.

use std::sync::LazyLock;

use alloy::primitives::{Address, address};

use crate::error::Error;
use crate::networks::Network;
use crate::types::{
    ChainData, Dex, DexName, Explorer, NativeCurrency, NetworkTag, Token, TokenSymbol,
};

/// VTHO energy contract; the same built-in address on every network.
const VTHO: Address = address!("0000000000000000000000000000456e65726779");

/// B3TR contract on mainnet.
const B3TR_MAINNET: Address = address!("5ef79995fe8a89e0812330e4378eb2660cede699");

/// B3TR contract on testnet.
const B3TR_TESTNET: Address = address!("bf64cf86894ee0877c4e7d03936e35ee8d8b864f");

fn native_currency() -> NativeCurrency {
    NativeCurrency {
        name: "VeChain".to_owned(),
        symbol: "VET".to_owned(),
        decimals: 18,
    }
}

/// Token whitelist for one network. VET is the native coin and carries the
/// all-zero address sentinel.
fn tokens(b3tr: Address) -> Vec<Token> {
    vec![
        Token {
            symbol: TokenSymbol::Vet,
            name: "VeChain".to_owned(),
            address: Address::ZERO,
            decimals: 18,
        },
        Token {
            symbol: TokenSymbol::Vtho,
            name: "VeThor".to_owned(),
            address: VTHO,
            decimals: 18,
        },
        Token {
            symbol: TokenSymbol::B3tr,
            name: "B3TR".to_owned(),
            address: b3tr,
            decimals: 18,
        },
    ]
}

static MAINNET: LazyLock<ChainData> = LazyLock::new(|| ChainData {
    name: "VeChain".to_owned(),
    chain: "VeChain".to_owned(),
    network: NetworkTag::Main,
    rpc: vec![
        "https://mainnet.veblocks.net".to_owned(),
        "https://mainnetc2.vechain.network".to_owned(),
        "https://mainnetc1.vechain.network".to_owned(),
    ],
    faucets: Vec::new(),
    native_currency: native_currency(),
    info_url: "https://vechain.org".to_owned(),
    short_name: "vechain".to_owned(),
    chain_id: Network::Mainnet.chain_id(),
    network_id: Network::Mainnet.chain_id(),
    icon: None,
    explorers: vec![
        Explorer {
            name: "VeChain Stats".to_owned(),
            url: "https://vechainstats.com".to_owned(),
            icon: None,
            standard: "none".to_owned(),
        },
        Explorer {
            name: "VeChain Explorer".to_owned(),
            url: "https://explore.vechain.org".to_owned(),
            icon: None,
            standard: "none".to_owned(),
        },
    ],
    tokens: tokens(B3TR_MAINNET),
    dexs: vec![
        Dex {
            name: DexName::Verocket,
            weth: address!("45429a2255e7248e57fce99e7239aed3f84b7a53"),
            router_v2: address!("576da7124c7bb65a692d95848276367e5a844d95"),
            pair_weth_vtho: address!("29a996b0ebb7a77023d091c9f2ca34646bea6ede"),
            pair_weth_b3tr: Some(address!("b2e4fc26e1ce8bd223559b4e82c4c136c4051277")),
        },
        Dex {
            name: DexName::Vexchange,
            weth: address!("d8ccdd85abdbf68dfec95f06c973e87b1b5a9997"),
            router_v2: address!("6c0a6e1d922e0e63901301573370b932ae20dadb"),
            pair_weth_vtho: address!("2b6fc877ff5535b50f6c3e068bb436b16ec76fc5"),
            // B3TR-WETH is not deployed on Vexchange.
            pair_weth_b3tr: None,
        },
    ],
    vex_wrapper: address!("3c3847a92b57a3163d26cc2eb22f53b33baa34d8"),
    gas_pump: address!("ff3c6dabd0dcaf77363d59fdbc52939073f88014"),
    // Fee delegation has not launched on mainnet yet.
    delegate_tx_endpoint: String::new(),
});

static TESTNET: LazyLock<ChainData> = LazyLock::new(|| ChainData {
    name: "VeChain Testnet".to_owned(),
    chain: "VeChain".to_owned(),
    network: NetworkTag::Test,
    rpc: vec![
        "https://testnet.veblocks.net".to_owned(),
        "https://vethor-node-test.vechaindev.com".to_owned(),
        "https://testnetc1.vechain.network".to_owned(),
    ],
    faucets: vec!["https://faucet.vecha.in".to_owned()],
    native_currency: native_currency(),
    info_url: "https://vechain.org".to_owned(),
    short_name: "vechain-testnet".to_owned(),
    chain_id: Network::Testnet.chain_id(),
    network_id: Network::Testnet.chain_id(),
    icon: None,
    explorers: vec![Explorer {
        name: "VeChain Explorer".to_owned(),
        url: "https://explore-testnet.vechain.org".to_owned(),
        icon: None,
        standard: "none".to_owned(),
    }],
    tokens: tokens(B3TR_TESTNET),
    dexs: vec![
        Dex {
            name: DexName::Verocket,
            weth: address!("86fb5343bbecffc86185c023a2a6ccc76fc0afd8"),
            router_v2: address!("91e42759290239a62ac757cf85bb5b74ace57927"),
            pair_weth_vtho: address!("1e5e9a6540b15a3efa8d4e8fadb82cc8e0e167ca"),
            pair_weth_b3tr: None,
        },
        Dex {
            name: DexName::Vexchange,
            weth: address!("93e5fa8011612fab061ef58cbab9262d2e76407b"),
            router_v2: address!("01d6b50b31c18d7f81ede43935cadf79901b0ea0"),
            pair_weth_vtho: address!("68139e121b1884c5055325d4bdc6ae7c9b000bd0"),
            pair_weth_b3tr: None,
        },
    ],
    vex_wrapper: address!("0bb72c2423cff281e9e7aa49b0ebb3a2d3280603"),
    gas_pump: address!("b9704e77504333774df3d84f01a984d1c5dc1b34"),
    delegate_tx_endpoint: "https://handletxsignature-3co32ksh6a-uc.a.run.app".to_owned(),
});

/// The devnet record is the testnet record with only the chain IDs and the
/// delegation endpoint overridden; everything on-chain is inherited
/// verbatim. A construction-time copy, not a live link.
static DEVNET: LazyLock<ChainData> = LazyLock::new(|| ChainData {
    chain_id: Network::Devnet.chain_id(),
    network_id: Network::Devnet.chain_id(),
    delegate_tx_endpoint: "http://127.0.0.1:5001/gaspumpdev/us-central1/handletxsignature"
        .to_owned(),
    ..(*TESTNET).clone()
});

/// Returns the descriptor record for a network.
pub(crate) fn chain_data(network: Network) -> &'static ChainData {
    match network {
        Network::Mainnet => &MAINNET,
        Network::Testnet => &TESTNET,
        Network::Devnet => &DEVNET,
    }
}

/// Look up the full descriptor record for a chain ID.
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` is not one of the three
/// known VeChain chain IDs. Unknown IDs are never mapped to a default
/// record: handing out another network's contract addresses would be a
/// financial-safety hazard.
pub fn get_chain_data(chain_id: u64) -> Result<&'static ChainData, Error> {
    Network::from_chain_id(chain_id)
        .map(chain_data)
        .ok_or(Error::UnknownChain(chain_id))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_known_chain_id_resolves_to_its_own_record() {
        for network in Network::ALL {
            let id = network.chain_id();
            let chain = get_chain_data(id).unwrap();
            assert_eq!(chain.chain_id, id);
            assert_eq!(chain.network_id, id);
        }
    }

    #[test]
    fn unknown_chain_ids_fail_loudly() {
        for id in [0, 1, 74, 100_008, 100_012] {
            assert_eq!(get_chain_data(id), Err(Error::UnknownChain(id)));
        }
    }

    #[test]
    fn lookups_are_idempotent_and_share_the_same_record() {
        let first = get_chain_data(100_009).unwrap();
        let second = get_chain_data(100_009).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn token_symbols_are_unique_within_each_chain() {
        for network in Network::ALL {
            let chain = network.data();
            let symbols: HashSet<_> = chain.tokens.iter().map(|t| t.symbol).collect();
            assert_eq!(
                symbols.len(),
                chain.tokens.len(),
                "duplicate token symbol on chain {}",
                chain.chain_id
            );
        }
    }

    #[test]
    fn only_the_native_coin_uses_the_zero_address_sentinel() {
        for network in Network::ALL {
            let chain = network.data();
            for token in &chain.tokens {
                assert_eq!(token.is_native(), token.symbol == TokenSymbol::Vet);
            }
        }
    }

    #[test]
    fn devnet_inherits_everything_from_testnet_except_ids_and_endpoint() {
        let test = Network::Testnet.data();
        let dev = Network::Devnet.data();

        assert_eq!(dev.name, test.name);
        assert_eq!(dev.chain, test.chain);
        assert_eq!(dev.network, test.network);
        assert_eq!(dev.rpc, test.rpc);
        assert_eq!(dev.faucets, test.faucets);
        assert_eq!(dev.native_currency, test.native_currency);
        assert_eq!(dev.info_url, test.info_url);
        assert_eq!(dev.short_name, test.short_name);
        assert_eq!(dev.icon, test.icon);
        assert_eq!(dev.explorers, test.explorers);
        assert_eq!(dev.tokens, test.tokens);
        assert_eq!(dev.dexs, test.dexs);
        assert_eq!(dev.vex_wrapper, test.vex_wrapper);
        assert_eq!(dev.gas_pump, test.gas_pump);

        assert_eq!(dev.chain_id, 100_011);
        assert_eq!(dev.network_id, 100_011);
        assert_ne!(dev.delegate_tx_endpoint, test.delegate_tx_endpoint);
    }

    #[test]
    fn mainnet_verocket_router_matches_the_deployed_contract() {
        let chain = get_chain_data(100_009).unwrap();
        let dex = chain.dex(DexName::Verocket).unwrap();
        // Address equality is byte-wise, so mixed-case input compares equal.
        assert_eq!(
            dex.router_v2,
            "0x576DA7124C7BB65A692D95848276367E5A844D95"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn delegation_availability_is_read_from_the_record() {
        assert!(!get_chain_data(100_009).unwrap().delegate_tx_enabled());
        let test = get_chain_data(100_010).unwrap();
        assert!(test.delegate_tx_enabled());
        assert!(test.delegate_tx_endpoint.starts_with("https://"));
        assert!(get_chain_data(100_011).unwrap().delegate_tx_enabled());
    }

    #[test]
    fn rpc_lists_keep_insertion_order() {
        let chain = get_chain_data(100_009).unwrap();
        assert_eq!(chain.preferred_rpc(), "https://mainnet.veblocks.net");
        assert_eq!(chain.rpc.len(), 3);
        assert_eq!(chain.explorers[0].name, "VeChain Stats");
    }

    #[test]
    fn b3tr_pair_exists_only_on_mainnet_verocket() {
        for network in Network::ALL {
            let chain = network.data();
            for dex in &chain.dexs {
                let expected =
                    *network == Network::Mainnet && dex.name == DexName::Verocket;
                assert_eq!(dex.pair_weth_b3tr.is_some(), expected);
            }
        }
    }
}
