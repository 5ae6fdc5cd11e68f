#![allow(clippy::print_stdout)]
//! Print a summary of every network in the registry.
//!
//! Usage:
//!   cargo run --example `list_chains`

use vechain_chains::Network;

fn main() {
    for network in Network::ALL {
        let chain = network.data();
        println!(
            "{:<8} chain_id={} rpc={} delegation={}",
            chain.short_name,
            chain.chain_id,
            chain.preferred_rpc(),
            if chain.delegate_tx_enabled() {
                "on"
            } else {
                "off"
            },
        );
    }
}
