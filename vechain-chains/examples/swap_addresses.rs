#![allow(clippy::print_stdout)]
//! Resolve the contract addresses a swap integration needs on mainnet.
//!
//! Usage:
//!   cargo run --example `swap_addresses`

use vechain_chains::{TokenSymbol, get_chain_data};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chain = get_chain_data(100_009)?;

    let vtho = chain.token(TokenSymbol::Vtho).ok_or("VTHO not whitelisted")?;
    println!("VTHO: {} ({} decimals)", vtho.address, vtho.decimals);

    for dex in &chain.dexs {
        println!("[{}] router={}", dex.name, dex.router_v2);
        println!("[{}] WETH-VTHO pair={}", dex.name, dex.pair_weth_vtho);
        match dex.pair_weth_b3tr {
            Some(pair) => println!("[{}] WETH-B3TR pair={pair}", dex.name),
            None => println!("[{}] WETH-B3TR pair not deployed", dex.name),
        }
    }

    println!("gas pump: {}", chain.gas_pump);

    Ok(())
}
