//! VeChain chain registry inspection CLI.
//!
//! Renders the compiled-in registry: chain metadata, whitelisted tokens,
//! DEX contract addresses and gas-delegation endpoints.
//!
//! # Usage
//!
//! ```bash
//! # Summarize all known chains
//! vechain-chains-cli list
//!
//! # Full descriptor record as JSON
//! vechain-chains-cli show --chain 100009
//!
//! # Token whitelist / DEX addresses for one chain
//! vechain-chains-cli tokens --chain 100010
//! vechain-chains-cli dexs --chain 100009
//!
//! # Effective RPC list after config.toml overrides
//! vechain-chains-cli rpc --chain 100010 --config ./config.toml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vechain_chains::{ChainData, Network, get_chain_data};
use vechain_chains_cli::config::Config;

/// VeChain chain registry inspector.
#[derive(Debug, Parser)]
#[command(name = "vechain-chains-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize all known chains.
    List,

    /// Print the full descriptor record for one chain as JSON.
    Show {
        /// Chain ID (100009, 100010 or 100011).
        #[arg(long)]
        chain: u64,
    },

    /// Print the token whitelist for one chain.
    Tokens {
        /// Chain ID (100009, 100010 or 100011).
        #[arg(long)]
        chain: u64,
    },

    /// Print DEX contract addresses for one chain.
    Dexs {
        /// Chain ID (100009, 100010 or 100011).
        #[arg(long)]
        chain: u64,
    },

    /// Print the effective RPC endpoint list for one chain.
    Rpc {
        /// Chain ID (100009, 100010 or 100011).
        #[arg(long)]
        chain: u64,

        /// Path to an optional TOML file with per-chain RPC overrides.
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            cmd_list();
            Ok(())
        }
        Command::Show { chain } => cmd_show(chain),
        Command::Tokens { chain } => cmd_tokens(chain),
        Command::Dexs { chain } => cmd_dexs(chain),
        Command::Rpc { chain, config } => cmd_rpc(chain, &config),
    }
}

/// Resolve a chain ID or fail with a readable message.
fn resolve(chain_id: u64) -> Result<&'static ChainData> {
    get_chain_data(chain_id).with_context(|| {
        let known: Vec<u64> = Network::ALL.iter().map(|n| n.chain_id()).collect();
        format!("known chain IDs are {known:?}")
    })
}

/// Execute the `list` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_list() {
    println!(
        "{:<10} {:<18} {:<6} {:<12} RPC",
        "Chain ID", "Short Name", "Type", "Delegation"
    );
    println!("{}", "-".repeat(90));

    for network in Network::ALL {
        let chain = network.data();
        let delegation = if chain.delegate_tx_enabled() {
            "on"
        } else {
            "off"
        };
        println!(
            "{:<10} {:<18} {:<6} {:<12} {}",
            chain.chain_id,
            chain.short_name,
            if network.is_testnet() { "test" } else { "main" },
            delegation,
            chain.preferred_rpc(),
        );
    }
}

/// Execute the `show` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_show(chain_id: u64) -> Result<()> {
    let chain = resolve(chain_id)?;
    println!("{}", chain.to_json().context("serializing chain record")?);
    Ok(())
}

/// Execute the `tokens` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_tokens(chain_id: u64) -> Result<()> {
    let chain = resolve(chain_id)?;
    println!("{:<8} {:<44} {:<10} Name", "Symbol", "Address", "Decimals");
    println!("{}", "-".repeat(80));
    for token in &chain.tokens {
        println!(
            "{:<8} {:<44} {:<10} {}{}",
            token.symbol.as_str(),
            token.address.to_string(),
            token.decimals,
            token.name,
            if token.is_native() { " (native)" } else { "" },
        );
    }
    Ok(())
}

/// Execute the `dexs` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_dexs(chain_id: u64) -> Result<()> {
    let chain = resolve(chain_id)?;
    for dex in &chain.dexs {
        println!("[{}]", dex.name);
        println!("  weth          {}", dex.weth);
        println!("  routerV2      {}", dex.router_v2);
        println!("  pairWETH_VTHO {}", dex.pair_weth_vtho);
        if let Some(pair) = dex.pair_weth_b3tr {
            println!("  pairWETH_B3TR {pair}");
        }
    }
    println!("gasPump {}", chain.gas_pump);
    Ok(())
}

/// Execute the `rpc` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_rpc(chain_id: u64, config_path: &std::path::Path) -> Result<()> {
    let chain = resolve(chain_id)?;
    let config = Config::load(config_path)?;

    let rpcs = config.rpcs_for(chain_id, &chain.rpc);
    if config.chains.contains_key(&chain_id) {
        tracing::info!(chain_id, config = %config_path.display(), "using RPC overrides");
    }

    for url in rpcs {
        println!("{url}");
    }
    Ok(())
}
