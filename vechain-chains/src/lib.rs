//! Static registry of VeChain network configuration.
//!
//! One immutable, compiled-in table maps the three VeChain chain IDs
//! (mainnet 100009, testnet 100010, devnet 100011) to fully-populated
//! descriptor records: RPC endpoints, block explorers, the native currency,
//! the whitelisted token list, supported DEX contract addresses and the
//! gas-delegation ("gas pump") contract plus its off-chain service endpoint.
//!
//! The registry performs no I/O and holds no mutable state; every accessor
//! returns a `&'static` view of the same table, safe for unsynchronized
//! concurrent reads.
//!
//! # Example
//!
//! ```
//! use vechain_chains::{DexName, get_chain_data};
//!
//! let chain = get_chain_data(100_009)?;
//! assert_eq!(chain.name, "VeChain");
//!
//! let verocket = chain.dex(DexName::Verocket).unwrap();
//! println!("router: {}", verocket.router_v2);
//! # Ok::<(), vechain_chains::Error>(())
//! ```

pub mod chains;
pub mod error;
pub mod networks;
pub mod types;

pub use chains::get_chain_data;
pub use error::Error;
pub use networks::Network;
pub use types::{
    ChainData, Dex, DexName, Explorer, NativeCurrency, NetworkTag, Token, TokenSymbol,
};
