//! VeChain chain registry inspection library.
//!
//! Renders the compiled-in chain table from [`vechain_chains`] for
//! operators, with optional per-chain RPC overrides from `config.toml`.

pub mod config;
