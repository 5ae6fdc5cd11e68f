//! Descriptor records held by the chain registry.
//!
//! These types model the per-chain configuration records (CAIP-2 style
//! metadata, whitelisted tokens, DEX contract addresses, service endpoints)
//! and serialize to the camelCase JSON shape the dataset has always used.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Environment tag of a network deployment.
///
/// The devnet record is derived from the testnet record and therefore
/// carries [`NetworkTag::Test`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkTag {
    /// Production deployment.
    Main,
    /// Staging / test deployment.
    Test,
}

/// The closed set of whitelisted token symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenSymbol {
    /// VET, the native coin.
    Vet,
    /// VTHO, the energy/gas token.
    Vtho,
    /// B3TR, the VeBetterDAO governance token.
    B3tr,
}

impl TokenSymbol {
    /// Ticker string as rendered on explorers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vet => "VET",
            Self::Vtho => "VTHO",
            Self::B3tr => "B3TR",
        }
    }
}

impl std::fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of supported DEX deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DexName {
    /// VeRocket.
    Verocket,
    /// Vexchange.
    Vexchange,
}

impl DexName {
    /// Lowercase name as it appears in the dataset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verocket => "verocket",
            Self::Vexchange => "vexchange",
        }
    }
}

impl std::fmt::Display for DexName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chain's native currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// Human-readable name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal precision.
    pub decimals: u8,
}

/// A block explorer for human-facing links; never queried programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explorer {
    /// Explorer name.
    pub name: String,
    /// Explorer base URL.
    pub url: String,
    /// Optional icon reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Explorer API standard. Informational; `"none"` throughout this dataset.
    pub standard: String,
}

/// A whitelisted token on one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token symbol, unique within a chain's token list.
    pub symbol: TokenSymbol,
    /// Human-readable name.
    pub name: String,
    /// Contract address, or the all-zero sentinel for the native coin.
    pub address: Address,
    /// Decimal precision.
    pub decimals: u8,
}

impl Token {
    /// Whether this entry is the chain's native coin rather than a
    /// contract-backed token (all-zero address sentinel).
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.address == Address::ZERO
    }
}

/// Contract addresses of one DEX deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dex {
    /// DEX name.
    pub name: DexName,
    /// Wrapped-VET (WETH-equivalent) contract address.
    pub weth: Address,
    /// UniV2-style router contract address.
    pub router_v2: Address,
    /// Canonical WETH-VTHO pair contract address.
    #[serde(rename = "pairWETH_VTHO")]
    pub pair_weth_vtho: Address,
    /// WETH-B3TR pair contract address, if that pair exists on this DEX.
    #[serde(
        rename = "pairWETH_B3TR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pair_weth_b3tr: Option<Address>,
}

/// The full descriptor record for one chain.
///
/// Follows the `ethereum-lists/chains` CAIP-2 JSON layout, extended with the
/// token whitelist, DEX addresses and gas-delegation fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainData {
    /// Display name.
    pub name: String,
    /// Network family label.
    pub chain: String,
    /// Environment tag.
    pub network: NetworkTag,
    /// RPC endpoint URLs, best first. The registry prescribes no failover
    /// policy; endpoint selection is up to the caller.
    pub rpc: Vec<String>,
    /// Faucet URLs; empty on production networks.
    pub faucets: Vec<String>,
    /// Native currency descriptor.
    pub native_currency: NativeCurrency,
    /// Informational website URL.
    #[serde(rename = "infoURL")]
    pub info_url: String,
    /// Short name / slug.
    pub short_name: String,
    /// Chain ID.
    pub chain_id: u64,
    /// Network ID. Numerically identical to `chain_id` across this dataset,
    /// which callers must not assume generalizes.
    pub network_id: u64,
    /// Optional icon reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Block explorers; the first entry is the conventional default.
    pub explorers: Vec<Explorer>,
    /// Whitelisted tokens, native coin included.
    pub tokens: Vec<Token>,
    /// Supported DEXs.
    pub dexs: Vec<Dex>,
    /// VexWrapper contract address.
    pub vex_wrapper: Address,
    /// Gas pump contract address (the on-chain side of fee delegation).
    pub gas_pump: Address,
    /// Transaction-delegation service endpoint. An empty string means the
    /// feature is unavailable on this chain and callers must not call it.
    pub delegate_tx_endpoint: String,
}

impl ChainData {
    /// The preferred RPC endpoint (first entry of the list).
    #[must_use]
    pub fn preferred_rpc(&self) -> &str {
        self.rpc.first().map_or("", String::as_str)
    }

    /// Look up a whitelisted token by symbol.
    #[must_use]
    pub fn token(&self, symbol: TokenSymbol) -> Option<&Token> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    /// Look up a supported DEX by name.
    #[must_use]
    pub fn dex(&self, name: DexName) -> Option<&Dex> {
        self.dexs.iter().find(|d| d.name == name)
    }

    /// Whether the transaction-delegation service is available on this chain.
    #[must_use]
    pub fn delegate_tx_enabled(&self) -> bool {
        !self.delegate_tx_endpoint.is_empty()
    }

    /// Serialize this record to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a record from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
