//! Error taxonomy for registry lookups.

/// Errors returned by registry lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The queried chain ID is not one of the known VeChain networks.
    #[error("unknown chain ID {0}")]
    UnknownChain(u64),
}
