//! Error types for balance and price lookups

use thiserror::Error;

/// A balance lookup for one (address, chain) pair failed
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no RPC endpoint configured for chain {0}")]
    UnsupportedChain(u64),

    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to send request to {endpoint}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("RPC request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("no result in RPC response")]
    MissingResult,

    #[error("failed to parse hex balance value {0:?}")]
    InvalidBalance(String),

    #[error("balance unavailable: {0}")]
    Unavailable(String),
}

/// The quote service could not supply prices
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("failed to reach price service")]
    Request(#[from] reqwest::Error),

    #[error("price service returned status: {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected price response shape")]
    Malformed(#[from] serde_json::Error),
}
