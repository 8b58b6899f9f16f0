//! Wallet Dashboard Library
//!
//! This library aggregates native wallet balances across several EVM
//! networks and converts them to an estimated USD value.

pub mod aggregator;
pub mod chain;
pub mod config;
pub mod error;
pub mod format;
pub mod price;
pub mod report;
pub mod rpc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use aggregator::calculate_balances;
pub use chain::Chain;
pub use config::DashboardConfig;
pub use error::{LookupError, PriceError};
pub use format::{format_balance, format_currency};
pub use price::{CoinGeckoPriceProvider, PriceProvider, StaticPriceProvider};
pub use rpc::{BalanceLookup, RpcBalanceLookup};

/// One (address, chain) pair to look up
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletRef {
    pub address: String,
    pub chain_id: u64,
}

impl WalletRef {
    pub fn new(address: impl Into<String>, chain_id: u64) -> Self {
        Self {
            address: address.into(),
            chain_id,
        }
    }

    /// Parse `ADDRESS[@CHAIN]`, using `default_chain` when no chain is given
    pub fn parse(s: &str, default_chain: Chain) -> Result<Self> {
        let (address, chain) = match s.split_once('@') {
            Some((address, chain)) => (address.trim(), chain.parse::<Chain>()?),
            None => (s.trim(), default_chain),
        };

        if address.is_empty() {
            return Err(anyhow::anyhow!("Wallet address cannot be empty"));
        }

        Ok(Self::new(address, chain.id()))
    }
}

/// One chain's balance for one wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub chain_id: u64,
    pub chain_name: String,
    pub address: String,
    /// Raw balance in smallest units
    pub balance: String,
    pub balance_formatted: String,
    #[serde(rename = "balanceUSD")]
    pub balance_usd: f64,
}

/// All balances found for one address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletData {
    pub wallet_name: String,
    pub address: String,
    pub balances: Vec<WalletBalance>,
    #[serde(rename = "totalBalanceUSD")]
    pub total_balance_usd: f64,
}

impl WalletData {
    /// Create an empty bucket for `address`
    pub fn new(address: &str) -> Self {
        Self {
            wallet_name: format!("Wallet {}", format::short_address(address)),
            address: address.to_string(),
            balances: Vec::new(),
            total_balance_usd: 0.0,
        }
    }

    /// Append one chain's balance and add it to the running total
    pub fn push(&mut self, balance: WalletBalance) {
        self.total_balance_usd += balance.balance_usd;
        self.balances.push(balance);
    }
}

/// Unit the totals are expressed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Native,
    Usd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Native => write!(f, "native"),
            Currency::Usd => write!(f, "usd"),
        }
    }
}

/// Result of one aggregation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedData {
    pub wallets: Vec<WalletData>,
    #[serde(rename = "totalBalanceUSD")]
    pub total_balance_usd: f64,
    pub currency: Currency,
}
