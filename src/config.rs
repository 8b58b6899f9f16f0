//! Runtime configuration: endpoints, HTTP timeout and default chain

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::chain::Chain;

/// Quote endpoint for every asset the supported chains are priced in
pub const DEFAULT_PRICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price?ids=ethereum,matic-network,arbitrum,optimism,base-ethereum&vs_currencies=usd";

const USER_AGENT: &str = concat!("wallet-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub price_url: String,
    /// RPC endpoint per chain ID
    pub rpc_urls: HashMap<u64, String>,
    /// Applied to every HTTP request; `None` leaves requests unbounded
    pub request_timeout: Option<Duration>,
    /// Chain assumed for wallets given without one
    pub default_chain: Chain,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            price_url: DEFAULT_PRICE_URL.to_string(),
            rpc_urls: Chain::ALL
                .iter()
                .map(|chain| (chain.id(), chain.default_rpc_url().to_string()))
                .collect(),
            request_timeout: None,
            default_chain: Chain::Sepolia,
        }
    }
}

impl DashboardConfig {
    /// Replace the RPC endpoint for one chain
    pub fn with_rpc_url(mut self, chain: Chain, url: impl Into<String>) -> Self {
        self.rpc_urls.insert(chain.id(), url.into());
        self
    }

    pub fn with_price_url(mut self, url: impl Into<String>) -> Self {
        self.price_url = url.into();
        self
    }

    pub fn rpc_url(&self, chain_id: u64) -> Option<&str> {
        self.rpc_urls.get(&chain_id).map(String::as_str)
    }

    /// Shared HTTP client for the balance and price lookups
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().context("Failed to build HTTP client")
    }
}

/// Parse a `CHAIN=URL` override as given on the command line
pub fn parse_rpc_override(s: &str) -> Result<(Chain, String)> {
    let (chain, url) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected CHAIN=URL, got: {}", s))?;
    let url = url.trim();
    if url.is_empty() {
        return Err(anyhow::anyhow!("RPC URL for {} cannot be empty", chain));
    }
    Ok((chain.parse()?, url.to_string()))
}
