//! USD price lookup per chain
//!
//! Prices come from a CoinGecko-style `simple/price` endpoint. Any failure
//! falls back to a fixed per-chain table, so a price lookup never fails
//! from the caller's point of view.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::chain::{fallback_price, Chain};
use crate::error::PriceError;

/// Asset ID -> quote object, e.g. `{"usd": 3100.5}`
///
/// An entry without a numeric `usd` field only affects the chains priced in that asset.
pub type PriceQuotes = HashMap<String, Value>;

/// Source of USD prices for a chain's native token
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// USD price per whole native token on `chain_id`
    async fn usd_price(&self, chain_id: u64) -> f64;
}

/// Price provider backed by the CoinGecko simple price API
///
/// Every call makes one request; nothing is cached.
#[derive(Debug, Clone)]
pub struct CoinGeckoPriceProvider {
    client: reqwest::Client,
    url: String,
}

impl CoinGeckoPriceProvider {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetch the raw quote map with a single request
    pub async fn fetch_quotes(&self) -> Result<PriceQuotes, PriceError> {
        debug!(url = %self.url, "fetching token prices");
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(PriceError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoPriceProvider {
    async fn usd_price(&self, chain_id: u64) -> f64 {
        match self.fetch_quotes().await {
            Ok(quotes) => resolve_price(chain_id, &quotes),
            Err(e) => {
                warn!(chain_id, error = %e, "price lookup failed, using fallback price");
                fallback_price(chain_id)
            }
        }
    }
}

/// Price provider that only ever answers from the fallback table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPriceProvider;

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    async fn usd_price(&self, chain_id: u64) -> f64 {
        fallback_price(chain_id)
    }
}

/// Pick the price for `chain_id` out of a quote map
///
/// Missing or unusable quotes resolve to the chain's fallback price.
pub fn resolve_price(chain_id: u64, quotes: &PriceQuotes) -> f64 {
    let quote = |asset: &str| {
        quotes
            .get(asset)
            .and_then(|q| q.get("usd"))
            .and_then(Value::as_f64)
            .filter(|price| price.is_finite() && *price > 0.0)
    };

    let price = match Chain::from_id(chain_id) {
        Some(Chain::Polygon) => quote("matic-network"),
        Some(Chain::Base) => quote("base-ethereum").or_else(|| quote("ethereum")),
        Some(_) => quote("ethereum"),
        None => None,
    };

    price.unwrap_or_else(|| fallback_price(chain_id))
}
