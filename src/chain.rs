//! Supported blockchain networks
//!
//! Static table mapping each supported chain ID to its display name,
//! native symbol, default RPC endpoint and fallback USD price.

use anyhow::Result;

/// USD price assumed for ETH-denominated chains when no quote is available
pub const ETH_FALLBACK_PRICE: f64 = 2500.0;

/// Networks the dashboard knows how to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Ethereum,
    Sepolia,
    Polygon,
    Arbitrum,
    Optimism,
    Base,
}

impl Chain {
    /// All supported chains, in the order the chain selector lists them
    pub const ALL: [Chain; 6] = [
        Chain::Sepolia,
        Chain::Ethereum,
        Chain::Polygon,
        Chain::Arbitrum,
        Chain::Optimism,
        Chain::Base,
    ];

    pub fn from_id(chain_id: u64) -> Option<Chain> {
        match chain_id {
            1 => Some(Chain::Ethereum),
            11155111 => Some(Chain::Sepolia),
            137 => Some(Chain::Polygon),
            42161 => Some(Chain::Arbitrum),
            10 => Some(Chain::Optimism),
            8453 => Some(Chain::Base),
            _ => None,
        }
    }

    pub fn id(self) -> u64 {
        match self {
            Chain::Ethereum => 1,
            Chain::Sepolia => 11155111,
            Chain::Polygon => 137,
            Chain::Arbitrum => 42161,
            Chain::Optimism => 10,
            Chain::Base => 8453,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Sepolia => "Sepolia",
            Chain::Polygon => "Polygon",
            Chain::Arbitrum => "Arbitrum",
            Chain::Optimism => "Optimism",
            Chain::Base => "Base",
        }
    }

    /// Native token symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Chain::Polygon => "MATIC",
            _ => "ETH",
        }
    }

    /// Price used when the quote service is unavailable
    pub fn fallback_usd_price(self) -> f64 {
        match self {
            Chain::Polygon => 0.8,
            _ => ETH_FALLBACK_PRICE,
        }
    }

    pub fn default_rpc_url(self) -> &'static str {
        match self {
            Chain::Ethereum => "https://cloudflare-eth.com",
            Chain::Sepolia => "https://rpc.sepolia.org",
            Chain::Polygon => "https://polygon-rpc.com",
            Chain::Arbitrum => "https://arb1.arbitrum.io/rpc",
            Chain::Optimism => "https://mainnet.optimism.io",
            Chain::Base => "https://mainnet.base.org",
        }
    }
}

/// Display name for any chain ID, including ones outside the table
pub fn chain_name(chain_id: u64) -> String {
    match Chain::from_id(chain_id) {
        Some(chain) => chain.name().to_string(),
        None => format!("Chain {}", chain_id),
    }
}

/// Native symbol for any chain ID; unknown chains are assumed to be ETH-based
pub fn chain_symbol(chain_id: u64) -> &'static str {
    Chain::from_id(chain_id).map(Chain::symbol).unwrap_or("ETH")
}

/// Fallback USD price for any chain ID; unknown chains use the Ethereum price
pub fn fallback_price(chain_id: u64) -> f64 {
    Chain::from_id(chain_id)
        .map(Chain::fallback_usd_price)
        .unwrap_or(ETH_FALLBACK_PRICE)
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().to_lowercase())
    }
}

impl std::str::FromStr for Chain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u64>() {
            return Chain::from_id(id).ok_or_else(|| anyhow::anyhow!("Unsupported chain: {}", s));
        }

        match s.to_lowercase().as_str() {
            "ethereum" | "eth" | "mainnet" => Ok(Chain::Ethereum),
            "sepolia" => Ok(Chain::Sepolia),
            "polygon" | "matic" => Ok(Chain::Polygon),
            "arbitrum" | "arb" => Ok(Chain::Arbitrum),
            "optimism" | "op" => Ok(Chain::Optimism),
            "base" => Ok(Chain::Base),
            _ => Err(anyhow::anyhow!("Unsupported chain: {}", s)),
        }
    }
}
