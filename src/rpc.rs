//! Native balance lookup over EVM JSON-RPC
//!
//! This module provides the balance-lookup capability consumed by the
//! aggregator, plus an implementation that calls `eth_getBalance` on each
//! chain's public RPC endpoint.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::error::LookupError;

/// Source of native balances, in smallest units
#[async_trait]
pub trait BalanceLookup: Send + Sync {
    async fn balance_of(&self, address: &str, chain_id: u64) -> Result<u128, LookupError>;
}

/// JSON-RPC request structure
#[derive(Debug, Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Vec<serde_json::Value>,
    id: u64,
}

/// JSON-RPC response structure
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<String>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Balance lookup that queries one RPC endpoint per chain
#[derive(Debug, Clone)]
pub struct RpcBalanceLookup {
    client: reqwest::Client,
    endpoints: HashMap<u64, String>,
}

impl RpcBalanceLookup {
    pub fn new(client: reqwest::Client, endpoints: HashMap<u64, String>) -> Self {
        Self { client, endpoints }
    }

    pub fn from_config(client: reqwest::Client, config: &DashboardConfig) -> Self {
        Self::new(client, config.rpc_urls.clone())
    }
}

#[async_trait]
impl BalanceLookup for RpcBalanceLookup {
    async fn balance_of(&self, address: &str, chain_id: u64) -> Result<u128, LookupError> {
        let endpoint = self
            .endpoints
            .get(&chain_id)
            .ok_or(LookupError::UnsupportedChain(chain_id))?;

        let address = normalize_address(address)?;
        validate_address(&address)?;

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            method: "eth_getBalance".to_string(),
            params: vec![json!(address), json!("latest")],
            id: 1,
        };

        debug!(%address, chain_id, %endpoint, "requesting balance");
        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|source| LookupError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let rpc_response: JsonRpcResponse =
            response.json().await.map_err(|source| LookupError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        if let Some(error) = rpc_response.error {
            return Err(LookupError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        let balance_hex = rpc_response.result.ok_or(LookupError::MissingResult)?;
        parse_hex_to_u128(&balance_hex)
    }
}

/// Normalize an EVM address by ensuring it has a 0x prefix
fn normalize_address(address: &str) -> Result<String, LookupError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(invalid(address, "address cannot be empty"));
    }

    let normalized = if address.starts_with("0x") || address.starts_with("0X") {
        format!("0x{}", address[2..].to_lowercase())
    } else {
        format!("0x{}", address.to_lowercase())
    };

    Ok(normalized)
}

/// Validate EVM address format (basic validation)
fn validate_address(address: &str) -> Result<(), LookupError> {
    // 0x + 40 hex chars
    if address.len() != 42 {
        return Err(invalid(address, "expected 42 characters"));
    }

    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(address, "contains invalid hex characters"));
    }

    Ok(())
}

fn invalid(address: &str, reason: &str) -> LookupError {
    LookupError::InvalidAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a hex quantity to u128
fn parse_hex_to_u128(hex_str: &str) -> Result<u128, LookupError> {
    let digits = hex_str.trim_start_matches("0x");
    if digits.is_empty() {
        return Ok(0);
    }

    u128::from_str_radix(digits, 16).map_err(|_| LookupError::InvalidBalance(hex_str.to_string()))
}
