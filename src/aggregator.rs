//! Balance aggregation across wallets and chains
//!
//! Every (address, chain) pair is looked up concurrently. Results are merged
//! into per-wallet buckets as they complete, and a failed pair is logged and
//! left out without affecting the others.

use std::collections::{HashMap, HashSet};

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{error, info};

use crate::chain::chain_name;
use crate::error::LookupError;
use crate::format::{format_balance, wei_to_f64};
use crate::price::PriceProvider;
use crate::rpc::BalanceLookup;
use crate::{AggregatedData, Currency, WalletBalance, WalletData, WalletRef};

/// Look up every pair in `wallets` and build the per-wallet breakdown
///
/// Returns once every lookup has settled. Wallets appear in first-seen
/// order; the order of balances inside a wallet follows completion order.
/// A pair given more than once contributes a single balance.
pub async fn calculate_balances<B, P>(
    wallets: &[WalletRef],
    balances: &B,
    prices: &P,
) -> AggregatedData
where
    B: BalanceLookup + ?Sized,
    P: PriceProvider + ?Sized,
{
    let mut buckets: Vec<WalletData> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for wallet in wallets {
        if !index.contains_key(wallet.address.as_str()) {
            index.insert(wallet.address.as_str(), buckets.len());
            buckets.push(WalletData::new(&wallet.address));
        }
    }

    // Repeated pairs are looked up once
    let mut seen: HashSet<&WalletRef> = HashSet::new();
    let mut pending: FuturesUnordered<_> = wallets
        .iter()
        .filter(|wallet| seen.insert(*wallet))
        .map(|wallet| async move { (wallet, fetch_balance(wallet, balances, prices).await) })
        .collect();

    let pairs = pending.len();
    let mut failed = 0usize;
    while let Some((wallet, outcome)) = pending.next().await {
        match outcome {
            Ok(balance) => {
                if let Some(&slot) = index.get(wallet.address.as_str()) {
                    buckets[slot].push(balance);
                }
            }
            Err(e) => {
                failed += 1;
                error!(
                    address = %wallet.address,
                    chain_id = wallet.chain_id,
                    error = %e,
                    "error fetching balance"
                );
            }
        }
    }

    let total_balance_usd: f64 = buckets.iter().map(|w| w.total_balance_usd).sum();
    info!(
        wallets = buckets.len(),
        pairs,
        failed,
        total_balance_usd,
        "aggregated balances"
    );

    AggregatedData {
        wallets: buckets,
        total_balance_usd,
        currency: Currency::Usd,
    }
}

/// Balance lookup, then price lookup, for one pair
async fn fetch_balance<B, P>(
    wallet: &WalletRef,
    balances: &B,
    prices: &P,
) -> Result<WalletBalance, LookupError>
where
    B: BalanceLookup + ?Sized,
    P: PriceProvider + ?Sized,
{
    let wei = balances.balance_of(&wallet.address, wallet.chain_id).await?;
    let price = prices.usd_price(wallet.chain_id).await;

    Ok(WalletBalance {
        chain_id: wallet.chain_id,
        chain_name: chain_name(wallet.chain_id),
        address: wallet.address.clone(),
        balance: wei.to_string(),
        balance_formatted: format_balance(wei),
        balance_usd: wei_to_f64(wei) * price,
    })
}
