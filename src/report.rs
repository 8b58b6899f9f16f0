//! Terminal rendering of an aggregation result

use std::fmt;

use crate::chain::chain_symbol;
use crate::format::format_currency;
use crate::AggregatedData;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Render the summary and per-wallet breakdown as plain text
pub fn render_report(data: &AggregatedData) -> String {
    let mut out = String::new();
    write_report(&mut out, data).map(|_| out).unwrap_or_default()
}

/// Write the summary and per-wallet breakdown to `out`
pub fn write_report(out: &mut impl fmt::Write, data: &AggregatedData) -> fmt::Result {
    if data.wallets.is_empty() {
        return writeln!(out, "No wallets connected");
    }

    let count = data.wallets.len();
    let noun = if count == 1 { "wallet" } else { "wallets" };

    writeln!(out, "Your Total Crypto Holdings")?;
    writeln!(out, "{}", format_currency(data.total_balance_usd))?;
    writeln!(out, "Aggregated from {} connected {}", count, noun)?;

    for wallet in &data.wallets {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", wallet.wallet_name)?;
        writeln!(out, "  {}", wallet.address)?;
        if wallet.balances.is_empty() {
            writeln!(out, "  no balances available")?;
        }
        for balance in &wallet.balances {
            writeln!(
                out,
                "  {:<10} {:>16} {:<5} ≈ {}",
                balance.chain_name,
                balance.balance_formatted,
                chain_symbol(balance.chain_id),
                format_currency(balance.balance_usd)
            )?;
        }
        writeln!(out, "  Total: {}", format_currency(wallet.total_balance_usd))?;
    }
    writeln!(out, "{}", RULE)
}
