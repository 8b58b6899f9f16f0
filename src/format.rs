//! Display formatting for balances and USD amounts
//!
//! Everything here is pure; no I/O.

/// Number of fractional digits of a native token amount
pub const NATIVE_DECIMALS: u32 = 18;

const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Convert wei to ETH (1 ETH = 10^18 wei), exact and with trailing zeros trimmed
pub fn wei_to_eth(wei: u128) -> String {
    if wei == 0 {
        return "0".to_string();
    }

    let eth_whole = wei / WEI_PER_ETH;
    let eth_fraction = wei % WEI_PER_ETH;

    if eth_fraction == 0 {
        return eth_whole.to_string();
    }

    // Format with leading zeros if needed
    let fraction_str = format!("{:018}", eth_fraction);
    let trimmed = fraction_str.trim_end_matches('0');

    format!("{}.{}", eth_whole, trimmed)
}

/// Decimal amount of a smallest-unit balance
pub fn wei_to_f64(wei: u128) -> f64 {
    // wei_to_eth always yields a plain decimal literal
    wei_to_eth(wei).parse().unwrap_or(0.0)
}

/// Human-readable balance for a smallest-unit amount
///
/// Zero renders as `0.00`, dust below 0.0001 as `< 0.0001`, amounts below 1
/// with 6 decimals, below 1000 with 4, and anything larger comma-grouped
/// with at most 2 decimals.
pub fn format_balance(wei: u128) -> String {
    let amount = wei_to_f64(wei);

    if amount == 0.0 {
        return "0.00".to_string();
    }
    if amount < 0.0001 {
        return "< 0.0001".to_string();
    }
    if amount < 1.0 {
        return format!("{:.6}", amount);
    }
    if amount < 1000.0 {
        return format!("{:.4}", amount);
    }

    let fixed = format!("{:.2}", amount);
    let (whole, fraction) = split_decimal(&fixed);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        group_thousands(whole)
    } else {
        format!("{}.{}", group_thousands(whole), fraction)
    }
}

/// USD amount with a dollar sign, thousands separators and exactly 2 decimals
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = split_decimal(&fixed);
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

/// `0x1234...abcd` style abbreviation of an address
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

fn split_decimal(fixed: &str) -> (&str, &str) {
    match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (fixed, ""),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
