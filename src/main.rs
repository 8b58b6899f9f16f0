//! Wallet Dashboard CLI
//!
//! Command-line tool to view aggregated wallet balances across chains

use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wallet_dashboard::config::parse_rpc_override;
use wallet_dashboard::report::render_report;
use wallet_dashboard::{
    calculate_balances, Chain, CoinGeckoPriceProvider, DashboardConfig, PriceProvider,
    RpcBalanceLookup, StaticPriceProvider, WalletRef,
};

#[derive(Parser)]
#[command(name = "wallet-dashboard")]
#[command(version)]
#[command(about = "View aggregated wallet balances across chains", long_about = None)]
struct Cli {
    /// Wallet to include, as ADDRESS or ADDRESS@CHAIN (repeatable)
    #[arg(short, long = "wallet", value_name = "ADDRESS[@CHAIN]")]
    wallets: Vec<String>,

    /// Look up every wallet on all supported chains
    #[arg(long)]
    all_chains: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Skip the price service and use built-in fallback prices
    #[arg(long)]
    offline_prices: bool,

    /// Price quote endpoint
    #[arg(long, env = "DASHBOARD_PRICE_URL", value_name = "URL")]
    price_url: Option<String>,

    /// Override a chain's RPC endpoint (repeatable)
    #[arg(long = "rpc", value_name = "CHAIN=URL")]
    rpc_overrides: Vec<String>,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "DASHBOARD_TIMEOUT_SECS", value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Chain for wallets given without one
    #[arg(
        long,
        env = "DASHBOARD_DEFAULT_CHAIN",
        value_name = "CHAIN",
        default_value = "sepolia"
    )]
    default_chain: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        eprintln!("Supported chains: sepolia, ethereum, polygon, arbitrum, optimism, base");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let wallets = wallet_refs(&cli, config.default_chain)?;

    let client = config.http_client()?;
    let lookup = RpcBalanceLookup::from_config(client.clone(), &config);
    let prices: Box<dyn PriceProvider> = if cli.offline_prices {
        Box::new(StaticPriceProvider)
    } else {
        Box::new(CoinGeckoPriceProvider::new(client, config.price_url.clone()))
    };

    let data = calculate_balances(&wallets, &lookup, prices.as_ref()).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print!("{}", render_report(&data));
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = DashboardConfig {
        default_chain: cli.default_chain.parse()?,
        request_timeout: cli.timeout_secs.map(Duration::from_secs),
        ..DashboardConfig::default()
    };

    if let Some(url) = &cli.price_url {
        config = config.with_price_url(url.as_str());
    }
    for entry in &cli.rpc_overrides {
        let (chain, url) = parse_rpc_override(entry)?;
        config = config.with_rpc_url(chain, url);
    }

    Ok(config)
}

fn wallet_refs(cli: &Cli, default_chain: Chain) -> Result<Vec<WalletRef>> {
    let parsed = cli
        .wallets
        .iter()
        .map(|arg| WalletRef::parse(arg, default_chain))
        .collect::<Result<Vec<_>>>()?;

    if !cli.all_chains {
        return Ok(parsed);
    }

    let mut addresses: Vec<String> = Vec::new();
    for wallet in parsed {
        if !addresses.contains(&wallet.address) {
            addresses.push(wallet.address);
        }
    }

    Ok(addresses
        .iter()
        .flat_map(|address| {
            Chain::ALL
                .iter()
                .map(move |chain| WalletRef::new(address.as_str(), chain.id()))
        })
        .collect())
}
