//! Test doubles and a minimal local HTTP responder

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wallet_dashboard::{BalanceLookup, LookupError, PriceProvider};

pub const ONE_ETH: u128 = 1_000_000_000_000_000_000;

/// In-memory balances; pairs without an entry fail
#[derive(Default)]
pub struct MockBalances {
    balances: HashMap<(String, u64), u128>,
    delays: HashMap<(String, u64), Duration>,
    pub calls: AtomicUsize,
}

impl MockBalances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: &str, chain_id: u64, wei: u128) -> Self {
        self.balances.insert((address.to_string(), chain_id), wei);
        self
    }

    pub fn delayed(mut self, address: &str, chain_id: u64, delay: Duration) -> Self {
        self.delays.insert((address.to_string(), chain_id), delay);
        self
    }
}

#[async_trait]
impl BalanceLookup for MockBalances {
    async fn balance_of(&self, address: &str, chain_id: u64) -> Result<u128, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = (address.to_string(), chain_id);
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        self.balances
            .get(&key)
            .copied()
            .ok_or_else(|| LookupError::Unavailable(format!("{} on {}", address, chain_id)))
    }
}

/// Fixed prices per chain, 1.0 for anything else
pub struct FixedPrices(pub HashMap<u64, f64>);

impl FixedPrices {
    pub fn new(prices: &[(u64, f64)]) -> Self {
        Self(prices.iter().copied().collect())
    }
}

#[async_trait]
impl PriceProvider for FixedPrices {
    async fn usd_price(&self, chain_id: u64) -> f64 {
        self.0.get(&chain_id).copied().unwrap_or(1.0)
    }
}

/// Local HTTP server answering every request with the same canned response
pub struct CannedServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl CannedServer {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(respond(socket, status, body));
            }
        });

        Self { url, hits }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn respond(mut socket: TcpStream, status: u16, body: &'static str) {
    if read_request(&mut socket).await.is_err() {
        return;
    }
    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Read one request: headers, then as many body bytes as Content-Length says
async fn read_request(socket: &mut TcpStream) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    Ok(())
}
