//! Example: Fetching public market data from the Gemini sandbox.
//!
//! This example demonstrates how to fetch publicly available market data
//! without authentication.
//!
//! Run with: cargo run --example public_data

use gemini_api_client::manager::TickerTracker;
use gemini_api_client::rest::RestClient;
use gemini_api_client::rest::public::{OrderBookRequest, TradesRequest};
use gemini_api_client::types::Symbol;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Create a client for public endpoints (no credentials needed)
    let client = RestClient::new();

    println!("=== Symbols ===");
    let symbols = client.get_symbols().await?;
    println!("{}", symbols.join(", "));

    println!("\n=== Ticker (BTC/USD) ===");
    let ticker = client.get_ticker(Symbol::BtcUsd).await?;
    println!("{ticker}");
    println!("Spread: {}", ticker.spread());

    println!("\n=== Recent Trades (ETH/USD) ===");
    let trades = client
        .get_trades(Symbol::EthUsd, &TradesRequest::default().limit(5))
        .await?;
    for trade in &trades {
        println!("{trade}");
    }

    println!("\n=== Order Book (BTC/USD) ===");
    let book = client
        .get_order_book(Symbol::BtcUsd, &OrderBookRequest::depth(5))
        .await?;
    println!("Bids:");
    for bid in &book.bids {
        println!("  {bid}");
    }
    println!("Asks:");
    for ask in &book.asks {
        println!("  {ask}");
    }

    // Trackers remember the last response and when it was requested
    println!("\n=== Ticker Tracker ===");
    let tracker = TickerTracker::new(client, Symbol::EthBtc);
    tracker.update().await?;
    if let Some(snapshot) = tracker.last().await {
        println!("{} at {} ms", snapshot.value, snapshot.requested_at_ms);
    }

    Ok(())
}
