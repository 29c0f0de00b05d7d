//! Example: Signed trading and funds endpoints on the Gemini sandbox.
//!
//! Reads `GEMINI_API_KEY` and `GEMINI_API_SECRET` (a `.env` file works too).
//!
//! Run with: cargo run --example private_trading

use std::sync::Arc;

use gemini_api_client::auth::EnvCredentials;
use gemini_api_client::manager::{FundManager, TradeManager};
use gemini_api_client::rest::RestClient;
use gemini_api_client::types::Symbol;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set GEMINI_API_KEY and GEMINI_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let client = RestClient::builder().credentials(credentials).build();

    println!("=== Balances ===");
    let funds = FundManager::new(client.clone());
    for balance in funds.refresh_balances().await? {
        println!("{balance}");
    }

    // Place a buy far below the market so it rests on the book, then cancel it.
    println!("\n=== Trading (BTC/USD) ===");
    let trades = TradeManager::new(client, Symbol::BtcUsd);
    let order = trades
        .place_buy(Decimal::new(1, 3), Decimal::new(100, 0))
        .await?;
    println!("{order}");

    for order in trades.active_orders().await? {
        println!("Active: {order}");
    }

    if let Some(order_id) = order.order_id {
        let cancelled = trades.cancel(order_id).await?;
        println!("Cancelled: {cancelled}");
    }

    let response = trades.cancel_session().await?;
    println!(
        "Session cancel: {} cancelled, {} rejected",
        response.details.cancelled_orders.len(),
        response.details.cancel_rejects.len()
    );

    Ok(())
}
