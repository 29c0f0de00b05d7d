use std::sync::Arc;

use gemini_api_client::auth::EnvCredentials;
use gemini_api_client::rest::public::OrderBookRequest;
use gemini_api_client::rest::{Environment, RestClient};
use gemini_api_client::types::Symbol;

fn live_tests_enabled() -> bool {
    std::env::var("GEMINI_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_sandbox_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = RestClient::builder()
        .environment(Environment::Sandbox)
        .build();

    let symbols = client.get_symbols().await?;
    assert!(symbols.iter().any(|s| s == "btcusd"));

    let ticker = client.get_ticker(Symbol::BtcUsd).await?;
    assert!(ticker.ask >= ticker.bid);

    let book = client
        .get_order_book(Symbol::BtcUsd, &OrderBookRequest::depth(5))
        .await?;
    assert!(book.bids.len() <= 5);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_sandbox_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = RestClient::builder()
        .environment(Environment::Sandbox)
        .credentials(Arc::new(credentials))
        .build();

    let _balances = client.get_balances().await?;
    let _orders = client.active_orders().await?;

    Ok(())
}
