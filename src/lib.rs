//! # Gemini Client
//!
//! An async Rust client library for the Gemini exchange REST API.
//!
//! ## Features
//!
//! - Public market data: symbols, ticker, recent trades, order book
//! - Signed private endpoints: limit orders, cancellation, order status, balances, withdrawals
//! - Pluggable credential sources and nonce strategies
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemini_api_client::rest::RestClient;
//! use gemini_api_client::types::Symbol;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new();
//!     let ticker = client.get_ticker(Symbol::BtcUsd).await?;
//!     println!("BTC/USD: {ticker}");
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Private requests carry no body. The parameters, the versioned request path
//! and a nonce are serialized to JSON, base64 encoded and signed with
//! HMAC-SHA384; payload, signature and API key travel in headers.
//! See [`auth`] for the signing primitives.

pub mod auth;
pub mod error;
pub mod manager;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ExchangeError, GeminiError};
pub use types::common::{BuySell, Currency, Symbol};

/// Result type alias using GeminiError
pub type Result<T> = std::result::Result<T, GeminiError>;
