//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::GeminiError;
use crate::rest::RestClient;
use crate::rest::client::Empty;
use crate::rest::endpoints::{public, with_segment};
use crate::types::Symbol;

impl RestClient {
    /// List the symbols tradable on the exchange.
    ///
    /// Symbols are returned as reported; [`Symbol`] only covers the pairs this
    /// client knows how to trade.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gemini_api_client::rest::RestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = RestClient::new();
    ///     let symbols = client.get_symbols().await?;
    ///     println!("{} symbols", symbols.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_symbols(&self) -> Result<Vec<String>, GeminiError> {
        self.public_get(public::SYMBOLS, &Empty {}).await
    }

    /// Get the current ticker for a symbol.
    pub async fn get_ticker(&self, symbol: Symbol) -> Result<TickerStatus, GeminiError> {
        self.public_get(&with_segment(public::PUBTICKER, symbol), &Empty {})
            .await
    }

    /// Get recent trades for a symbol.
    ///
    /// # Arguments
    ///
    /// * `request` - Limit, broken-trade flag and optional start time.
    pub async fn get_trades(
        &self,
        symbol: Symbol,
        request: &TradesRequest,
    ) -> Result<Vec<Trade>, GeminiError> {
        self.public_get(&with_segment(public::TRADES, symbol), request)
            .await
    }

    /// Get the order book for a symbol.
    pub async fn get_order_book(
        &self,
        symbol: Symbol,
        request: &OrderBookRequest,
    ) -> Result<OrderBook, GeminiError> {
        self.public_get(&with_segment(public::BOOK, symbol), request)
            .await
    }
}
