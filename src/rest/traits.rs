//! Trait definition for the Gemini REST API client.
//!
//! This module provides the `GeminiClient` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Stateful helpers (see [`crate::manager`]) that work with any client
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_api_client::rest::GeminiClient;
//! use gemini_api_client::types::Symbol;
//!
//! async fn show_last<C: GeminiClient>(client: &C) -> Result<(), gemini_api_client::GeminiError> {
//!     let ticker = client.get_ticker(Symbol::BtcUsd).await?;
//!     println!("Last: {}", ticker.last);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::GeminiError;
use crate::rest::private::{
    CancelAllResponse, CurrencyBalance, NewOrderRequest, Order, WithdrawRequest, Withdrawal,
};
use crate::rest::public::{OrderBook, OrderBookRequest, TickerStatus, Trade, TradesRequest};
use crate::types::{Currency, Symbol};

/// Trait defining all Gemini REST API operations.
///
/// All methods are async and return `Result<T, GeminiError>`.
pub trait GeminiClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// List tradable symbols.
    fn get_symbols(&self) -> impl Future<Output = Result<Vec<String>, GeminiError>> + Send;

    /// Get the ticker for a symbol.
    fn get_ticker(
        &self,
        symbol: Symbol,
    ) -> impl Future<Output = Result<TickerStatus, GeminiError>> + Send;

    /// Get recent trades for a symbol.
    fn get_trades(
        &self,
        symbol: Symbol,
        request: &TradesRequest,
    ) -> impl Future<Output = Result<Vec<Trade>, GeminiError>> + Send;

    /// Get the order book for a symbol.
    fn get_order_book(
        &self,
        symbol: Symbol,
        request: &OrderBookRequest,
    ) -> impl Future<Output = Result<OrderBook, GeminiError>> + Send;

    // ========== Private Endpoints - Orders ==========

    /// Place a limit order.
    fn new_order(
        &self,
        request: &NewOrderRequest,
    ) -> impl Future<Output = Result<Order, GeminiError>> + Send;

    /// Cancel one order.
    fn cancel_order(&self, order_id: u64)
    -> impl Future<Output = Result<Order, GeminiError>> + Send;

    /// Cancel all orders of this session.
    fn cancel_session_orders(
        &self,
    ) -> impl Future<Output = Result<CancelAllResponse, GeminiError>> + Send;

    /// Cancel all orders of the account.
    fn cancel_all_orders(
        &self,
    ) -> impl Future<Output = Result<CancelAllResponse, GeminiError>> + Send;

    /// Get the status of one order.
    fn order_status(&self, order_id: u64)
    -> impl Future<Output = Result<Order, GeminiError>> + Send;

    /// Get all active orders.
    fn active_orders(&self) -> impl Future<Output = Result<Vec<Order>, GeminiError>> + Send;

    // ========== Private Endpoints - Funds ==========

    /// Get balances.
    fn get_balances(
        &self,
    ) -> impl Future<Output = Result<Vec<CurrencyBalance>, GeminiError>> + Send;

    /// Withdraw to an approved address.
    fn withdraw(
        &self,
        currency: Currency,
        request: &WithdrawRequest,
    ) -> impl Future<Output = Result<Withdrawal, GeminiError>> + Send;
}
