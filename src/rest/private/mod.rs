//! Private REST API endpoints (authentication required).
//!
//! These endpoints require a credentials provider to be configured on the client.
//! Every call is signed with a fresh nonce and sent as a POST with an empty body.

mod types;

pub use types::*;

use crate::error::GeminiError;
use crate::rest::RestClient;
use crate::rest::client::Empty;
use crate::rest::endpoints::{private, with_segment};
use crate::types::Currency;

impl RestClient {
    /// Place a limit order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use gemini_api_client::auth::StaticCredentials;
    /// use gemini_api_client::rest::RestClient;
    /// use gemini_api_client::rest::private::NewOrderRequest;
    /// use gemini_api_client::types::Symbol;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = RestClient::builder().credentials(credentials).build();
    ///
    ///     let request = NewOrderRequest::buy(Symbol::BtcUsd, "0.01".parse()?, "9000.00".parse()?);
    ///     let order = client.new_order(&request).await?;
    ///     println!("{order}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn new_order(&self, request: &NewOrderRequest) -> Result<Order, GeminiError> {
        self.private_post(private::NEW_ORDER, request).await
    }

    /// Cancel one order.
    pub async fn cancel_order(&self, order_id: u64) -> Result<Order, GeminiError> {
        self.private_post(private::CANCEL_ORDER, &OrderIdRequest { order_id })
            .await
    }

    /// Cancel every order placed during this API session.
    pub async fn cancel_session_orders(&self) -> Result<CancelAllResponse, GeminiError> {
        self.private_post(private::CANCEL_SESSION, &Empty {}).await
    }

    /// Cancel every open order on the account.
    pub async fn cancel_all_orders(&self) -> Result<CancelAllResponse, GeminiError> {
        self.private_post(private::CANCEL_ALL, &Empty {}).await
    }

    /// Get the status of one order.
    pub async fn order_status(&self, order_id: u64) -> Result<Order, GeminiError> {
        self.private_post(private::ORDER_STATUS, &OrderIdRequest { order_id })
            .await
    }

    /// Get all active orders.
    pub async fn active_orders(&self) -> Result<Vec<Order>, GeminiError> {
        self.private_post(private::ACTIVE_ORDERS, &Empty {}).await
    }

    /// Get balances for every currency held.
    pub async fn get_balances(&self) -> Result<Vec<CurrencyBalance>, GeminiError> {
        self.private_post(private::BALANCES, &Empty {}).await
    }

    /// Withdraw crypto to an address already approved on the account.
    pub async fn withdraw(
        &self,
        currency: Currency,
        request: &WithdrawRequest,
    ) -> Result<Withdrawal, GeminiError> {
        self.private_post(&with_segment(private::WITHDRAW, currency), request)
            .await
    }
}
