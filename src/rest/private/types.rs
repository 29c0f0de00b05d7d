//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::types::serde_helpers::empty_string_as_none;
use crate::types::{BuySell, OrderType, Symbol, format_unix_seconds};

/// Request to place a limit order.
///
/// Always sent as `"type": "exchange limit"` with no execution options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrderRequest {
    /// Trading pair.
    pub symbol: Symbol,
    /// Quantity to buy or sell.
    pub amount: Decimal,
    /// Limit price.
    pub price: Decimal,
    /// Order side.
    pub side: BuySell,
    /// Client-assigned id for later lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(rename = "type")]
    order_type: OrderType,
    options: Vec<String>,
}

impl NewOrderRequest {
    /// Create a limit order request.
    pub fn limit(symbol: Symbol, side: BuySell, amount: Decimal, price: Decimal) -> Self {
        Self {
            symbol,
            amount,
            price,
            side,
            client_order_id: None,
            order_type: OrderType::ExchangeLimit,
            options: Vec::new(),
        }
    }

    /// Limit buy.
    pub fn buy(symbol: Symbol, amount: Decimal, price: Decimal) -> Self {
        Self::limit(symbol, BuySell::Buy, amount, price)
    }

    /// Limit sell.
    pub fn sell(symbol: Symbol, amount: Decimal, price: Decimal) -> Self {
        Self::limit(symbol, BuySell::Sell, amount, price)
    }

    /// Attach a client order id.
    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// The order type sent to the exchange.
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }
}

/// Request identifying a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderIdRequest {
    /// Exchange order id.
    pub order_id: u64,
}

/// Order state as reported by the exchange.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    /// Exchange order id.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub order_id: Option<u64>,
    /// Client-assigned id, if one was given.
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub client_order_id: Option<String>,
    /// Trading pair as reported; may be a pair [`Symbol`] does not list.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange name.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Limit price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Average fill price.
    #[serde(default)]
    pub avg_execution_price: Option<Decimal>,
    /// Order side.
    #[serde(default)]
    pub side: Option<BuySell>,
    /// Order type as reported; orders placed elsewhere may not be limit orders.
    #[serde(rename = "type", default)]
    pub order_type: Option<String>,
    /// Execution options.
    #[serde(default)]
    pub options: Vec<String>,
    /// Creation time in seconds.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub timestamp: Option<i64>,
    /// Creation time in milliseconds.
    #[serde(rename = "timestampms")]
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub timestamp_ms: Option<u64>,
    /// Whether the order is still on the book.
    #[serde(default)]
    pub is_live: Option<bool>,
    /// Whether the order was cancelled.
    #[serde(default)]
    pub is_cancelled: Option<bool>,
    /// Filled quantity.
    #[serde(default)]
    pub executed_amount: Option<Decimal>,
    /// Unfilled quantity.
    #[serde(default)]
    pub remaining_amount: Option<Decimal>,
    /// Quantity at placement.
    #[serde(default)]
    pub original_amount: Option<Decimal>,
}

impl Order {
    /// Whether the order is on `symbol`.
    pub fn is_for(&self, symbol: Symbol) -> bool {
        self.symbol
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(symbol.as_str()))
    }

    /// Whether the order is live and not cancelled.
    pub fn is_open(&self) -> bool {
        self.is_live == Some(true) && self.is_cancelled != Some(true)
    }
}

fn or_dash<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {} ({})\n\tAmount: {}\n\tPrice: {}\n\tSide: {}\n\tType: {}\n\tSubmitted: {}\n\tLive: {}",
            or_dash(&self.client_order_id),
            or_dash(&self.order_id),
            or_dash(&self.original_amount),
            or_dash(&self.price),
            or_dash(&self.side),
            or_dash(&self.order_type),
            self.timestamp
                .map_or_else(|| "-".to_string(), format_unix_seconds),
            or_dash(&self.is_live),
        )
    }
}

/// Response of the cancel-session and cancel-all endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CancelAllResponse {
    /// `"ok"` on success.
    pub result: String,
    /// Which orders were cancelled.
    #[serde(default)]
    pub details: CancelDetails,
}

/// Orders affected by a bulk cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelDetails {
    /// Ids of cancelled orders.
    #[serde(default)]
    pub cancelled_orders: Vec<u64>,
    /// Ids of orders that could not be cancelled.
    #[serde(default)]
    pub cancel_rejects: Vec<u64>,
}

/// Balance of one currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrencyBalance {
    /// Currency code as reported (e.g. "BTC").
    pub currency: String,
    /// Total balance.
    pub amount: Decimal,
    /// Balance not held by open orders.
    pub available: Decimal,
    /// Balance that can be withdrawn now.
    #[serde(rename = "availableForWithdrawal")]
    pub available_for_withdrawal: Decimal,
    /// Account type (usually "exchange").
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
}

impl std::fmt::Display for CurrencyBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Currency {}\n\tAmount: {}\n\tAvailable: {}\n\tWithdrawable: {}",
            self.currency.to_uppercase(),
            self.amount,
            self.available,
            self.available_for_withdrawal
        )
    }
}

/// Request to withdraw crypto to a pre-approved address.
///
/// The address is not validated locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawRequest {
    /// Destination address, whitelisted on the account.
    pub address: String,
    /// Amount to withdraw.
    pub amount: Decimal,
}

impl WithdrawRequest {
    /// Create a withdrawal request.
    pub fn new(address: impl Into<String>, amount: Decimal) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// Result of a withdrawal request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    /// Destination address.
    #[serde(default)]
    pub address: Option<String>,
    /// Amount withdrawn.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// On-chain transaction hash, once broadcast.
    #[serde(default)]
    pub tx_hash: Option<String>,
    /// Exchange-side withdrawal id.
    #[serde(default)]
    pub withdrawal_id: Option<String>,
    /// Informational message.
    #[serde(default)]
    pub message: Option<String>,
}
