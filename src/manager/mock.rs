//! In-memory [`GeminiClient`] for manager tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use rust_decimal::Decimal;
use serde_json::json;

use crate::error::{ExchangeError, GeminiError, error_codes};
use crate::rest::GeminiClient;
use crate::rest::private::{
    CancelAllResponse, CancelDetails, CurrencyBalance, NewOrderRequest, Order, WithdrawRequest,
    Withdrawal,
};
use crate::rest::public::{OrderBook, OrderBookRequest, TickerStatus, Trade, TradesRequest};
use crate::types::{BuySell, Currency, Symbol};

pub(crate) fn order(id: u64, symbol: Symbol, side: BuySell, live: bool) -> Order {
    order_on(id, symbol.as_str(), side, live)
}

/// Order on any pair, including ones [`Symbol`] does not list.
pub(crate) fn order_on(id: u64, symbol: &str, side: BuySell, live: bool) -> Order {
    serde_json::from_value(json!({
        "order_id": id.to_string(),
        "symbol": symbol,
        "side": side,
        "type": "exchange limit",
        "price": "100.00",
        "original_amount": "1",
        "is_live": live,
        "is_cancelled": !live,
    }))
    .unwrap()
}

#[derive(Default)]
pub(crate) struct MockClient {
    next_id: AtomicU64,
    orders: Mutex<BTreeMap<u64, Order>>,
    pub(crate) calls: AtomicUsize,
    pub(crate) last_trades_request: Mutex<Option<TradesRequest>>,
}

impl MockClient {
    pub(crate) fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1000),
            ..Default::default()
        }
    }

    /// Seed an order that was placed outside the manager.
    pub(crate) fn seed(&self, order: Order) {
        let id = order.order_id.unwrap();
        self.orders.lock().unwrap().insert(id, order);
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn cancel_everything(&self) -> CancelAllResponse {
        let mut orders = self.orders.lock().unwrap();
        let mut cancelled = Vec::new();
        for (id, order) in orders.iter_mut() {
            if order.is_open() {
                order.is_live = Some(false);
                order.is_cancelled = Some(true);
                cancelled.push(*id);
            }
        }
        CancelAllResponse {
            result: "ok".to_string(),
            details: CancelDetails {
                cancelled_orders: cancelled,
                cancel_rejects: Vec::new(),
            },
        }
    }
}

impl GeminiClient for MockClient {
    async fn get_symbols(&self) -> Result<Vec<String>, GeminiError> {
        self.hit();
        Ok(Symbol::ALL.iter().map(|s| s.to_string()).collect())
    }

    async fn get_ticker(&self, _symbol: Symbol) -> Result<TickerStatus, GeminiError> {
        self.hit();
        Ok(serde_json::from_value(json!({"bid": "99.5", "ask": "100.5", "last": "100.0"})).unwrap())
    }

    async fn get_trades(
        &self,
        _symbol: Symbol,
        request: &TradesRequest,
    ) -> Result<Vec<Trade>, GeminiError> {
        self.hit();
        *self.last_trades_request.lock().unwrap() = Some(request.clone());
        Ok(serde_json::from_value(json!([{
            "timestamp": 1547146811, "timestampms": 1547146811357_u64, "tid": 1,
            "price": "3610.85", "amount": "0.5", "exchange": "gemini", "type": "buy"
        }]))
        .unwrap())
    }

    async fn get_order_book(
        &self,
        _symbol: Symbol,
        request: &OrderBookRequest,
    ) -> Result<OrderBook, GeminiError> {
        self.hit();
        let bids = (0..request.limit_bids.min(2))
            .map(|i| json!({"price": format!("{}", 99 - i), "amount": "1"}))
            .collect::<Vec<_>>();
        let asks = (0..request.limit_asks.min(2))
            .map(|i| json!({"price": format!("{}", 101 + i), "amount": "1"}))
            .collect::<Vec<_>>();
        Ok(serde_json::from_value(json!({"bids": bids, "asks": asks})).unwrap())
    }

    async fn new_order(&self, request: &NewOrderRequest) -> Result<Order, GeminiError> {
        self.hit();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut placed = order(id, request.symbol, request.side, true);
        placed.price = Some(request.price);
        placed.original_amount = Some(request.amount);
        placed.client_order_id = request.client_order_id.clone();
        self.orders.lock().unwrap().insert(id, placed.clone());
        Ok(placed)
    }

    async fn cancel_order(&self, order_id: u64) -> Result<Order, GeminiError> {
        self.hit();
        let mut orders = self.orders.lock().unwrap();
        let order = orders.get_mut(&order_id).ok_or_else(|| {
            GeminiError::Exchange(ExchangeError::new(
                error_codes::ORDER_NOT_FOUND,
                format!("Order {order_id} not found"),
            ))
        })?;
        order.is_live = Some(false);
        order.is_cancelled = Some(true);
        Ok(order.clone())
    }

    async fn cancel_session_orders(&self) -> Result<CancelAllResponse, GeminiError> {
        self.hit();
        Ok(self.cancel_everything())
    }

    async fn cancel_all_orders(&self) -> Result<CancelAllResponse, GeminiError> {
        self.hit();
        Ok(self.cancel_everything())
    }

    async fn order_status(&self, order_id: u64) -> Result<Order, GeminiError> {
        self.hit();
        self.orders
            .lock()
            .unwrap()
            .get(&order_id)
            .cloned()
            .ok_or_else(|| {
                GeminiError::Exchange(ExchangeError::new(
                    error_codes::ORDER_NOT_FOUND,
                    format!("Order {order_id} not found"),
                ))
            })
    }

    async fn active_orders(&self) -> Result<Vec<Order>, GeminiError> {
        self.hit();
        Ok(self
            .orders
            .lock()
            .unwrap()
            .values()
            .filter(|o| o.is_open())
            .cloned()
            .collect())
    }

    async fn get_balances(&self) -> Result<Vec<CurrencyBalance>, GeminiError> {
        self.hit();
        Ok(serde_json::from_value(json!([
            {"type": "exchange", "currency": "BTC", "amount": "2.5", "available": "2.0", "availableForWithdrawal": "2.0"},
            {"type": "exchange", "currency": "USD", "amount": "1000", "available": "900", "availableForWithdrawal": "900"}
        ]))
        .unwrap())
    }

    async fn withdraw(
        &self,
        _currency: Currency,
        request: &WithdrawRequest,
    ) -> Result<Withdrawal, GeminiError> {
        self.hit();
        if request.amount <= Decimal::ZERO {
            return Err(GeminiError::Exchange(ExchangeError::new(
                error_codes::INVALID_QUANTITY,
                "Invalid amount",
            )));
        }
        Ok(serde_json::from_value(json!({
            "address": request.address,
            "amount": request.amount.to_string(),
            "txHash": "abc123",
        }))
        .unwrap())
    }
}
