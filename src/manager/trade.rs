//! Order placement and tracking for a single symbol.

use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::error::GeminiError;
use crate::rest::GeminiClient;
use crate::rest::private::{CancelAllResponse, NewOrderRequest, Order};
use crate::types::{BuySell, Symbol};

/// Orders of one side, keyed by order id in the order they were first seen.
#[derive(Debug, Clone, Default)]
struct OrderSet {
    orders: Vec<Order>,
}

impl OrderSet {
    /// Insert or replace by id. A replaced order keeps its position.
    fn upsert(&mut self, id: u64, order: Order) {
        match self.orders.iter_mut().find(|o| o.order_id == Some(id)) {
            Some(existing) => *existing = order,
            None => self.orders.push(order),
        }
    }

    fn clear(&mut self) {
        self.orders.clear();
    }
}

#[derive(Debug, Default)]
struct Tracked {
    buys: OrderSet,
    sells: OrderSet,
}

impl Tracked {
    fn side_mut(&mut self, side: BuySell) -> &mut OrderSet {
        match side {
            BuySell::Buy => &mut self.buys,
            BuySell::Sell => &mut self.sells,
        }
    }
}

/// Places limit orders for one symbol and remembers what it has seen.
///
/// Every order returned by the exchange for this symbol is recorded under
/// its side, replacing any earlier snapshot with the same id. Orders for
/// other symbols pass through untracked.
///
/// # Example
///
/// ```rust,no_run
/// use gemini_api_client::manager::TradeManager;
/// use gemini_api_client::rest::RestClient;
/// use gemini_api_client::types::Symbol;
///
/// # async fn run(client: RestClient) -> Result<(), gemini_api_client::GeminiError> {
/// let manager = TradeManager::new(client, Symbol::BtcUsd);
/// let order = manager
///     .place_buy("0.01".parse().unwrap(), "9000".parse().unwrap())
///     .await?;
/// println!("{order}");
/// println!("{} buy orders tracked", manager.buy_orders().await.len());
/// # Ok(())
/// # }
/// ```
pub struct TradeManager<C> {
    client: C,
    symbol: Symbol,
    tracked: Mutex<Tracked>,
}

impl<C: GeminiClient> TradeManager<C> {
    /// Create a manager for `symbol`.
    pub fn new(client: C, symbol: Symbol) -> Self {
        Self {
            client,
            symbol,
            tracked: Mutex::new(Tracked::default()),
        }
    }

    /// The managed symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Place a limit buy.
    pub async fn place_buy(&self, amount: Decimal, price: Decimal) -> Result<Order, GeminiError> {
        self.place(NewOrderRequest::buy(self.symbol, amount, price))
            .await
    }

    /// Place a limit sell.
    pub async fn place_sell(&self, amount: Decimal, price: Decimal) -> Result<Order, GeminiError> {
        self.place(NewOrderRequest::sell(self.symbol, amount, price))
            .await
    }

    /// Place a prepared order request.
    ///
    /// The order is tracked under the requested side. A request for another
    /// symbol is rejected before anything is sent.
    pub async fn place(&self, request: NewOrderRequest) -> Result<Order, GeminiError> {
        if request.symbol != self.symbol {
            return Err(GeminiError::InvalidParameters(format!(
                "order for {} sent to the {} manager",
                request.symbol, self.symbol
            )));
        }

        let order = self.client.new_order(&request).await?;
        match order.order_id {
            Some(id) => {
                let mut tracked = self.tracked.lock().await;
                tracked.side_mut(request.side).upsert(id, order.clone());
            }
            None => tracing::warn!(symbol = %self.symbol, "placed order has no id; not tracked"),
        }
        Ok(order)
    }

    /// Cancel one order and record its new state.
    pub async fn cancel(&self, order_id: u64) -> Result<Order, GeminiError> {
        let order = self.client.cancel_order(order_id).await?;
        self.record(&order).await;
        Ok(order)
    }

    /// Cancel every order of this session and forget all tracked orders.
    pub async fn cancel_session(&self) -> Result<CancelAllResponse, GeminiError> {
        let response = self.client.cancel_session_orders().await?;
        self.clear().await;
        Ok(response)
    }

    /// Cancel every order on the account and forget all tracked orders.
    pub async fn cancel_all(&self) -> Result<CancelAllResponse, GeminiError> {
        let response = self.client.cancel_all_orders().await?;
        self.clear().await;
        Ok(response)
    }

    /// Refresh one order.
    pub async fn order_status(&self, order_id: u64) -> Result<Order, GeminiError> {
        let order = self.client.order_status(order_id).await?;
        self.record(&order).await;
        Ok(order)
    }

    /// Fetch all active orders on the account.
    ///
    /// Every order is returned; only those for this symbol are tracked.
    pub async fn active_orders(&self) -> Result<Vec<Order>, GeminiError> {
        let orders = self.client.active_orders().await?;
        for order in &orders {
            self.record(order).await;
        }
        Ok(orders)
    }

    /// Tracked buy orders, oldest first.
    pub async fn buy_orders(&self) -> Vec<Order> {
        self.tracked.lock().await.buys.orders.clone()
    }

    /// Tracked sell orders, oldest first.
    pub async fn sell_orders(&self) -> Vec<Order> {
        self.tracked.lock().await.sells.orders.clone()
    }

    async fn record(&self, order: &Order) {
        if !order.is_for(self.symbol) {
            return;
        }
        let (Some(id), Some(side)) = (order.order_id, order.side) else {
            tracing::warn!(
                symbol = %self.symbol,
                order_id = ?order.order_id,
                "order without id or side; not tracked"
            );
            return;
        };
        self.tracked
            .lock()
            .await
            .side_mut(side)
            .upsert(id, order.clone());
    }

    async fn clear(&self) {
        let mut tracked = self.tracked.lock().await;
        tracked.buys.clear();
        tracked.sells.clear();
    }
}

impl<C> std::fmt::Debug for TradeManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeManager")
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}
