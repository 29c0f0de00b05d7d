//! Trackers that remember the last market data response for a symbol.

use tokio::sync::Mutex;

use crate::auth::timestamp_ms;
use crate::error::GeminiError;
use crate::rest::GeminiClient;
use crate::rest::public::{OrderBook, OrderBookRequest, TickerStatus, Trade, TradesRequest};
use crate::types::Symbol;

/// A response together with the time its request was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// The decoded response.
    pub value: T,
    /// Request time in milliseconds since the epoch.
    pub requested_at_ms: u64,
}

async fn fetch<T, F>(slot: &Mutex<Option<Snapshot<T>>>, request: F) -> Result<T, GeminiError>
where
    T: Clone,
    F: Future<Output = Result<T, GeminiError>>,
{
    let requested_at_ms = timestamp_ms();
    let value = request.await?;
    *slot.lock().await = Some(Snapshot {
        value: value.clone(),
        requested_at_ms,
    });
    Ok(value)
}

/// Latest ticker for one symbol.
pub struct TickerTracker<C> {
    client: C,
    symbol: Symbol,
    last: Mutex<Option<Snapshot<TickerStatus>>>,
}

impl<C: GeminiClient> TickerTracker<C> {
    /// Create a tracker with no data.
    pub fn new(client: C, symbol: Symbol) -> Self {
        Self {
            client,
            symbol,
            last: Mutex::new(None),
        }
    }

    /// The tracked symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Fetch the ticker and remember it.
    pub async fn update(&self) -> Result<TickerStatus, GeminiError> {
        fetch(&self.last, self.client.get_ticker(self.symbol)).await
    }

    /// Last fetched ticker.
    pub async fn last(&self) -> Option<Snapshot<TickerStatus>> {
        self.last.lock().await.clone()
    }
}

/// Recent trades for one symbol.
pub struct TradeHistoryTracker<C> {
    client: C,
    symbol: Symbol,
    request: TradesRequest,
    last: Mutex<Option<Snapshot<Vec<Trade>>>>,
}

impl<C: GeminiClient> TradeHistoryTracker<C> {
    /// Create a tracker using the default limit of 50 trades without breaks.
    pub fn new(client: C, symbol: Symbol) -> Self {
        Self::with_request(client, symbol, TradesRequest::default())
    }

    /// Create a tracker with custom request parameters.
    pub fn with_request(client: C, symbol: Symbol, request: TradesRequest) -> Self {
        Self {
            client,
            symbol,
            request,
            last: Mutex::new(None),
        }
    }

    /// The tracked symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Fetch recent trades, optionally only those after `since`.
    pub async fn update(&self, since: Option<i64>) -> Result<Vec<Trade>, GeminiError> {
        let request = match since {
            Some(timestamp) => self.request.clone().since(timestamp),
            None => self.request.clone(),
        };
        fetch(&self.last, self.client.get_trades(self.symbol, &request)).await
    }

    /// Last fetched trades.
    pub async fn last(&self) -> Option<Snapshot<Vec<Trade>>> {
        self.last.lock().await.clone()
    }

    /// Last fetched trades, one per line, or `Not available`.
    ///
    /// Waits for a running [`update`](Self::update) to store its result.
    pub async fn render(&self) -> String {
        render_trades(self.last.lock().await.as_ref())
    }
}

fn render_trades(last: Option<&Snapshot<Vec<Trade>>>) -> String {
    match last {
        Some(snapshot) if !snapshot.value.is_empty() => snapshot
            .value
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => "Not available".to_string(),
    }
}

/// Renders like [`TradeHistoryTracker::render`] without waiting.
///
/// While an update holds the state this prints `Not available`.
impl<C> std::fmt::Display for TradeHistoryTracker<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.last.try_lock() {
            Ok(guard) => f.write_str(&render_trades(guard.as_ref())),
            Err(_) => f.write_str("Not available"),
        }
    }
}

/// Order book for one symbol.
pub struct OrderBookTracker<C> {
    client: C,
    symbol: Symbol,
    request: OrderBookRequest,
    last: Mutex<Option<Snapshot<OrderBook>>>,
}

impl<C: GeminiClient> OrderBookTracker<C> {
    /// Create a tracker fetching 50 levels per side.
    pub fn new(client: C, symbol: Symbol) -> Self {
        Self::with_request(client, symbol, OrderBookRequest::default())
    }

    /// Create a tracker with custom depth.
    pub fn with_request(client: C, symbol: Symbol, request: OrderBookRequest) -> Self {
        Self {
            client,
            symbol,
            request,
            last: Mutex::new(None),
        }
    }

    /// The tracked symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Fetch the order book and remember it.
    pub async fn update(&self) -> Result<OrderBook, GeminiError> {
        fetch(
            &self.last,
            self.client.get_order_book(self.symbol, &self.request),
        )
        .await
    }

    /// Last fetched order book.
    pub async fn last(&self) -> Option<Snapshot<OrderBook>> {
        self.last.lock().await.clone()
    }
}
