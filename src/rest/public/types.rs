//! Types for public REST API endpoints.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::types::format_unix_seconds;
use crate::types::serde_helpers::bool_flag;

/// Ticker snapshot for one symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TickerStatus {
    /// Highest bid.
    pub bid: Decimal,
    /// Lowest ask.
    pub ask: Decimal,
    /// Price of the last executed trade.
    pub last: Decimal,
    /// Trailing 24h volume, if reported.
    #[serde(default)]
    pub volume: Option<Volume>,
}

impl TickerStatus {
    /// Difference between ask and bid.
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}

impl std::fmt::Display for TickerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bid = {}, Ask = {}, Last price = {}",
            self.bid, self.ask, self.last
        )?;
        if let Some(volume) = &self.volume {
            write!(f, ", {volume}")?;
        }
        Ok(())
    }
}

/// Trailing volume keyed by currency code.
///
/// On the wire this is a flat object mixing currency amounts with a
/// millisecond `timestamp`: `{"BTC": "2515.14", "USD": "2408.58", "timestamp": 1483018200000}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "HashMap<String, Value>")]
pub struct Volume {
    /// Volume per currency code, as reported (e.g. "BTC").
    pub amounts: BTreeMap<String, Decimal>,
    /// End of the volume window, in milliseconds.
    pub timestamp_ms: Option<u64>,
}

impl Volume {
    /// Volume for a currency code, case-insensitive.
    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.amounts
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(currency))
            .map(|(_, amount)| *amount)
    }
}

impl TryFrom<HashMap<String, Value>> for Volume {
    type Error = String;

    fn try_from(raw: HashMap<String, Value>) -> Result<Self, Self::Error> {
        let mut amounts = BTreeMap::new();
        let mut timestamp_ms = None;

        for (key, value) in raw {
            if key == "timestamp" {
                timestamp_ms = match &value {
                    Value::Number(n) => n.as_u64(),
                    Value::String(s) => s.parse().ok(),
                    _ => None,
                };
                if timestamp_ms.is_none() {
                    return Err(format!("invalid volume timestamp: {value}"));
                }
                continue;
            }
            let amount = match &value {
                Value::String(s) => s.parse::<Decimal>(),
                Value::Number(n) => n.to_string().parse::<Decimal>(),
                _ => return Err(format!("invalid volume for {key}: {value}")),
            }
            .map_err(|e| format!("invalid volume for {key}: {e}"))?;
            amounts.insert(key, amount);
        }

        Ok(Self {
            amounts,
            timestamp_ms,
        })
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let amounts = self
            .amounts
            .iter()
            .map(|(code, amount)| format!("{code}: {amount}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Volume = {amounts}")?;
        if let Some(ts) = self.timestamp_ms {
            write!(f, ", timestamp: {ts}")?;
        }
        Ok(())
    }
}

/// Request parameters for trade history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradesRequest {
    /// Maximum number of trades to return.
    pub limit_trades: u32,
    /// Include broken trades.
    #[serde(with = "bool_flag")]
    pub include_breaks: bool,
    /// Only return trades after this Unix time (seconds or milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Default for TradesRequest {
    fn default() -> Self {
        Self {
            limit_trades: 50,
            include_breaks: false,
            timestamp: None,
        }
    }
}

impl TradesRequest {
    /// Set the maximum number of trades.
    pub fn limit(mut self, limit_trades: u32) -> Self {
        self.limit_trades = limit_trades;
        self
    }

    /// Include broken trades.
    pub fn include_breaks(mut self, include: bool) -> Self {
        self.include_breaks = include;
        self
    }

    /// Only return trades after `timestamp`.
    pub fn since(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Kind of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Taker bought
    Buy,
    /// Taker sold
    Sell,
    /// Auction fill
    Auction,
    /// Block trade
    Block,
}

/// A single executed trade.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    /// Execution time in seconds.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub timestamp: i64,
    /// Execution time in milliseconds.
    #[serde(rename = "timestampms")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub timestamp_ms: u64,
    /// Trade id.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub tid: u64,
    /// Execution price.
    pub price: Decimal,
    /// Executed amount.
    pub amount: Decimal,
    /// Exchange that executed the trade.
    pub exchange: String,
    /// Trade kind.
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    /// Whether the trade was broken; only present with `include_breaks`.
    #[serde(default)]
    pub broken: Option<bool>,
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transaction {}\n\tPrice: {}\n\tAmount: {}\n\tTimestamp: {}",
            self.tid,
            self.price,
            self.amount,
            format_unix_seconds(self.timestamp)
        )
    }
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderBookRequest {
    /// Number of bid levels to return (0 for all).
    pub limit_bids: u32,
    /// Number of ask levels to return (0 for all).
    pub limit_asks: u32,
}

impl Default for OrderBookRequest {
    fn default() -> Self {
        Self {
            limit_bids: 50,
            limit_asks: 50,
        }
    }
}

impl OrderBookRequest {
    /// Limit both sides to `depth` levels.
    pub fn depth(depth: u32) -> Self {
        Self {
            limit_bids: depth,
            limit_asks: depth,
        }
    }
}

/// Order book snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderBook {
    /// Bid levels, best first.
    pub bids: Vec<BookEntry>,
    /// Ask levels, best first.
    pub asks: Vec<BookEntry>,
}

impl OrderBook {
    /// Best bid, if any.
    pub fn best_bid(&self) -> Option<&BookEntry> {
        self.bids.first()
    }

    /// Best ask, if any.
    pub fn best_ask(&self) -> Option<&BookEntry> {
        self.asks.first()
    }
}

/// Single order book level.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookEntry {
    /// Level price.
    pub price: Decimal,
    /// Quantity available at this price.
    pub amount: Decimal,
    /// Deprecated by the exchange, still sent on some environments.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub timestamp: Option<i64>,
}

impl std::fmt::Display for BookEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Amount: {}, Price: {}", self.amount, self.price)
    }
}
