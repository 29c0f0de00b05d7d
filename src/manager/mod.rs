//! Stateful helpers built on top of any [`GeminiClient`](crate::rest::GeminiClient).
//!
//! - [`TradeManager`] places limit orders for one symbol and tracks them by side.
//! - [`FundManager`] keeps a balance snapshot and a withdrawal log.
//! - [`TickerTracker`], [`TradeHistoryTracker`] and [`OrderBookTracker`] remember
//!   the last market data response and when it was requested.
//!
//! State is guarded by `tokio::sync::Mutex`, so helpers can be shared across tasks
//! behind an `Arc`.

mod funds;
mod market;
mod trade;

#[cfg(test)]
mod mock;

pub use funds::FundManager;
pub use market::{OrderBookTracker, Snapshot, TickerTracker, TradeHistoryTracker};
pub use trade::TradeManager;
