//! Gemini REST API endpoint constants.
//!
//! Paths are relative to `{base_url}/{API_VERSION}/`. They should be checked
//! against the current exchange documentation when upgrading.

/// Base URL of the sandbox environment.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.gemini.com";
/// Base URL of the production environment.
pub const PRODUCTION_BASE_URL: &str = "https://api.gemini.com";
/// Version segment of every request path.
pub const API_VERSION: &str = "v1";

/// Exchange environment the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Sandbox with test funds (default)
    #[default]
    Sandbox,
    /// Live trading
    Production,
}

impl Environment {
    /// Base URL of this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Public endpoints (no authentication required).
pub mod public {
    /// List tradable symbols.
    pub const SYMBOLS: &str = "symbols";
    /// Ticker for a symbol; append the symbol.
    pub const PUBTICKER: &str = "pubticker";
    /// Trade history for a symbol; append the symbol.
    pub const TRADES: &str = "trades";
    /// Order book for a symbol; append the symbol.
    pub const BOOK: &str = "book";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Place a new order.
    pub const NEW_ORDER: &str = "order/new";
    /// Cancel one order.
    pub const CANCEL_ORDER: &str = "order/cancel";
    /// Cancel all orders opened by this session.
    pub const CANCEL_SESSION: &str = "order/cancel/session";
    /// Cancel all orders of the account.
    pub const CANCEL_ALL: &str = "order/cancel/all";
    /// Status of one order.
    pub const ORDER_STATUS: &str = "order/status";
    /// All active orders.
    pub const ACTIVE_ORDERS: &str = "orders";
    /// Available balances.
    pub const BALANCES: &str = "balances";
    /// Withdraw funds; append the currency.
    pub const WITHDRAW: &str = "withdraw";
}

/// Join an endpoint with a path parameter, e.g. `pubticker/btcusd`.
pub(crate) fn with_segment(endpoint: &str, segment: impl std::fmt::Display) -> String {
    format!("{endpoint}/{segment}")
}
