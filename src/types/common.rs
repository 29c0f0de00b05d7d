//! Common domain types for the Gemini API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuySell {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for BuySell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuySell::Buy => write!(f, "buy"),
            BuySell::Sell => write!(f, "sell"),
        }
    }
}

/// Order type placed by this client.
///
/// Only limit orders on the exchange order book are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Limit order resting on the exchange book
    #[default]
    #[serde(rename = "exchange limit")]
    ExchangeLimit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::ExchangeLimit => write!(f, "exchange limit"),
        }
    }
}

/// Trading pair symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Bitcoin / US dollar
    BtcUsd,
    /// Ether / US dollar
    EthUsd,
    /// Ether / Bitcoin
    EthBtc,
    /// Litecoin / US dollar
    LtcUsd,
    /// Litecoin / Bitcoin
    LtcBtc,
    /// Bitcoin Cash / US dollar
    BchUsd,
    /// Zcash / US dollar
    ZecUsd,
    /// Solana / US dollar
    SolUsd,
    /// Dogecoin / US dollar
    DogeUsd,
    /// Chainlink / US dollar
    LinkUsd,
}

impl Symbol {
    /// Every known symbol.
    pub const ALL: [Symbol; 10] = [
        Symbol::BtcUsd,
        Symbol::EthUsd,
        Symbol::EthBtc,
        Symbol::LtcUsd,
        Symbol::LtcBtc,
        Symbol::BchUsd,
        Symbol::ZecUsd,
        Symbol::SolUsd,
        Symbol::DogeUsd,
        Symbol::LinkUsd,
    ];

    /// Wire representation, as used in URL paths and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::BtcUsd => "btcusd",
            Symbol::EthUsd => "ethusd",
            Symbol::EthBtc => "ethbtc",
            Symbol::LtcUsd => "ltcusd",
            Symbol::LtcBtc => "ltcbtc",
            Symbol::BchUsd => "bchusd",
            Symbol::ZecUsd => "zecusd",
            Symbol::SolUsd => "solusd",
            Symbol::DogeUsd => "dogeusd",
            Symbol::LinkUsd => "linkusd",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Symbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == lower)
            .ok_or_else(|| format!("Unknown symbol: {}", s))
    }
}

/// Currency that can be held or withdrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Bitcoin
    Btc,
    /// Ether
    Eth,
    /// Litecoin
    Ltc,
    /// Bitcoin Cash
    Bch,
    /// Zcash
    Zec,
    /// Solana
    Sol,
    /// Dogecoin
    Doge,
    /// Chainlink
    Link,
    /// Gemini dollar
    Gusd,
    /// US dollar
    Usd,
}

impl Currency {
    /// Every known currency.
    pub const ALL: [Currency; 10] = [
        Currency::Btc,
        Currency::Eth,
        Currency::Ltc,
        Currency::Bch,
        Currency::Zec,
        Currency::Sol,
        Currency::Doge,
        Currency::Link,
        Currency::Gusd,
        Currency::Usd,
    ];

    /// Lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Btc => "btc",
            Currency::Eth => "eth",
            Currency::Ltc => "ltc",
            Currency::Bch => "bch",
            Currency::Zec => "zec",
            Currency::Sol => "sol",
            Currency::Doge => "doge",
            Currency::Link => "link",
            Currency::Gusd => "gusd",
            Currency::Usd => "usd",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.as_str() == lower)
            .ok_or_else(|| format!("Unknown currency: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_sell_serde() {
        assert_eq!(serde_json::to_string(&BuySell::Buy).unwrap(), r#""buy""#);
        assert_eq!(
            serde_json::from_str::<BuySell>(r#""sell""#).unwrap(),
            BuySell::Sell
        );
    }

    #[test]
    fn test_order_type_serde() {
        assert_eq!(
            serde_json::to_string(&OrderType::ExchangeLimit).unwrap(),
            r#""exchange limit""#
        );
        assert!(serde_json::from_str::<OrderType>(r#""market buy""#).is_err());
    }

    #[test]
    fn test_symbol_wire_format() {
        for symbol in Symbol::ALL {
            let json = serde_json::to_string(&symbol).unwrap();
            assert_eq!(json, format!("\"{}\"", symbol.as_str()));
        }
        assert_eq!("BTCUSD".parse::<Symbol>().unwrap(), Symbol::BtcUsd);
        assert!("btcusdx".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("BTC".parse::<Currency>().unwrap(), Currency::Btc);
        assert_eq!(Currency::Gusd.to_string(), "gusd");
        assert!("xyz".parse::<Currency>().is_err());
    }
}
