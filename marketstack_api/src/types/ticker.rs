//! Ticker listing types: symbols and the exchanges they trade on.

use serde::{Deserialize, Serialize};

/// A listed symbol plus its home exchange, from `/tickers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    pub name: String,
    pub symbol: String,
    pub stock_exchange: StockExchange,
}

/// Exchange metadata attached to each ticker record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockExchange {
    pub name: String,
    pub acronym: String,
    /// ISO 10383 market identifier code.
    pub mic: String,
    pub country: String,
    pub country_code: String,
    pub city: String,
    pub website: String,
}
