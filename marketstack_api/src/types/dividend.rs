use serde::{Deserialize, Serialize};

/// A single cash dividend record from `/dividends`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dividend {
    pub date: String,
    pub dividend: f64,
    pub symbol: String,
}
