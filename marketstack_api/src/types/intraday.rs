use serde::{Deserialize, Serialize};

/// A single intraday quote.
///
/// Outside market hours the upstream reports `last`, `close`, and `volume`
/// as `null`, so those are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntradayBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub last: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub date: String,
    pub symbol: String,
    pub exchange: String,
}
