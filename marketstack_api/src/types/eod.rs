//! End-of-day bar type shared by `/eod`, `/eod/latest`, and range requests.

use serde::{Deserialize, Serialize};

/// A single end-of-day price record.
///
/// The `adj_*` fields are split/dividend-adjusted values; the upstream
/// returns `null` for them on symbols where no adjusted series exists.
/// `date` is relayed as the upstream string (`2024-06-14T00:00:00+0000`)
/// rather than reparsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EodBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub adj_open: Option<f64>,
    pub adj_high: Option<f64>,
    pub adj_low: Option<f64>,
    pub adj_close: Option<f64>,
    pub adj_volume: Option<f64>,
    pub split_factor: f64,
    pub dividend: f64,
    pub symbol: String,
    pub exchange: String,
    pub date: String,
}
