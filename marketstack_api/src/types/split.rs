use serde::{Deserialize, Serialize};

/// A single stock-split record from `/splits`.
///
/// `split_factor` is the adjustment ratio (e.g. 4.0 for a 4-for-1 split).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Split {
    pub date: String,
    pub split_factor: f64,
    pub symbol: String,
}
