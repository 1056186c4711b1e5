//! Per-endpoint request handlers.
//!
//! Each handler is a thin passthrough: read the query parameters, build
//! the matching upstream query, call the client, relay the decoded JSON.

pub mod dividends;
pub mod eod;
pub mod intraday;
pub mod splits;
pub mod tickers;

use chrono::NaiveDate;

use crate::error::AppError;

/// Extracts a required, non-empty `symbol` parameter.
fn require_symbol(symbol: Option<String>) -> Result<String, AppError> {
    match symbol {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(AppError::BadRequest(
            "missing required parameter: symbol".to_string(),
        )),
    }
}

/// Parses a `YYYY-MM-DD` date parameter.
fn parse_date(name: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("invalid {} (expected YYYY-MM-DD): {}", name, value))
    })
}
