//! Intraday handlers: `/intraday`, `/intraday/latest`, `/intraday/realtime`.

use axum::extract::{Query, State};
use axum::Json;
use marketstack_api::types::{IntradayBar, PaginatedResponse};
use marketstack_api::{Interval, IntradayQuery};
use serde::Deserialize;

use super::require_symbol;
use crate::error::AppError;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct IntradayParams {
    pub symbol: Option<String>,
}

#[derive(Deserialize)]
pub struct RealtimeParams {
    pub symbol: Option<String>,
    pub interval: Option<String>,
}

pub async fn intraday(
    State(state): State<AppState>,
    Query(params): Query<IntradayParams>,
) -> Result<Json<PaginatedResponse<IntradayBar>>, AppError> {
    let symbol = require_symbol(params.symbol)?;
    let query = IntradayQuery::default().with_symbol(symbol);
    Ok(Json(state.client.intraday(&query).await?))
}

pub async fn intraday_latest(
    State(state): State<AppState>,
    Query(params): Query<IntradayParams>,
) -> Result<Json<PaginatedResponse<IntradayBar>>, AppError> {
    let symbol = require_symbol(params.symbol)?;
    let query = IntradayQuery::default().with_symbol(symbol);
    Ok(Json(state.client.intraday_latest(&query).await?))
}

/// Intraday quotes at a caller-chosen interval. Without `interval` the
/// upstream default (1 hour) applies.
pub async fn intraday_realtime(
    State(state): State<AppState>,
    Query(params): Query<RealtimeParams>,
) -> Result<Json<PaginatedResponse<IntradayBar>>, AppError> {
    let symbol = require_symbol(params.symbol)?;
    let mut query = IntradayQuery::default().with_symbol(symbol);
    if let Some(interval) = &params.interval {
        let interval: Interval = interval.parse().map_err(|_| {
            AppError::BadRequest(format!("invalid interval: {}", interval))
        })?;
        query = query.with_interval(interval);
    }
    Ok(Json(state.client.intraday(&query).await?))
}
