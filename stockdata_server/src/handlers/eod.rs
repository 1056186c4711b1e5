//! End-of-day handlers: `/eod`, `/eod/latest`, and `/historical`.

use axum::extract::{Query, State};
use axum::Json;
use marketstack_api::types::{EodBar, PaginatedResponse};
use marketstack_api::EodQuery;
use serde::Deserialize;

use super::{parse_date, require_symbol};
use crate::error::AppError;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct EodParams {
    pub symbol: Option<String>,
}

/// Parameter names follow the original form fields: `datefrom`/`dateto`.
#[derive(Deserialize)]
pub struct HistoricalParams {
    pub symbol: Option<String>,
    pub datefrom: Option<String>,
    pub dateto: Option<String>,
}

pub async fn eod(
    State(state): State<AppState>,
    Query(params): Query<EodParams>,
) -> Result<Json<PaginatedResponse<EodBar>>, AppError> {
    let symbol = require_symbol(params.symbol)?;
    let query = EodQuery::default().with_symbol(symbol);
    Ok(Json(state.client.eod(&query).await?))
}

pub async fn eod_latest(
    State(state): State<AppState>,
    Query(params): Query<EodParams>,
) -> Result<Json<PaginatedResponse<EodBar>>, AppError> {
    let symbol = require_symbol(params.symbol)?;
    let query = EodQuery::default().with_symbol(symbol);
    Ok(Json(state.client.eod_latest(&query).await?))
}

/// End-of-day history over a date range. Same upstream endpoint as `/eod`,
/// with the range narrowed by `date_from`/`date_to`.
pub async fn historical(
    State(state): State<AppState>,
    Query(params): Query<HistoricalParams>,
) -> Result<Json<PaginatedResponse<EodBar>>, AppError> {
    let symbol = require_symbol(params.symbol)?;
    let mut query = EodQuery::default().with_symbol(symbol);
    if let Some(datefrom) = &params.datefrom {
        query = query.with_date_from(parse_date("datefrom", datefrom)?);
    }
    if let Some(dateto) = &params.dateto {
        query = query.with_date_to(parse_date("dateto", dateto)?);
    }
    Ok(Json(state.client.eod(&query).await?))
}
