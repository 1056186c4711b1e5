use axum::extract::{Query, State};
use axum::Json;
use marketstack_api::types::{PaginatedResponse, Ticker};
use marketstack_api::{Query as _, TickerQuery};
use serde::Deserialize;

use crate::error::AppError;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct TickerParams {
    pub search: Option<String>,
    pub exchange: Option<String>,
    pub limit: Option<u32>,
}

/// Ticker listing. All parameters are optional; with none set this relays
/// the upstream's first page of every known symbol.
pub async fn tickers(
    State(state): State<AppState>,
    Query(params): Query<TickerParams>,
) -> Result<Json<PaginatedResponse<Ticker>>, AppError> {
    let mut query = TickerQuery::default();
    if let Some(search) = params.search {
        query = query.with_search(search);
    }
    if let Some(exchange) = params.exchange {
        query = query.with_exchange(exchange);
    }
    if let Some(limit) = params.limit {
        query = query.with_limit(limit);
    }
    Ok(Json(state.client.tickers(&query).await?))
}
