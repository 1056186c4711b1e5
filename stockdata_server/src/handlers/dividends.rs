use axum::extract::{Query, State};
use axum::Json;
use marketstack_api::types::{Dividend, PaginatedResponse};
use marketstack_api::DividendQuery;
use serde::Deserialize;

use super::require_symbol;
use crate::error::AppError;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct DividendParams {
    pub symbol: Option<String>,
}

pub async fn dividends(
    State(state): State<AppState>,
    Query(params): Query<DividendParams>,
) -> Result<Json<PaginatedResponse<Dividend>>, AppError> {
    let symbol = require_symbol(params.symbol)?;
    let query = DividendQuery::default().with_symbol(symbol);
    Ok(Json(state.client.dividends(&query).await?))
}
