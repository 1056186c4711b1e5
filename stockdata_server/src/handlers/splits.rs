use axum::extract::{Query, State};
use axum::Json;
use marketstack_api::types::{PaginatedResponse, Split};
use marketstack_api::SplitQuery;
use serde::Deserialize;

use super::require_symbol;
use crate::error::AppError;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct SplitParams {
    pub symbol: Option<String>,
}

pub async fn splits(
    State(state): State<AppState>,
    Query(params): Query<SplitParams>,
) -> Result<Json<PaginatedResponse<Split>>, AppError> {
    let symbol = require_symbol(params.symbol)?;
    let query = SplitQuery::default().with_symbol(symbol);
    Ok(Json(state.client.splits(&query).await?))
}
