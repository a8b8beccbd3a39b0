//! Price history endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ApiResponse, JsonBody};
use crate::error::{AppError, Result};
use crate::types::{PricePoint, PriceSeries};
use crate::AppState;

/// Body of a history upload.
#[derive(Debug, Deserialize)]
pub struct HistoryUpload {
    pub points: Vec<PricePoint>,
}

#[derive(Debug, Serialize)]
pub struct StoredHistory {
    pub symbol: String,
    pub bars: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub symbol: String,
    pub points: PriceSeries,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_symbols))
        .route(
            "/:symbol",
            get(get_history).put(put_history).delete(delete_history),
        )
}

async fn list_symbols(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::new(state.history.symbols()))
}

/// Validate and store a daily series, replacing any previous one.
async fn put_history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    body: JsonBody<HistoryUpload>,
) -> Result<Json<ApiResponse<StoredHistory>>> {
    let Json(upload) = body?;
    let series = PriceSeries::new(upload.points)?;
    let bars = series.len();
    state.history.insert(&symbol, series);
    state.scan_cache.invalidate();
    info!("Accepted {} bars for {}", bars, symbol.to_uppercase());

    Ok(Json(ApiResponse::new(StoredHistory {
        symbol: symbol.to_uppercase(),
        bars,
    })))
}

async fn get_history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<HistoryResponse>>> {
    let series = state
        .history
        .get(&symbol)
        .ok_or_else(|| AppError::NotFound(format!("No history stored for {}", symbol)))?;

    Ok(Json(ApiResponse::new(HistoryResponse {
        symbol: symbol.to_uppercase(),
        points: series.as_ref().clone(),
    })))
}

async fn delete_history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<StoredHistory>>> {
    if !state.history.remove(&symbol) {
        return Err(AppError::NotFound(format!("No history stored for {}", symbol)));
    }
    state.scan_cache.invalidate();

    Ok(Json(ApiResponse::new(StoredHistory {
        symbol: symbol.to_uppercase(),
        bars: 0,
    })))
}
