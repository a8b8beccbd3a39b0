//! Analysis endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{ApiResponse, JsonBody};
use crate::error::{AppError, Result};
use crate::services::analyzer::AnalysisRequest;
use crate::types::{AnalysisResult, InstrumentOutcome};
use crate::AppState;

/// Body of a batch analysis request.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub instruments: Vec<AnalysisRequest>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(analyze))
        .route("/batch", post(analyze_batch))
        .route("/:symbol", get(analyze_stored))
}

/// Analyze a series supplied in the request body.
async fn analyze(
    State(state): State<AppState>,
    body: JsonBody<AnalysisRequest>,
) -> Result<Json<ApiResponse<AnalysisResult>>> {
    let Json(request) = body?;
    let result = state.analyzer.analyze_request(request)?;
    Ok(Json(ApiResponse::new(result)))
}

/// Analyze the stored history for a symbol.
async fn analyze_stored(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<AnalysisResult>>> {
    let series = state
        .history
        .get(&symbol)
        .ok_or_else(|| AppError::NotFound(format!("No history stored for {}", symbol)))?;

    let result = state
        .analyzer
        .analyze(&symbol.to_uppercase(), &series, None)?;
    Ok(Json(ApiResponse::new(result)))
}

/// Analyze several instruments; failures are reported per instrument.
async fn analyze_batch(
    State(state): State<AppState>,
    body: JsonBody<BatchRequest>,
) -> Result<Json<ApiResponse<Vec<InstrumentOutcome>>>> {
    let Json(batch) = body?;
    if batch.instruments.is_empty() {
        return Err(AppError::BadRequest("instruments must not be empty".to_string()));
    }
    Ok(Json(ApiResponse::new(
        state.analyzer.analyze_batch(batch.instruments),
    )))
}
