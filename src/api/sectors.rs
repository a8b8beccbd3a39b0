//! Sector turning-point endpoints.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ApiResponse;
use crate::services::scanner::SectorScanner;
use crate::services::sectors::SECTOR_ETFS;
use crate::types::SectorScanReport;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TurningPointsQuery {
    /// Skip the cached report and rescan.
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Debug, Serialize)]
pub struct SectorInfo {
    pub etf: &'static str,
    pub name: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sectors))
        .route("/turning-points", get(turning_points))
}

async fn list_sectors() -> Json<ApiResponse<Vec<SectorInfo>>> {
    let sectors = SECTOR_ETFS
        .iter()
        .map(|s| SectorInfo {
            etf: s.etf,
            name: s.name,
        })
        .collect();
    Json(ApiResponse::new(sectors))
}

async fn turning_points(
    State(state): State<AppState>,
    Query(query): Query<TurningPointsQuery>,
) -> Json<ApiResponse<SectorScanReport>> {
    let scanner = SectorScanner::new(Arc::clone(&state.history));
    let (report, cached) = scanner.scan_cached(&state.scan_cache, query.refresh).await;
    Json(ApiResponse::with_cached(report, cached))
}
