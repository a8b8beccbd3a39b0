pub mod analysis;
pub mod health;
pub mod history;
pub mod sectors;

use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router};
use serde::Serialize;

/// JSON request body with the rejection kept, so handlers can turn a
/// malformed body into an `AppError` with `?`.
pub type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

/// API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    pub cached: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self::with_cached(data, false)
    }

    pub fn with_cached(data: T, cached: bool) -> Self {
        Self {
            data,
            meta: ApiMeta { cached },
        }
    }
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/history", history::router())
        .nest("/api/analysis", analysis::router())
        .nest("/api/sectors", sectors::router())
}
