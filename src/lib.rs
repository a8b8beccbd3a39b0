//! QuantLens - technical signal, recommendation and sector turning-point engine

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use services::{Analyzer, HistoryStore, ScanCache, ScoringTable};

// Re-export commonly used types
pub use error::{AnalysisError, AppError};
pub use services::indicators::calculate_snapshot;
pub use services::turning_points::{detect, scan};
pub use types::*;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analyzer: Arc<Analyzer>,
    pub history: Arc<HistoryStore>,
    pub scan_cache: Arc<ScanCache>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_table(config, ScoringTable::default())
    }

    pub fn with_table(config: Config, table: ScoringTable) -> Self {
        let scan_cache = Arc::new(ScanCache::new(config.scan_cache_ttl));
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(Analyzer::new(table)),
            history: Arc::new(HistoryStore::new()),
            scan_cache,
        }
    }
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
