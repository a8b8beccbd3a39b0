//! In-memory daily history, keyed by symbol.
//!
//! Price histories are pushed in by whoever owns the market-data feed; the
//! store only keeps the latest validated series per symbol.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::AppError;
use crate::services::scanner::HistorySource;
use crate::types::PriceSeries;

#[derive(Default)]
pub struct HistoryStore {
    series: DashMap<String, Arc<PriceSeries>>,
}

fn normalize(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored series for `symbol`.
    pub fn insert(&self, symbol: &str, series: PriceSeries) {
        let key = normalize(symbol);
        debug!("Stored {} bars for {}", series.len(), key);
        self.series.insert(key, Arc::new(series));
    }

    pub fn get(&self, symbol: &str) -> Option<Arc<PriceSeries>> {
        self.series
            .get(&normalize(symbol))
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, symbol: &str) -> bool {
        self.series.remove(&normalize(symbol)).is_some()
    }

    /// Stored symbols, sorted.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.series.iter().map(|e| e.key().clone()).collect();
        symbols.sort();
        symbols
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl HistorySource for HistoryStore {
    async fn history(&self, symbol: &str) -> Result<Arc<PriceSeries>, AppError> {
        self.get(symbol)
            .ok_or_else(|| AppError::NotFound(format!("No history stored for {}", normalize(symbol))))
    }
}
