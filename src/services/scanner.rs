//! Sector scan: fetch every sector history concurrently, then detect.

use chrono::Utc;
use futures_util::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::services::cache::ScanCache;
use crate::services::sectors::{Sector, SECTOR_ETFS};
use crate::services::turning_points;
use crate::types::{PriceSeries, SectorScanReport};

/// Where sector histories come from.
pub trait HistorySource: Send + Sync {
    fn history(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Arc<PriceSeries>, AppError>> + Send;
}

/// Scans a sector universe for turning points.
pub struct SectorScanner<S> {
    source: Arc<S>,
    universe: &'static [Sector],
}

impl<S: HistorySource> SectorScanner<S> {
    /// Scanner over the standard sector ETFs.
    pub fn new(source: Arc<S>) -> Self {
        Self::with_universe(source, SECTOR_ETFS)
    }

    pub fn with_universe(source: Arc<S>, universe: &'static [Sector]) -> Self {
        Self { source, universe }
    }

    /// Run a fresh scan.
    ///
    /// A sector whose history cannot be fetched is listed in `failed`; the
    /// rest of the scan carries on.
    pub async fn scan(&self) -> SectorScanReport {
        let fetches = self.universe.iter().map(|sector| {
            let source = Arc::clone(&self.source);
            async move { (sector, source.history(sector.etf).await) }
        });

        let mut histories = Vec::with_capacity(self.universe.len());
        let mut failed = Vec::new();
        for (sector, result) in join_all(fetches).await {
            match result {
                Ok(series) => histories.push((sector, series)),
                Err(e) => {
                    warn!("Failed to load history for {} ({}): {}", sector.name, sector.etf, e);
                    failed.push(sector.etf.to_string());
                }
            }
        }

        let alerts = turning_points::scan(
            histories
                .iter()
                .map(|(sector, series)| (*sector, series.as_ref())),
        );

        info!(
            "Sector scan: {} scanned, {} alerts, {} failed",
            histories.len(),
            alerts.len(),
            failed.len()
        );

        SectorScanReport {
            alerts,
            scanned: histories.len(),
            failed,
            generated_at: Utc::now(),
        }
    }

    /// Serve from `cache` unless it is empty, expired or `refresh` is set.
    ///
    /// Returns the report and whether it came from the cache. A report whose
    /// scan overlapped a history write is returned but not cached.
    pub async fn scan_cached(&self, cache: &ScanCache, refresh: bool) -> (SectorScanReport, bool) {
        if refresh {
            cache.invalidate();
        } else if let Some(report) = cache.get() {
            return (report, true);
        }

        let generation = cache.generation();
        let report = self.scan().await;
        if !cache.store(report.clone(), generation) {
            debug!("Sector scan overlapped a history update; not caching it");
        }
        (report, false)
    }
}
