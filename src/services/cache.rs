use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::types::SectorScanReport;

struct CachedScan {
    report: SectorScanReport,
    expires_at: Instant,
}

/// Holds the latest sector scan report for a fixed TTL.
///
/// Owned by the application state and handed to whoever needs it; there is
/// no process-wide instance.
///
/// Every invalidation bumps a generation counter. A scan records the
/// generation before it reads any history and may only store its report if
/// nothing was invalidated in the meantime, so a history write that lands
/// mid-scan is never masked by the older report.
pub struct ScanCache {
    slot: RwLock<Option<CachedScan>>,
    generation: AtomicU64,
    ttl: Duration,
}

impl ScanCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            generation: AtomicU64::new(0),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current generation; take it before starting a scan.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// The cached report, if present and not expired.
    pub fn get(&self) -> Option<SectorScanReport> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        let live = slot
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now())
            .map(|cached| cached.report.clone());
        live
    }

    /// Store `report` if no invalidation happened since `generation` was read.
    ///
    /// Returns whether the report was stored.
    pub fn store(&self, report: SectorScanReport, generation: u64) -> bool {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::Acquire) != generation {
            return false;
        }
        *slot = Some(CachedScan {
            report,
            expires_at: Instant::now() + self.ttl,
        });
        true
    }

    /// Drop the cached report and fence off scans already in flight.
    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        self.generation.fetch_add(1, Ordering::AcqRel);
        *slot = None;
    }
}
