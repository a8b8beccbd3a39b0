pub mod analyzer;
pub mod cache;
pub mod history_store;
pub mod indicators;
pub mod scanner;
pub mod sectors;
pub mod signals;
pub mod turning_points;

pub use analyzer::{AnalysisRequest, Analyzer};
pub use cache::ScanCache;
pub use history_store::HistoryStore;
pub use scanner::{HistorySource, SectorScanner};
pub use sectors::{Sector, SECTOR_ETFS};
pub use signals::ScoringTable;
