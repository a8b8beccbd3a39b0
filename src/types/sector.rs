use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::round::two_dp;

/// Direction of a detected trend turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// One fired detection rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSignal {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Price context reported with every sector alert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorMetrics {
    #[serde(serialize_with = "two_dp")]
    pub current_price: f64,
    /// Percent change versus the prior close.
    #[serde(serialize_with = "two_dp")]
    pub today_change: f64,
    /// Percent change versus five bars ago.
    #[serde(serialize_with = "two_dp")]
    pub one_week_change: f64,
    /// Percent change versus twenty-one bars ago.
    #[serde(serialize_with = "two_dp")]
    pub one_month_change: f64,
    #[serde(serialize_with = "two_dp")]
    pub rsi: f64,
    #[serde(serialize_with = "two_dp")]
    pub sma20: f64,
    #[serde(serialize_with = "two_dp")]
    pub sma50: f64,
}

/// A sector ETF showing a directional shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAlert {
    pub sector: String,
    pub etf: String,
    pub direction: TrendDirection,
    /// Sum of fired rule weights, capped at 5.
    pub strength: f64,
    pub signals: Vec<AlertSignal>,
    pub metrics: SectorMetrics,
}

/// Result of scanning the whole sector universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorScanReport {
    /// Alerts ranked by strength, strongest first.
    pub alerts: Vec<SectorAlert>,
    /// Sectors whose history was fetched and inspected.
    pub scanned: usize,
    /// Sectors whose history could not be fetched.
    pub failed: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
