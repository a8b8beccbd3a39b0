//! Trend-turning-point detection for sector ETFs.
//!
//! Compares moving averages, RSI and price momentum now against five bars
//! earlier and reports sectors that look like they are changing direction.

pub mod rules;

pub use rules::{evaluate, RuleHit, TrendState, MAX_STRENGTH};

use tracing::debug;

use crate::services::indicators::MIN_ANALYSIS_BARS;
use crate::services::sectors::Sector;
use crate::types::{AlertSignal, PriceSeries, SectorAlert, SectorMetrics, TrendDirection};

/// Accumulates fired rules into an alert.
///
/// The first rule added fixes the direction; later rules only add strength.
#[derive(Debug, Default)]
pub struct AlertBuilder {
    direction: Option<TrendDirection>,
    strength: f64,
    signals: Vec<AlertSignal>,
}

impl AlertBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, hit: RuleHit) {
        if self.direction.is_none() {
            self.direction = Some(hit.direction);
        }
        self.strength += hit.strength;
        self.signals.push(AlertSignal {
            kind: hit.kind.to_string(),
            description: hit.description,
        });
    }

    /// `None` when nothing fired.
    pub fn build(self, sector: &str, etf: &str, metrics: SectorMetrics) -> Option<SectorAlert> {
        let direction = self.direction?;
        Some(SectorAlert {
            sector: sector.to_string(),
            etf: etf.to_string(),
            direction,
            strength: self.strength.min(MAX_STRENGTH),
            signals: self.signals,
            metrics,
        })
    }
}

/// Inspect one sector's history.
///
/// Returns `None` for a steady sector and for any history that cannot be
/// evaluated; a scan never fails because of one sector.
pub fn detect(sector: &str, etf: &str, series: &PriceSeries) -> Option<SectorAlert> {
    if series.len() < MIN_ANALYSIS_BARS {
        debug!(
            "Skipping {} ({}): {} bars, need {}",
            sector,
            etf,
            series.len(),
            MIN_ANALYSIS_BARS
        );
        return None;
    }

    let Some(state) = TrendState::from_closes(&series.closes()) else {
        debug!("Skipping {} ({}): trend state unavailable", sector, etf);
        return None;
    };

    let mut builder = AlertBuilder::new();
    for hit in evaluate(&state) {
        builder.push(hit);
    }
    builder.build(sector, etf, state.metrics())
}

/// Detect over many sectors and rank the alerts, strongest first.
pub fn scan<'a, I>(histories: I) -> Vec<SectorAlert>
where
    I: IntoIterator<Item = (&'a Sector, &'a PriceSeries)>,
{
    let mut alerts: Vec<SectorAlert> = histories
        .into_iter()
        .filter_map(|(sector, series)| detect(sector.name, sector.etf, series))
        .collect();
    rank(&mut alerts);
    alerts
}

/// Sort by strength descending; equal strengths keep their order.
pub fn rank(alerts: &mut [SectorAlert]) {
    alerts.sort_by(|a, b| b.strength.total_cmp(&a.strength));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> SectorMetrics {
        SectorMetrics {
            current_price: 100.0,
            today_change: 0.0,
            one_week_change: 0.0,
            one_month_change: 0.0,
            rsi: 50.0,
            sma20: 100.0,
            sma50: 100.0,
        }
    }

    fn hit(kind: &'static str, direction: TrendDirection, strength: f64) -> RuleHit {
        RuleHit {
            kind,
            description: String::new(),
            direction,
            strength,
        }
    }

    #[test]
    fn test_empty_builder_builds_nothing() {
        assert!(AlertBuilder::new().build("Energy", "XLE", metrics()).is_none());
    }

    #[test]
    fn test_first_direction_wins() {
        let mut builder = AlertBuilder::new();
        builder.push(hit("Extreme Overbought", TrendDirection::Neutral, 0.5));
        builder.push(hit("Breakout", TrendDirection::Bullish, 1.0));
        let alert = builder.build("Energy", "XLE", metrics()).unwrap();
        assert_eq!(alert.direction, TrendDirection::Neutral);
        assert_eq!(alert.strength, 1.5);
        assert_eq!(alert.signals.len(), 2);
        assert_eq!(alert.signals[1].kind, "Breakout");
    }

    #[test]
    fn test_strength_is_capped() {
        let mut builder = AlertBuilder::new();
        builder.push(hit("Golden Cross (10/20)", TrendDirection::Bullish, 2.0));
        builder.push(hit("Golden Cross (20/50)", TrendDirection::Bullish, 3.0));
        builder.push(hit("Momentum Shift Up", TrendDirection::Bullish, 2.0));
        builder.push(hit("Breakout", TrendDirection::Bullish, 1.0));
        let alert = builder.build("Energy", "XLE", metrics()).unwrap();
        assert_eq!(alert.strength, MAX_STRENGTH);
        assert_eq!(alert.signals.len(), 4);
    }

    #[test]
    fn test_rank_is_stable() {
        let alert = |etf: &str, strength: f64| SectorAlert {
            sector: etf.to_string(),
            etf: etf.to_string(),
            direction: TrendDirection::Bullish,
            strength,
            signals: vec![],
            metrics: metrics(),
        };
        let mut alerts = vec![alert("A", 1.0), alert("B", 3.0), alert("C", 1.0), alert("D", 5.0)];
        rank(&mut alerts);
        let order: Vec<&str> = alerts.iter().map(|a| a.etf.as_str()).collect();
        assert_eq!(order, vec!["D", "B", "A", "C"]);
    }
}
