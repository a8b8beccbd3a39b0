//! Technical indicator implementations.
//!
//! Every indicator works on full-precision values; rounding for display
//! happens when the snapshot is serialized.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod money_flow;
pub mod rsi;
pub mod sma;

pub use bollinger::BollingerBands;
pub use ema::ema_series;
pub use macd::Macd;
pub use money_flow::MoneyFlowRatio;
pub use rsi::Rsi;
pub use sma::{sma, Sma};

use tracing::debug;

use crate::error::AnalysisError;
use crate::types::{IndicatorSnapshot, MovingAverages, PriceSeries, PricePoint};

/// Minimum number of bars required before any analysis is attempted.
pub const MIN_ANALYSIS_BARS: usize = 50;

/// Trait for implementing technical indicators.
pub trait Indicator: Send + Sync {
    /// Value produced for the latest bar.
    type Output;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Minimum number of bars required for calculation.
    fn min_periods(&self) -> usize;

    /// Calculate the indicator from daily bars.
    /// Returns None if there is not enough history.
    fn calculate(&self, bars: &[PricePoint]) -> Option<Self::Output>;
}

/// Compute every indicator for the latest bar of `series`.
///
/// Fails with `InsufficientData` below [`MIN_ANALYSIS_BARS`]. Above that,
/// indicators whose own period is longer than the history (only SMA 200 in
/// practice) come back as `None`.
pub fn calculate_snapshot(series: &PriceSeries) -> Result<IndicatorSnapshot, AnalysisError> {
    if series.len() < MIN_ANALYSIS_BARS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_ANALYSIS_BARS,
            actual: series.len(),
        });
    }

    let bars = series.points();
    let current_price = bars
        .last()
        .map(|b| b.close)
        .ok_or(AnalysisError::InsufficientData {
            required: MIN_ANALYSIS_BARS,
            actual: 0,
        })?;

    Ok(IndicatorSnapshot {
        current_price,
        rsi: reading(&Rsi::default(), bars),
        macd: reading(&Macd::default(), bars),
        moving_averages: MovingAverages {
            sma20: reading(&Sma::new(20), bars),
            sma50: reading(&Sma::new(50), bars),
            sma200: reading(&Sma::new(200), bars),
        },
        bollinger_bands: reading(&BollingerBands::default(), bars),
        money_flow: reading(&MoneyFlowRatio::default(), bars),
    })
}

/// Latest value of `indicator`, or `None` when the history is too short.
fn reading<I: Indicator>(indicator: &I, bars: &[PricePoint]) -> Option<I::Output> {
    if bars.len() < indicator.min_periods() {
        debug!(
            "{} needs {} bars, have {}",
            indicator.name(),
            indicator.min_periods(),
            bars.len()
        );
        return None;
    }
    indicator.calculate(bars)
}
