//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::ema_series;
use super::Indicator;
use crate::types::{MacdValues, PricePoint};

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    /// MACD line, one value per close.
    fn macd_line(&self, closes: &[f64]) -> Vec<f64> {
        let fast_ema = ema_series(closes, self.fast_period);
        let slow_ema = ema_series(closes, self.slow_period);

        fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect()
    }
}

impl Indicator for Macd {
    type Output = MacdValues;

    fn name(&self) -> &str {
        "MACD"
    }

    fn min_periods(&self) -> usize {
        self.slow_period + self.signal_period - 1
    }

    fn calculate(&self, bars: &[PricePoint]) -> Option<MacdValues> {
        if bars.len() < self.min_periods() {
            return None;
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let macd_line = self.macd_line(&closes);
        let signal_line = ema_series(&macd_line, self.signal_period);

        let value = *macd_line.last()?;
        let signal = *signal_line.last()?;

        Some(MacdValues {
            value,
            signal,
            histogram: value - signal,
        })
    }
}
