//! Simple Moving Average (SMA) indicator.

use super::Indicator;
use crate::types::PricePoint;

/// Arithmetic mean of the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// SMA (Simple Moving Average) of closing prices.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn name(&self) -> &str {
        match self.period {
            20 => "SMA (20)",
            50 => "SMA (50)",
            200 => "SMA (200)",
            _ => "SMA",
        }
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, bars: &[PricePoint]) -> Option<f64> {
        if bars.len() < self.period {
            return None;
        }
        let closes: Vec<f64> = bars[bars.len() - self.period..]
            .iter()
            .map(|b| b.close)
            .collect();
        sma(&closes, self.period)
    }
}
