//! Relative Strength Index (RSI) indicator.

use super::Indicator;
use crate::types::PricePoint;

/// RSI (Relative Strength Index) indicator, Wilder smoothing.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Wilder RSI over a series of closes.
    pub fn wilder(closes: &[f64], period: usize) -> Option<f64> {
        if period == 0 || closes.len() < period + 1 {
            return None;
        }

        let mut gains = Vec::with_capacity(closes.len() - 1);
        let mut losses = Vec::with_capacity(closes.len() - 1);

        for pair in closes.windows(2) {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        // Calculate initial averages
        let mut avg_gain = gains.iter().take(period).sum::<f64>() / period as f64;
        let mut avg_loss = losses.iter().take(period).sum::<f64>() / period as f64;

        // Use smoothed averages for remaining data
        for i in period..gains.len() {
            avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        }

        Some(rsi_from_averages(avg_gain, avg_loss))
    }

    /// RSI from the plain average gain and loss of the last `period` changes.
    pub fn simple(closes: &[f64], period: usize) -> Option<f64> {
        if period == 0 || closes.len() < period + 1 {
            return None;
        }

        let window = &closes[closes.len() - period - 1..];
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        for pair in window.windows(2) {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                gain_sum += change;
            } else {
                loss_sum -= change;
            }
        }

        Some(rsi_from_averages(
            gain_sum / period as f64,
            loss_sum / period as f64,
        ))
    }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // No movement at all reads as neutral rather than overbought.
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

impl Indicator for Rsi {
    type Output = f64;

    fn name(&self) -> &str {
        "RSI (14)"
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn calculate(&self, bars: &[PricePoint]) -> Option<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        Self::wilder(&closes, self.period)
    }
}
