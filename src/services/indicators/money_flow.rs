//! Custom money-flow ratio.
//!
//! Not the standard Money Flow Index: there is no oscillator transform, the
//! output is the raw inflow/outflow split and its ratio.

use super::Indicator;
use crate::types::{MoneyFlow, PricePoint};

/// Ratio reported when there was inflow but no outflow.
pub const UNBOUNDED_RATIO: f64 = 100.0;

/// Volume-weighted typical-price flow over a trailing window.
///
/// Each bar in the window is compared with the bar before it:
/// - typical price rose: `typical * volume` counts as money in
/// - typical price fell: counts as money out
/// - unchanged: ignored
pub struct MoneyFlowRatio {
    period: usize,
}

impl Default for MoneyFlowRatio {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl MoneyFlowRatio {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for MoneyFlowRatio {
    type Output = MoneyFlow;

    fn name(&self) -> &str {
        "Money Flow (14)"
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn calculate(&self, bars: &[PricePoint]) -> Option<MoneyFlow> {
        if self.period == 0 || bars.len() < self.min_periods() {
            return None;
        }

        let mut money_in = 0.0;
        let mut money_out = 0.0;

        for i in bars.len() - self.period..bars.len() {
            let current_tp = bars[i].typical_price();
            let prev_tp = bars[i - 1].typical_price();
            let flow = current_tp * bars[i].volume;

            if current_tp > prev_tp {
                money_in += flow;
            } else if current_tp < prev_tp {
                money_out += flow;
            }
        }

        let ratio = if money_out > 0.0 {
            money_in / money_out
        } else if money_in > 0.0 {
            UNBOUNDED_RATIO
        } else {
            0.0
        };

        let total = money_in + money_out;
        let (in_percent, out_percent) = if total > 0.0 {
            (money_in / total * 100.0, money_out / total * 100.0)
        } else {
            (0.0, 0.0)
        };

        Some(MoneyFlow {
            money_in,
            money_out,
            ratio,
            in_percent,
            out_percent,
        })
    }
}
