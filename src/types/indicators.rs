use serde::{Deserialize, Serialize};

use super::round::{opt_two_dp, three_dp, two_dp};

/// MACD(12, 26, 9) at the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValues {
    #[serde(serialize_with = "three_dp")]
    pub value: f64,
    #[serde(serialize_with = "three_dp")]
    pub signal: f64,
    #[serde(serialize_with = "three_dp")]
    pub histogram: f64,
}

/// Trailing simple moving averages. `sma200` is absent below 200 bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    #[serde(serialize_with = "opt_two_dp")]
    pub sma20: Option<f64>,
    #[serde(serialize_with = "opt_two_dp")]
    pub sma50: Option<f64>,
    #[serde(serialize_with = "opt_two_dp")]
    pub sma200: Option<f64>,
}

/// Bollinger Bands (20, 2σ).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerValues {
    #[serde(serialize_with = "two_dp")]
    pub upper: f64,
    #[serde(serialize_with = "two_dp")]
    pub middle: f64,
    #[serde(serialize_with = "two_dp")]
    pub lower: f64,
}

impl BollingerValues {
    /// Where `price` sits inside the band: 0 at the lower band, 1 at the upper.
    /// A zero-width band reports the midpoint.
    pub fn position(&self, price: f64) -> f64 {
        let width = self.upper - self.lower;
        if width > 0.0 {
            (price - self.lower) / width
        } else {
            0.5
        }
    }
}

/// Volume-weighted typical-price flow over the trailing 14 bars.
///
/// This is a custom ratio, not the standard Money Flow Index: it reports the
/// raw in/out flows and their ratio rather than an oscillator value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyFlow {
    #[serde(serialize_with = "two_dp")]
    pub money_in: f64,
    #[serde(serialize_with = "two_dp")]
    pub money_out: f64,
    #[serde(serialize_with = "two_dp")]
    pub ratio: f64,
    #[serde(serialize_with = "two_dp")]
    pub in_percent: f64,
    #[serde(serialize_with = "two_dp")]
    pub out_percent: f64,
}

impl MoneyFlow {
    /// True when no bar in the window moved its typical price.
    pub fn is_flat(&self) -> bool {
        self.money_in + self.money_out == 0.0
    }
}

/// Most recent indicator values for a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    #[serde(serialize_with = "two_dp")]
    pub current_price: f64,
    #[serde(serialize_with = "opt_two_dp")]
    pub rsi: Option<f64>,
    pub macd: Option<MacdValues>,
    pub moving_averages: MovingAverages,
    pub bollinger_bands: Option<BollingerValues>,
    pub money_flow: Option<MoneyFlow>,
}
