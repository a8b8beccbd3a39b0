//! Scoring thresholds and weights.
//!
//! The constants are hand-tuned; keeping them as data lets them be tested and
//! tuned without touching the mapping logic.

use serde::{Deserialize, Serialize};

use crate::types::{Confidence, Grade};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsiRule {
    /// Strictly below: oversold.
    pub oversold: f64,
    /// Strictly below (and not oversold): leaning bullish.
    pub lean_bullish_below: f64,
    /// At or below (and not leaning bullish): neutral.
    pub neutral_up_to: f64,
    /// Strictly above: overbought.
    pub overbought: f64,
    pub extreme_weight: f64,
    pub lean_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdRule {
    pub crossover_weight: f64,
    pub momentum_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRule {
    /// Price, SMA 20 and SMA 50 stacked in one direction.
    pub stacked_weight: f64,
    /// Price merely on one side of SMA 50.
    pub bias_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandRule {
    pub lower_zone: f64,
    pub lower_half: f64,
    pub upper_half: f64,
    pub upper_zone: f64,
    pub extreme_weight: f64,
    pub lean_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRule {
    pub strong_inflow: f64,
    pub inflow: f64,
    pub outflow: f64,
    pub strong_outflow: f64,
    pub strong_weight: f64,
    pub weight: f64,
}

/// Normalized score strictly above `above` maps to this grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    pub above: f64,
    pub grade: Grade,
    pub confidence: Confidence,
}

/// Every threshold and weight used to turn indicators into a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringTable {
    pub rsi: RsiRule,
    pub macd: MacdRule,
    pub moving_averages: TrendRule,
    pub bollinger: BandRule,
    pub money_flow: FlowRule,
    /// Raw score is divided by this before clamping to [-1, 1].
    pub normalization_divisor: f64,
    /// Checked in order; first match wins.
    pub grade_bands: Vec<GradeBand>,
    /// Used when no band matches.
    pub floor_grade: Grade,
    pub floor_confidence: Confidence,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            rsi: RsiRule {
                oversold: 30.0,
                lean_bullish_below: 45.0,
                neutral_up_to: 55.0,
                overbought: 70.0,
                extreme_weight: 1.0,
                lean_weight: 0.3,
            },
            macd: MacdRule {
                crossover_weight: 0.8,
                momentum_weight: 0.4,
            },
            moving_averages: TrendRule {
                stacked_weight: 0.8,
                bias_weight: 0.3,
            },
            bollinger: BandRule {
                lower_zone: 0.2,
                lower_half: 0.4,
                upper_half: 0.6,
                upper_zone: 0.8,
                extreme_weight: 0.7,
                lean_weight: 0.3,
            },
            money_flow: FlowRule {
                strong_inflow: 2.0,
                inflow: 1.2,
                outflow: 0.8,
                strong_outflow: 0.5,
                strong_weight: 0.8,
                weight: 0.4,
            },
            normalization_divisor: 3.3,
            // BUY has two tiers, HOLD three and SELL two; the asymmetry is intended.
            grade_bands: vec![
                band(0.5, Grade::Buy, Confidence::High),
                band(0.25, Grade::Buy, Confidence::Medium),
                band(0.1, Grade::Hold, Confidence::Low),
                band(-0.1, Grade::Hold, Confidence::Medium),
                band(-0.25, Grade::Hold, Confidence::Low),
                band(-0.5, Grade::Sell, Confidence::Medium),
            ],
            floor_grade: Grade::Sell,
            floor_confidence: Confidence::High,
        }
    }
}

fn band(above: f64, grade: Grade, confidence: Confidence) -> GradeBand {
    GradeBand {
        above,
        grade,
        confidence,
    }
}

impl ScoringTable {
    /// Normalize a raw contribution sum into [-1, 1].
    pub fn normalize(&self, raw: f64) -> f64 {
        (raw / self.normalization_divisor).clamp(-1.0, 1.0)
    }

    /// Grade and confidence for a normalized score.
    pub fn grade_for(&self, score: f64) -> (Grade, Confidence) {
        self.grade_bands
            .iter()
            .find(|b| score > b.above)
            .map(|b| (b.grade, b.confidence))
            .unwrap_or((self.floor_grade, self.floor_confidence))
    }
}
