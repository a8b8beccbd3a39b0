use serde::{Deserialize, Serialize};

use super::indicators::IndicatorSnapshot;
use super::round::two_dp;

/// Directional reading of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentiment {
    Bullish,
    NeutralBullish,
    Neutral,
    NeutralBearish,
    Bearish,
}

impl Sentiment {
    /// Get display label for this sentiment.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "Bullish",
            Sentiment::NeutralBullish => "Neutral-Bullish",
            Sentiment::Neutral => "Neutral",
            Sentiment::NeutralBearish => "Neutral-Bearish",
            Sentiment::Bearish => "Bearish",
        }
    }
}

/// Indicator a signal was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "MACD")]
    Macd,
    #[serde(rename = "Moving Averages")]
    MovingAverages,
    #[serde(rename = "Bollinger Bands")]
    Bollinger,
    #[serde(rename = "Money Flow")]
    MoneyFlow,
}

impl IndicatorKind {
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::MovingAverages => "Moving Averages",
            IndicatorKind::Bollinger => "Bollinger Bands",
            IndicatorKind::MoneyFlow => "Money Flow",
        }
    }
}

/// A discrete, human-facing signal derived from one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub indicator: IndicatorKind,
    pub label: String,
    pub sentiment: Sentiment,
}

/// A signal together with its score contribution and explanation.
///
/// Only `signal` leaves the engine; the contribution feeds the score and the
/// reason feeds the recommendation text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSignal {
    pub signal: Signal,
    pub contribution: f64,
    pub reason: String,
}

impl ScoredSignal {
    pub fn new(
        indicator: IndicatorKind,
        label: impl Into<String>,
        sentiment: Sentiment,
        contribution: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            signal: Signal {
                indicator,
                label: label.into(),
                sentiment,
            },
            contribution,
            reason: reason.into(),
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.contribution > 0.0
    }

    pub fn is_bearish(&self) -> bool {
        self.contribution < 0.0
    }
}

/// Recommendation grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Buy,
    Hold,
    Sell,
}

impl Grade {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Buy => "BUY",
            Grade::Hold => "HOLD",
            Grade::Sell => "SELL",
        }
    }
}

/// Confidence tier attached to a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Composite recommendation for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub grade: Grade,
    pub confidence: Confidence,
    /// Normalized score in [-1, 1].
    #[serde(serialize_with = "two_dp")]
    pub score: f64,
    pub signals: Vec<Signal>,
    /// At most five reasons, most important first.
    pub reasons: Vec<String>,
    pub bullish_reasons: Vec<String>,
    pub bearish_reasons: Vec<String>,
    pub fundamental_reasons: Vec<String>,
}

/// Full analysis output for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub symbol: String,
    pub indicators: IndicatorSnapshot,
    pub recommendation: Recommendation,
}

/// Error record substituted for an instrument whose analysis failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentError {
    pub kind: String,
    pub message: String,
}

/// Outcome of one instrument in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstrumentOutcome {
    Analyzed(AnalysisResult),
    Failed {
        symbol: String,
        error: InstrumentError,
    },
}

impl InstrumentOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            InstrumentOutcome::Analyzed(result) => &result.symbol,
            InstrumentOutcome::Failed { symbol, .. } => symbol,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, InstrumentOutcome::Failed { .. })
    }
}
