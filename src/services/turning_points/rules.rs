//! Trend state and the detection rules evaluated against it.

use crate::services::indicators::{sma, Rsi};
use crate::types::{SectorMetrics, TrendDirection};

/// Bars between the "now" and "before" snapshots.
pub const LOOKBACK_BARS: usize = 5;
/// Bars treated as one trading month.
pub const MONTH_BARS: usize = 21;
/// Cap on the summed rule strength.
pub const MAX_STRENGTH: f64 = 5.0;

const MIN_TREND_BARS: usize = 50;
const RSI_PERIOD: usize = 14;
const RSI_OVERSOLD: f64 = 30.0;
const RSI_OVERBOUGHT: f64 = 70.0;
const WEEKLY_SHIFT_PCT: f64 = 3.0;

/// Moving averages at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub sma10: f64,
    pub sma20: f64,
    pub sma50: f64,
}

impl Averages {
    fn over(closes: &[f64]) -> Option<Self> {
        Some(Self {
            sma10: sma(closes, 10)?,
            sma20: sma(closes, 20)?,
            sma50: sma(closes, 50)?,
        })
    }
}

/// Moving averages five bars earlier.
///
/// SMA 50 is absent until the history is 55 bars long; only the 20/50 cross
/// needs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookback {
    pub sma10: f64,
    pub sma20: f64,
    pub sma50: Option<f64>,
}

impl Lookback {
    fn over(closes: &[f64]) -> Option<Self> {
        Some(Self {
            sma10: sma(closes, 10)?,
            sma20: sma(closes, 20)?,
            sma50: sma(closes, 50),
        })
    }
}

/// Everything the rules look at for one sector.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendState {
    pub now: Averages,
    pub before: Lookback,
    pub current_price: f64,
    /// Close five bars earlier.
    pub price_before: f64,
    pub today_change: f64,
    pub week_change: f64,
    pub month_change: f64,
    pub rsi: f64,
}

impl TrendState {
    /// Build the state from closing prices.
    ///
    /// `None` below 50 bars or when a reference close is not positive.
    pub fn from_closes(closes: &[f64]) -> Option<Self> {
        let n = closes.len();
        if n < MIN_TREND_BARS {
            return None;
        }

        let current_price = closes[n - 1];
        let prior = closes[n - 2];
        let price_before = closes[n - 1 - LOOKBACK_BARS];
        let month_ago = closes[n - 1 - MONTH_BARS];

        Some(Self {
            now: Averages::over(closes)?,
            before: Lookback::over(&closes[..n - LOOKBACK_BARS])?,
            current_price,
            price_before,
            today_change: pct_change(prior, current_price)?,
            week_change: pct_change(price_before, current_price)?,
            month_change: pct_change(month_ago, current_price)?,
            rsi: Rsi::simple(closes, RSI_PERIOD)?,
        })
    }

    /// SMA 20 above SMA 50.
    pub fn in_uptrend(&self) -> bool {
        self.now.sma20 > self.now.sma50
    }

    pub fn metrics(&self) -> SectorMetrics {
        SectorMetrics {
            current_price: self.current_price,
            today_change: self.today_change,
            one_week_change: self.week_change,
            one_month_change: self.month_change,
            rsi: self.rsi,
            sma20: self.now.sma20,
            sma50: self.now.sma50,
        }
    }
}

fn pct_change(from: f64, to: f64) -> Option<f64> {
    if from > 0.0 && to.is_finite() {
        Some((to - from) / from * 100.0)
    } else {
        None
    }
}

/// A rule that fired.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleHit {
    pub kind: &'static str,
    pub description: String,
    pub direction: TrendDirection,
    pub strength: f64,
}

impl RuleHit {
    fn new(
        kind: &'static str,
        description: impl Into<String>,
        direction: TrendDirection,
        strength: f64,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            direction,
            strength,
        }
    }
}

/// Crossing of a fast series over a slow one between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cross {
    Up,
    Down,
}

fn cross(fast_before: f64, slow_before: f64, fast_now: f64, slow_now: f64) -> Option<Cross> {
    if fast_before <= slow_before && fast_now > slow_now {
        Some(Cross::Up)
    } else if fast_before >= slow_before && fast_now < slow_now {
        Some(Cross::Down)
    } else {
        None
    }
}

/// Evaluate every rule in order. The order matters: the first hit decides
/// the alert direction.
pub fn evaluate(state: &TrendState) -> Vec<RuleHit> {
    [
        short_cross(state),
        long_cross(state),
        oversold(state),
        overbought(state),
        momentum_shift(state),
        price_vs_sma20(state),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn short_cross(s: &TrendState) -> Option<RuleHit> {
    let hit = match cross(s.before.sma10, s.before.sma20, s.now.sma10, s.now.sma20)? {
        Cross::Up if s.in_uptrend() => RuleHit::new(
            "Momentum Alignment",
            "10-day MA crossed above 20-day MA in line with the 20/50 uptrend",
            TrendDirection::Bullish,
            2.0,
        ),
        Cross::Up => RuleHit::new(
            "Golden Cross (10/20)",
            "10-day MA crossed above 20-day MA",
            TrendDirection::Bullish,
            2.0,
        ),
        Cross::Down if !s.in_uptrend() => RuleHit::new(
            "Momentum Alignment",
            "10-day MA crossed below 20-day MA in line with the 20/50 downtrend",
            TrendDirection::Bearish,
            2.0,
        ),
        Cross::Down => RuleHit::new(
            "Death Cross (10/20)",
            "10-day MA crossed below 20-day MA",
            TrendDirection::Bearish,
            2.0,
        ),
    };
    Some(hit)
}

fn long_cross(s: &TrendState) -> Option<RuleHit> {
    let sma50_before = s.before.sma50?;
    let hit = match cross(s.before.sma20, sma50_before, s.now.sma20, s.now.sma50)? {
        Cross::Up => RuleHit::new(
            "Golden Cross (20/50)",
            "20-day MA crossed above 50-day MA",
            TrendDirection::Bullish,
            3.0,
        ),
        Cross::Down => RuleHit::new(
            "Death Cross (20/50)",
            "20-day MA crossed below 50-day MA",
            TrendDirection::Bearish,
            3.0,
        ),
    };
    Some(hit)
}

fn oversold(s: &TrendState) -> Option<RuleHit> {
    if s.rsi >= RSI_OVERSOLD {
        return None;
    }

    let hit = if s.today_change > 0.0 {
        let kind = if s.in_uptrend() {
            "Dip Recovery"
        } else {
            "RSI Reversal"
        };
        RuleHit::new(
            kind,
            format!("RSI at {:.1} turning up from oversold", s.rsi),
            TrendDirection::Bullish,
            2.0,
        )
    } else {
        RuleHit::new(
            "Deep Oversold",
            format!("RSI at {:.1} with no bounce yet", s.rsi),
            TrendDirection::Neutral,
            0.5,
        )
    };
    Some(hit)
}

fn overbought(s: &TrendState) -> Option<RuleHit> {
    if s.rsi <= RSI_OVERBOUGHT {
        return None;
    }

    let hit = if s.today_change < 0.0 {
        let kind = if s.in_uptrend() {
            "RSI Trend Exhaustion"
        } else {
            "Trend Resume Down"
        };
        RuleHit::new(
            kind,
            format!("RSI at {:.1} turning down from overbought", s.rsi),
            TrendDirection::Bearish,
            2.0,
        )
    } else {
        RuleHit::new(
            "Extreme Overbought",
            format!("RSI at {:.1} still pressing higher", s.rsi),
            TrendDirection::Neutral,
            0.5,
        )
    };
    Some(hit)
}

fn momentum_shift(s: &TrendState) -> Option<RuleHit> {
    if s.week_change > WEEKLY_SHIFT_PCT && s.month_change < 0.0 {
        Some(RuleHit::new(
            "Momentum Shift Up",
            format!(
                "Up {:.1}% this week against a {:.1}% monthly decline",
                s.week_change, s.month_change
            ),
            TrendDirection::Bullish,
            2.0,
        ))
    } else if s.week_change < -WEEKLY_SHIFT_PCT && s.month_change > 0.0 {
        Some(RuleHit::new(
            "Momentum Shift Down",
            format!(
                "Down {:.1}% this week against a {:.1}% monthly gain",
                s.week_change.abs(),
                s.month_change
            ),
            TrendDirection::Bearish,
            2.0,
        ))
    } else {
        None
    }
}

fn price_vs_sma20(s: &TrendState) -> Option<RuleHit> {
    let hit = match cross(s.price_before, s.before.sma20, s.current_price, s.now.sma20)? {
        Cross::Up if s.in_uptrend() => RuleHit::new(
            "Trend Continuation",
            "Price reclaimed its 20-day MA within an uptrend",
            TrendDirection::Bullish,
            1.0,
        ),
        Cross::Up => RuleHit::new(
            "Breakout",
            "Price broke above its 20-day MA",
            TrendDirection::Bullish,
            1.0,
        ),
        Cross::Down if !s.in_uptrend() => RuleHit::new(
            "Trend Continuation",
            "Price lost its 20-day MA within a downtrend",
            TrendDirection::Bearish,
            1.0,
        ),
        Cross::Down => RuleHit::new(
            "Breakdown",
            "Price broke below its 20-day MA",
            TrendDirection::Bearish,
            1.0,
        ),
    };
    Some(hit)
}
