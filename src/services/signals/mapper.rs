//! Maps indicator readings to discrete signals.

use super::table::ScoringTable;
use crate::types::{
    BollingerValues, IndicatorKind, IndicatorSnapshot, MacdValues, MoneyFlow, ScoredSignal,
    Sentiment,
};

/// Derive one signal per available indicator.
///
/// Order is fixed (RSI, MACD, moving averages, Bollinger, money flow) so ties
/// in later ranking resolve the same way on every call. Indicators missing
/// from the snapshot produce nothing.
pub fn map_signals(snapshot: &IndicatorSnapshot, table: &ScoringTable) -> Vec<ScoredSignal> {
    let price = snapshot.current_price;
    let ma = &snapshot.moving_averages;

    let trend = match (ma.sma20, ma.sma50) {
        (Some(sma20), Some(sma50)) => Some(trend_signal(price, sma20, sma50, table)),
        _ => None,
    };

    [
        snapshot.rsi.map(|rsi| rsi_signal(rsi, table)),
        snapshot.macd.as_ref().map(|m| macd_signal(m, table)),
        trend,
        snapshot
            .bollinger_bands
            .as_ref()
            .map(|b| band_signal(price, b, table)),
        snapshot.money_flow.as_ref().map(|f| flow_signal(f, table)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn rsi_signal(rsi: f64, table: &ScoringTable) -> ScoredSignal {
    let rule = &table.rsi;
    let kind = IndicatorKind::Rsi;

    if rsi < rule.oversold {
        ScoredSignal::new(
            kind,
            "Oversold",
            Sentiment::Bullish,
            rule.extreme_weight,
            format!("RSI at {:.1} indicates oversold conditions", rsi),
        )
    } else if rsi < rule.lean_bullish_below {
        ScoredSignal::new(
            kind,
            "Approaching Oversold",
            Sentiment::NeutralBullish,
            rule.lean_weight,
            format!("RSI at {:.1} leans toward oversold", rsi),
        )
    } else if rsi <= rule.neutral_up_to {
        ScoredSignal::new(
            kind,
            "Neutral",
            Sentiment::Neutral,
            0.0,
            format!("RSI at {:.1} is neutral", rsi),
        )
    } else if rsi <= rule.overbought {
        ScoredSignal::new(
            kind,
            "Approaching Overbought",
            Sentiment::NeutralBearish,
            -rule.lean_weight,
            format!("RSI at {:.1} leans toward overbought", rsi),
        )
    } else {
        ScoredSignal::new(
            kind,
            "Overbought",
            Sentiment::Bearish,
            -rule.extreme_weight,
            format!("RSI at {:.1} indicates overbought conditions", rsi),
        )
    }
}

fn macd_signal(macd: &MacdValues, table: &ScoringTable) -> ScoredSignal {
    let rule = &table.macd;
    let kind = IndicatorKind::Macd;

    if macd.histogram > 0.0 && macd.value > macd.signal {
        ScoredSignal::new(
            kind,
            "Bullish Crossover",
            Sentiment::Bullish,
            rule.crossover_weight,
            "MACD above signal line with positive histogram",
        )
    } else if macd.histogram > 0.0 {
        ScoredSignal::new(
            kind,
            "Positive Momentum",
            Sentiment::NeutralBullish,
            rule.momentum_weight,
            "MACD histogram is positive",
        )
    } else if macd.histogram < 0.0 && macd.value < macd.signal {
        ScoredSignal::new(
            kind,
            "Bearish Crossover",
            Sentiment::Bearish,
            -rule.crossover_weight,
            "MACD below signal line with negative histogram",
        )
    } else if macd.histogram < 0.0 {
        ScoredSignal::new(
            kind,
            "Negative Momentum",
            Sentiment::NeutralBearish,
            -rule.momentum_weight,
            "MACD histogram is negative",
        )
    } else {
        ScoredSignal::new(
            kind,
            "Flat",
            Sentiment::Neutral,
            0.0,
            "MACD is flat against its signal line",
        )
    }
}

fn trend_signal(price: f64, sma20: f64, sma50: f64, table: &ScoringTable) -> ScoredSignal {
    let rule = &table.moving_averages;
    let kind = IndicatorKind::MovingAverages;

    if price > sma20 && sma20 > sma50 {
        ScoredSignal::new(
            kind,
            "Strong Uptrend",
            Sentiment::Bullish,
            rule.stacked_weight,
            "Price above rising 20-day and 50-day moving averages",
        )
    } else if price > sma50 {
        ScoredSignal::new(
            kind,
            "Above 50-day MA",
            Sentiment::NeutralBullish,
            rule.bias_weight,
            "Price holding above its 50-day moving average",
        )
    } else if price < sma20 && sma20 < sma50 {
        ScoredSignal::new(
            kind,
            "Strong Downtrend",
            Sentiment::Bearish,
            -rule.stacked_weight,
            "Price below falling 20-day and 50-day moving averages",
        )
    } else if price < sma50 {
        ScoredSignal::new(
            kind,
            "Below 50-day MA",
            Sentiment::NeutralBearish,
            -rule.bias_weight,
            "Price trading below its 50-day moving average",
        )
    } else {
        ScoredSignal::new(
            kind,
            "Consolidating",
            Sentiment::Neutral,
            0.0,
            "Price sitting on its moving averages",
        )
    }
}

fn band_signal(price: f64, bands: &BollingerValues, table: &ScoringTable) -> ScoredSignal {
    let rule = &table.bollinger;
    let kind = IndicatorKind::Bollinger;
    let position = bands.position(price);

    if position < rule.lower_zone {
        ScoredSignal::new(
            kind,
            "Near Lower Band",
            Sentiment::Bullish,
            rule.extreme_weight,
            "Price near lower Bollinger Band, potential bounce",
        )
    } else if position < rule.lower_half {
        ScoredSignal::new(
            kind,
            "Lower Half",
            Sentiment::NeutralBullish,
            rule.lean_weight,
            "Price in the lower half of its Bollinger Bands",
        )
    } else if position <= rule.upper_half {
        ScoredSignal::new(
            kind,
            "Mid Band",
            Sentiment::Neutral,
            0.0,
            "Price near the middle Bollinger Band",
        )
    } else if position <= rule.upper_zone {
        ScoredSignal::new(
            kind,
            "Upper Half",
            Sentiment::NeutralBearish,
            -rule.lean_weight,
            "Price in the upper half of its Bollinger Bands",
        )
    } else {
        ScoredSignal::new(
            kind,
            "Near Upper Band",
            Sentiment::Bearish,
            -rule.extreme_weight,
            "Price near upper Bollinger Band, potential pullback",
        )
    }
}

fn flow_signal(flow: &MoneyFlow, table: &ScoringTable) -> ScoredSignal {
    let rule = &table.money_flow;
    let kind = IndicatorKind::MoneyFlow;
    let ratio = flow.ratio;

    if flow.is_flat() {
        ScoredSignal::new(
            kind,
            "No Flow",
            Sentiment::Neutral,
            0.0,
            "No money flow over the last 14 sessions",
        )
    } else if ratio >= rule.strong_inflow {
        ScoredSignal::new(
            kind,
            "Strong Inflow",
            Sentiment::Bullish,
            rule.strong_weight,
            format!(
                "Strong buying pressure: {:.0}% of money flow is inbound",
                flow.in_percent
            ),
        )
    } else if ratio >= rule.inflow {
        ScoredSignal::new(
            kind,
            "Inflow",
            Sentiment::NeutralBullish,
            rule.weight,
            format!("Money flowing in (ratio {:.2})", ratio),
        )
    } else if ratio <= rule.strong_outflow {
        ScoredSignal::new(
            kind,
            "Strong Outflow",
            Sentiment::Bearish,
            -rule.strong_weight,
            format!(
                "Strong selling pressure: {:.0}% of money flow is outbound",
                flow.out_percent
            ),
        )
    } else if ratio <= rule.outflow {
        ScoredSignal::new(
            kind,
            "Outflow",
            Sentiment::NeutralBearish,
            -rule.weight,
            format!("Money flowing out (ratio {:.2})", ratio),
        )
    } else {
        ScoredSignal::new(
            kind,
            "Balanced Flow",
            Sentiment::Neutral,
            0.0,
            format!("Money flow balanced (ratio {:.2})", ratio),
        )
    }
}
