//! Fuses scored signals and fundamental reasons into a recommendation.

use super::table::ScoringTable;
use crate::types::{Grade, Recommendation, ScoredSignal};

/// Upper bound on the combined reason list.
pub const MAX_REASONS: usize = 5;

const MIXED_SIGNALS: &str = "Mixed technical signals suggest holding current position";
const WAIT_FOR_DIRECTION: &str = "Wait for clearer direction before adding to position";
const INSUFFICIENT_SIGNALS: &str = "Insufficient clear signals for a strong recommendation";

/// Score, grade and explain a set of signals.
pub fn synthesize(
    signals: Vec<ScoredSignal>,
    fundamental_reasons: Vec<String>,
    table: &ScoringTable,
) -> Recommendation {
    let raw: f64 = signals.iter().map(|s| s.contribution).sum();
    let score = table.normalize(raw);
    let (grade, confidence) = table.grade_for(score);

    let bullish_reasons = ranked_reasons(&signals, ScoredSignal::is_bullish);
    let bearish_reasons = ranked_reasons(&signals, ScoredSignal::is_bearish);

    let mut reasons = match grade {
        Grade::Buy => directional_reasons(
            &bullish_reasons,
            &fundamental_reasons,
            bearish_reasons.first().map(|r| format!("Caution: {}", r)),
        ),
        Grade::Sell => directional_reasons(
            &bearish_reasons,
            &fundamental_reasons,
            bullish_reasons.first().map(|r| format!("Note: {}", r)),
        ),
        Grade::Hold => hold_reasons(&bullish_reasons, &bearish_reasons, &fundamental_reasons),
    };
    reasons.truncate(MAX_REASONS);

    Recommendation {
        grade,
        confidence,
        score,
        signals: signals.into_iter().map(|s| s.signal).collect(),
        reasons,
        bullish_reasons,
        bearish_reasons,
        fundamental_reasons,
    }
}

/// Reasons of the matching signals, strongest contribution first.
fn ranked_reasons(signals: &[ScoredSignal], keep: fn(&ScoredSignal) -> bool) -> Vec<String> {
    let mut matching: Vec<&ScoredSignal> = signals.iter().filter(|s| keep(s)).collect();
    // Stable: equal magnitudes stay in indicator order.
    matching.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
    matching.into_iter().map(|s| s.reason.clone()).collect()
}

/// Fundamentals lead, then the signals that agree with the grade, then one
/// counterpoint.
fn directional_reasons(
    primary: &[String],
    fundamentals: &[String],
    counterpoint: Option<String>,
) -> Vec<String> {
    fundamentals
        .iter()
        .take(2)
        .chain(primary.iter().take(3))
        .cloned()
        .chain(counterpoint)
        .collect()
}

fn hold_reasons(bullish: &[String], bearish: &[String], fundamentals: &[String]) -> Vec<String> {
    if !fundamentals.is_empty() {
        let mut reasons: Vec<String> = fundamentals.iter().take(3).cloned().collect();
        reasons.push(MIXED_SIGNALS.to_string());
        return reasons;
    }

    if bullish.is_empty() && bearish.is_empty() {
        return vec![INSUFFICIENT_SIGNALS.to_string()];
    }

    bullish
        .first()
        .into_iter()
        .chain(bearish.first())
        .cloned()
        .chain(std::iter::once(WAIT_FOR_DIRECTION.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, IndicatorKind, Sentiment};

    fn scored(indicator: IndicatorKind, contribution: f64, reason: &str) -> ScoredSignal {
        let sentiment = if contribution > 0.0 {
            Sentiment::Bullish
        } else if contribution < 0.0 {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        };
        ScoredSignal::new(indicator, "label", sentiment, contribution, reason)
    }

    fn reasons(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strong_buy() {
        let signals = vec![
            scored(IndicatorKind::Rsi, 1.0, "rsi up"),
            scored(IndicatorKind::Macd, 0.8, "macd up"),
            scored(IndicatorKind::MovingAverages, 0.8, "ma up"),
            scored(IndicatorKind::Bollinger, -0.3, "bands down"),
        ];
        let rec = synthesize(signals, vec![], &ScoringTable::default());
        assert_eq!(rec.grade, Grade::Buy);
        assert_eq!(rec.confidence, Confidence::High);
        assert!((rec.score - 2.3 / 3.3).abs() < 1e-9);
        assert_eq!(
            rec.reasons,
            reasons(&["rsi up", "macd up", "ma up", "Caution: bands down"])
        );
        assert_eq!(rec.signals.len(), 4);
    }

    #[test]
    fn test_buy_reason_layout_with_fundamentals() {
        let signals = vec![
            scored(IndicatorKind::Rsi, 1.0, "a"),
            scored(IndicatorKind::Macd, 0.8, "b"),
            scored(IndicatorKind::MovingAverages, 0.8, "c"),
            scored(IndicatorKind::Bollinger, 0.7, "d"),
            scored(IndicatorKind::MoneyFlow, -0.4, "e"),
        ];
        let rec = synthesize(
            signals,
            reasons(&["f1", "f2", "f3"]),
            &ScoringTable::default(),
        );
        assert_eq!(rec.grade, Grade::Buy);
        // Two fundamentals, three bullish, caution; truncated to five.
        assert_eq!(rec.reasons, reasons(&["f1", "f2", "a", "b", "c"]));
        assert_eq!(rec.bullish_reasons, reasons(&["a", "b", "c", "d"]));
        assert_eq!(rec.bearish_reasons, reasons(&["e"]));
        assert_eq!(rec.fundamental_reasons, reasons(&["f1", "f2", "f3"]));
    }

    #[test]
    fn test_sell_reasons() {
        let signals = vec![
            scored(IndicatorKind::Rsi, -1.0, "rsi down"),
            scored(IndicatorKind::Macd, -0.8, "macd down"),
            scored(IndicatorKind::MovingAverages, 0.3, "ma up"),
        ];
        let rec = synthesize(signals, vec![], &ScoringTable::default());
        assert_eq!(rec.grade, Grade::Sell);
        assert_eq!(rec.confidence, Confidence::Medium);
        assert_eq!(
            rec.reasons,
            reasons(&["rsi down", "macd down", "Note: ma up"])
        );
    }

    #[test]
    fn test_sell_reasons_lead_with_fundamentals() {
        let signals = vec![
            scored(IndicatorKind::Rsi, -1.0, "rsi down"),
            scored(IndicatorKind::Macd, -0.8, "macd down"),
            scored(IndicatorKind::MovingAverages, 0.3, "ma up"),
        ];
        let rec = synthesize(signals, reasons(&["f1"]), &ScoringTable::default());
        assert_eq!(rec.grade, Grade::Sell);
        assert_eq!(
            rec.reasons,
            reasons(&["f1", "rsi down", "macd down", "Note: ma up"])
        );
    }

    #[test]
    fn test_hold_with_fundamentals() {
        let signals = vec![scored(IndicatorKind::Rsi, 0.3, "lean up")];
        let rec = synthesize(
            signals,
            reasons(&["f1", "f2", "f3", "f4"]),
            &ScoringTable::default(),
        );
        assert_eq!(rec.grade, Grade::Hold);
        assert_eq!(
            rec.reasons,
            reasons(&["f1", "f2", "f3", MIXED_SIGNALS])
        );
    }

    #[test]
    fn test_hold_with_both_directions() {
        let signals = vec![
            scored(IndicatorKind::Rsi, 0.3, "lean up"),
            scored(IndicatorKind::Macd, -0.4, "lean down"),
        ];
        let rec = synthesize(signals, vec![], &ScoringTable::default());
        assert_eq!(rec.grade, Grade::Hold);
        assert_eq!(rec.confidence, Confidence::Medium);
        assert_eq!(
            rec.reasons,
            reasons(&["lean up", "lean down", WAIT_FOR_DIRECTION])
        );
    }

    #[test]
    fn test_hold_without_any_direction() {
        let signals = vec![
            scored(IndicatorKind::Rsi, 0.0, "flat"),
            scored(IndicatorKind::Macd, 0.0, "flat"),
        ];
        let rec = synthesize(signals, vec![], &ScoringTable::default());
        assert_eq!(rec.grade, Grade::Hold);
        assert_eq!(rec.score, 0.0);
        assert_eq!(rec.reasons, reasons(&[INSUFFICIENT_SIGNALS]));
        assert!(rec.bullish_reasons.is_empty());
        assert!(rec.bearish_reasons.is_empty());
    }

    #[test]
    fn test_ties_keep_indicator_order() {
        let signals = vec![
            scored(IndicatorKind::Macd, 0.8, "macd"),
            scored(IndicatorKind::MovingAverages, 0.8, "ma"),
            scored(IndicatorKind::MoneyFlow, 0.8, "flow"),
            scored(IndicatorKind::Bollinger, 0.3, "bands"),
        ];
        let rec = synthesize(signals, vec![], &ScoringTable::default());
        assert_eq!(rec.bullish_reasons, reasons(&["macd", "ma", "flow", "bands"]));
    }

    #[test]
    fn test_score_is_clamped() {
        let signals = vec![
            scored(IndicatorKind::Rsi, -1.0, "a"),
            scored(IndicatorKind::Macd, -0.8, "b"),
            scored(IndicatorKind::MovingAverages, -0.8, "c"),
            scored(IndicatorKind::Bollinger, -0.7, "d"),
            scored(IndicatorKind::MoneyFlow, -0.8, "e"),
        ];
        let rec = synthesize(signals, vec![], &ScoringTable::default());
        assert_eq!(rec.score, -1.0);
        assert_eq!(rec.grade, Grade::Sell);
        assert_eq!(rec.confidence, Confidence::High);
        assert_eq!(rec.reasons.len(), 3);
    }
}
