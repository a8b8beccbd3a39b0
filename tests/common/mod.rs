//! Series builders shared by the integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use quantlens::types::{PricePoint, PriceSeries};

/// Daily bars one calendar day apart, high/low one point either side of the close.
pub fn bars(closes: &[f64]) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: start + Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000_000.0,
        })
        .collect()
}

pub fn series(closes: &[f64]) -> PriceSeries {
    PriceSeries::new(bars(closes)).unwrap()
}

/// Start at `start`, step by `step` for `len` bars.
pub fn line(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Continue `closes` by `count` bars of `step` each.
pub fn extend(mut closes: Vec<f64>, step: f64, count: usize) -> Vec<f64> {
    let mut last = *closes.last().unwrap();
    for _ in 0..count {
        last += step;
        closes.push(last);
    }
    closes
}

/// Steady uptrend that pulls back and then resumes.
pub fn resuming_uptrend() -> Vec<f64> {
    extend(extend(line(100.0, 0.5, 283), -1.0, 10), 1.0, 7)
}

/// Mirror image of [`resuming_uptrend`].
pub fn resuming_downtrend() -> Vec<f64> {
    extend(extend(line(200.0, -0.5, 283), 1.0, 10), -1.0, 7)
}

/// Tight oscillation around 100.
pub fn flat_oscillation(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 100.0 + 0.3 * (2.0 * std::f64::consts::PI * i as f64 / 13.0).sin())
        .collect()
}

/// Long decline followed by a sharp `rally`-bar recovery.
pub fn v_shape(rally: usize) -> Vec<f64> {
    extend(line(150.0, -0.3, 300 - rally), 1.5, rally)
}
