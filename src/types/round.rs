//! Display rounding applied only when values are serialized.
//!
//! Scoring always runs on full-precision values; these helpers are wired in
//! with `#[serde(serialize_with = ...)]` on the output types.

use serde::Serializer;

/// Round half away from zero to a fixed number of decimals.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

pub fn two_dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 2))
}

pub fn three_dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 3))
}

pub fn opt_two_dp<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_some(&round_to(*v, 2)),
        None => serializer.serialize_none(),
    }
}
