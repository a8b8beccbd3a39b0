use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AnalysisError;

/// One daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    /// A `null` close deserializes as NaN so validation can name the bar.
    #[serde(deserialize_with = "nullable_price")]
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

fn nullable_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl PricePoint {
    /// Typical price: `(high + low + close) / 3`.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// First of open, high, low or volume that is NaN or infinite.
    fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("volume", self.volume),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
    }
}

/// An ordered, validated daily price history.
///
/// Dates are strictly ascending and every OHLCV value is finite. The series is
/// immutable once built; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap a list of bars.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, AnalysisError> {
        for (i, point) in points.iter().enumerate() {
            if !point.close.is_finite() {
                return Err(AnalysisError::InvalidSeries(format!(
                    "missing close price on {}",
                    point.date
                )));
            }
            if let Some(field) = point.non_finite_field() {
                return Err(AnalysisError::InvalidSeries(format!(
                    "non-finite {} on {}",
                    field, point.date
                )));
            }
            if i > 0 && points[i - 1].date >= point.date {
                return Err(AnalysisError::InvalidSeries(format!(
                    "dates not strictly ascending at {} (after {})",
                    point.date,
                    points[i - 1].date
                )));
            }
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

impl TryFrom<Vec<PricePoint>> for PriceSeries {
    type Error = AnalysisError;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn test_valid_series() {
        let series = PriceSeries::new(vec![bar(1, 10.0), bar(2, 11.0)]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![10.0, 11.0]);
        assert_eq!(series.last().unwrap().close, 11.0);
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let err = PriceSeries::new(vec![bar(1, 10.0), bar(1, 11.0)]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));
    }

    #[test]
    fn test_rejects_descending_dates() {
        let err = PriceSeries::new(vec![bar(3, 10.0), bar(2, 11.0)]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));
    }

    #[test]
    fn test_rejects_missing_close() {
        let err = PriceSeries::new(vec![bar(1, 10.0), bar(2, f64::NAN)]).unwrap_err();
        assert!(err.to_string().contains("missing close"));
    }

    #[test]
    fn test_rejects_non_finite_bar_values() {
        let mut high = bar(2, 11.0);
        high.high = f64::NAN;
        let err = PriceSeries::new(vec![bar(1, 10.0), high]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidSeries("non-finite high on 2024-01-02".to_string())
        );

        let mut low = bar(1, 10.0);
        low.low = f64::NEG_INFINITY;
        assert!(PriceSeries::new(vec![low]).is_err());

        let mut volume = bar(1, 10.0);
        volume.volume = f64::INFINITY;
        let err = PriceSeries::new(vec![volume]).unwrap_err();
        assert!(err.to_string().contains("non-finite volume"));
    }

    #[test]
    fn test_typical_price() {
        let point = bar(1, 10.0);
        assert_eq!(point.typical_price(), 10.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"date":"2024-01-02","open":1,"high":1,"low":1,"close":1,"volume":5},
            {"date":"2024-01-01","open":1,"high":1,"low":1,"close":1,"volume":5}
        ]"#;
        assert!(serde_json::from_str::<PriceSeries>(json).is_err());

        let ok = r#"[{"date":"2024-01-01","open":1,"high":2,"low":0.5,"close":1.5}]"#;
        let series: PriceSeries = serde_json::from_str(ok).unwrap();
        assert_eq!(series.points()[0].volume, 0.0);
    }

    #[test]
    fn test_null_close_is_reported_as_missing() {
        let json = r#"{"date":"2024-01-05","open":1,"high":1,"low":1,"close":null}"#;
        let point: PricePoint = serde_json::from_str(json).unwrap();
        assert!(point.close.is_nan());

        let err = PriceSeries::new(vec![point]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidSeries("missing close price on 2024-01-05".to_string())
        );
    }
}
