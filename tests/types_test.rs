//! Unit tests for types module

use quantlens::types::*;
use serde_json::json;

#[test]
fn test_fundamentals_from_camel_case_json() {
    let fundamentals: Fundamentals = serde_json::from_value(json!({
        "quoteType": "EQUITY",
        "peRatio": 31.2,
        "dividendYield": 0.5,
        "marketCap": 3.1e12
    }))
    .unwrap();

    assert_eq!(fundamentals.quote_type, QuoteType::Equity);
    assert_eq!(fundamentals.pe_ratio, Some(31.2));
    assert_eq!(fundamentals.market_cap, Some(3.1e12));
    assert!(fundamentals.beta.is_none());
    assert!(fundamentals.expense_ratio.is_none());
}

#[test]
fn test_fundamentals_unknown_quote_type() {
    let fundamentals: Fundamentals =
        serde_json::from_value(json!({ "quoteType": "INDEX" })).unwrap();
    assert_eq!(fundamentals.quote_type, QuoteType::Other);

    let empty: Fundamentals = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, Fundamentals::default());
}

#[test]
fn test_price_series_rejects_out_of_order_json() {
    let result = serde_json::from_value::<PriceSeries>(json!([
        { "date": "2024-03-02", "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0 },
        { "date": "2024-03-01", "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0 }
    ]));
    assert!(result.is_err());
}

#[test]
fn test_price_series_serializes_as_plain_list() {
    let series: PriceSeries = serde_json::from_value(json!([
        { "date": "2024-03-01", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 10.0 }
    ]))
    .unwrap();
    let json = serde_json::to_value(&series).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["date"], "2024-03-01");
}

#[test]
fn test_failed_outcome_shape() {
    let outcome = InstrumentOutcome::Failed {
        symbol: "ABC".to_string(),
        error: InstrumentError {
            kind: "invalid_series".to_string(),
            message: "Invalid series: missing close price on 2024-01-02".to_string(),
        },
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        json!({
            "symbol": "ABC",
            "error": {
                "kind": "invalid_series",
                "message": "Invalid series: missing close price on 2024-01-02"
            }
        })
    );
    assert!(outcome.is_failed());
    assert_eq!(outcome.symbol(), "ABC");
}

#[test]
fn test_snapshot_nulls_missing_indicators() {
    let snapshot = IndicatorSnapshot {
        current_price: 12.3456,
        rsi: None,
        macd: None,
        moving_averages: MovingAverages {
            sma20: Some(12.0),
            sma50: None,
            sma200: None,
        },
        bollinger_bands: None,
        money_flow: None,
    };
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["currentPrice"], 12.35);
    assert!(json["rsi"].is_null());
    assert!(json["macd"].is_null());
    assert!(json["movingAverages"]["sma200"].is_null());
    assert_eq!(json["movingAverages"]["sma20"], 12.0);
}

#[test]
fn test_sentiment_labels() {
    assert_eq!(Sentiment::NeutralBearish.label(), "Neutral-Bearish");
    assert_eq!(Grade::Sell.label(), "SELL");
    assert_eq!(IndicatorKind::Bollinger.name(), "Bollinger Bands");
}
