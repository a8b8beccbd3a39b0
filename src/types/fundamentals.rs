use serde::{Deserialize, Serialize};

/// Instrument type as reported by the quote provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuoteType {
    #[serde(rename = "ETF")]
    Etf,
    #[serde(rename = "MUTUALFUND")]
    MutualFund,
    #[serde(rename = "EQUITY")]
    Equity,
    #[default]
    #[serde(other)]
    Other,
}

impl QuoteType {
    /// Funds are annotated on cost and size; equities on valuation.
    pub fn is_fund(&self) -> bool {
        matches!(self, QuoteType::Etf | QuoteType::MutualFund)
    }
}

/// Static fundamental attributes supplied alongside a price series.
///
/// `expense_ratio` and `dividend_yield` are percentages (0.09 means 0.09%).
/// `net_assets` and `market_cap` are in currency units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    #[serde(default)]
    pub quote_type: QuoteType,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub expense_ratio: Option<f64>,
    #[serde(default)]
    pub net_assets: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}
