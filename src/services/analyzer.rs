//! Analysis pipeline: indicators, signals, recommendation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::services::indicators::calculate_snapshot;
use crate::services::signals::{annotate, map_signals, synthesize, ScoringTable};
use crate::types::{
    AnalysisResult, Fundamentals, InstrumentError, InstrumentOutcome, PricePoint, PriceSeries,
};

/// One instrument submitted for analysis.
///
/// Points are kept unvalidated so a bad series fails only its own entry in a
/// batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub symbol: String,
    pub points: Vec<PricePoint>,
    #[serde(default)]
    pub fundamentals: Option<Fundamentals>,
}

/// Runs the full analysis pipeline against a fixed scoring table.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    table: ScoringTable,
}

impl Analyzer {
    pub fn new(table: ScoringTable) -> Self {
        Self { table }
    }

    /// Analyze one instrument.
    pub fn analyze(
        &self,
        symbol: &str,
        series: &PriceSeries,
        fundamentals: Option<&Fundamentals>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let indicators = calculate_snapshot(series)?;
        let signals = map_signals(&indicators, &self.table);
        let fundamental_reasons = fundamentals.map(annotate).unwrap_or_default();
        let recommendation = synthesize(signals, fundamental_reasons, &self.table);

        debug!(
            "Analyzed {} over {} bars: {} ({:.2})",
            symbol,
            series.len(),
            recommendation.grade.label(),
            recommendation.score
        );

        Ok(AnalysisResult {
            symbol: symbol.to_string(),
            indicators,
            recommendation,
        })
    }

    /// Validate and analyze a raw request.
    pub fn analyze_request(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let series = PriceSeries::new(request.points)?;
        self.analyze(&request.symbol, &series, request.fundamentals.as_ref())
    }

    /// Analyze many instruments; a failure is recorded against its own
    /// symbol and never affects the others.
    pub fn analyze_batch(&self, requests: Vec<AnalysisRequest>) -> Vec<InstrumentOutcome> {
        requests
            .into_iter()
            .map(|request| {
                let symbol = request.symbol.clone();
                match self.analyze_request(request) {
                    Ok(result) => InstrumentOutcome::Analyzed(result),
                    Err(e) => {
                        warn!("Analysis failed for {}: {}", symbol, e);
                        InstrumentOutcome::Failed {
                            symbol,
                            error: InstrumentError {
                                kind: e.kind().to_string(),
                                message: e.to_string(),
                            },
                        }
                    }
                }
            })
            .collect()
    }
}
