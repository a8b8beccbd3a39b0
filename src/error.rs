use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the analysis core.
///
/// Both kinds are raised synchronously and never retried inside the core.
/// Callers analysing many instruments catch them per instrument.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Insufficient data: need at least {required} bars, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid series: {0}")]
    InvalidSeries(String),
}

impl AnalysisError {
    /// Stable machine-readable kind, used in per-instrument error records.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InsufficientData { .. } => "insufficient_data",
            AnalysisError::InvalidSeries(_) => "invalid_series",
        }
    }
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl From<JsonRejection> for AppError {
    /// Malformed or mistyped request bodies are client errors.
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Analysis(AnalysisError::InsufficientData { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Analysis(AnalysisError::InvalidSeries(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::Analysis(err) => err.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = AnalysisError::InsufficientData {
            required: 50,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: need at least 50 bars, got 12"
        );
        assert_eq!(err.kind(), "insufficient_data");
    }

    #[test]
    fn test_status_mapping() {
        let short = AppError::from(AnalysisError::InsufficientData {
            required: 50,
            actual: 1,
        });
        assert_eq!(short.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let invalid = AppError::from(AnalysisError::InvalidSeries("dates".into()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        assert_eq!(
            AppError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::NotFound("XLK".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
