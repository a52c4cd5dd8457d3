//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::dto::{usage_example, ChartContext};
use crate::services::FortuneError;

/// Error response body. Auto-mode failures that happen after chart
/// computation still carry the chart so partial results survive.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
    #[serde(flatten)]
    pub context: Option<ChartContext>,
    /// Example request payloads, present on shape errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<serde_json::Value>,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Neither request shape was recognizable; reply with usage examples.
    UnknownShape,
    /// A service-level failure, possibly with an already-computed chart.
    Fortune {
        source: FortuneError,
        context: Option<ChartContext>,
    },
}

impl AppError {
    /// Wrap a service error that occurred before any chart existed.
    pub fn bare(source: FortuneError) -> Self {
        AppError::Fortune {
            source,
            context: None,
        }
    }

    /// Wrap a service error, keeping the computed chart for the client.
    pub fn with_chart(source: FortuneError, context: ChartContext) -> Self {
        AppError::Fortune {
            source,
            context: Some(context),
        }
    }

    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownShape => StatusCode::BAD_REQUEST,
            AppError::Fortune { source, .. } if source.is_input_error() => {
                StatusCode::BAD_REQUEST
            }
            AppError::Fortune { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::UnknownShape => ErrorBody {
                error: "request must supply either birth data or sun and moon signs".to_string(),
                context: None,
                usage: Some(usage_example()),
            },
            AppError::Fortune { source, context } => ErrorBody {
                error: source.to_string(),
                context,
                usage: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<FortuneError> for AppError {
    fn from(err: FortuneError) -> Self {
        AppError::bare(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_400() {
        assert_eq!(
            AppError::bare(FortuneError::MissingField("year")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::UnknownShape.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn downstream_errors_map_to_500() {
        assert_eq!(
            AppError::bare(FortuneError::CredentialMissing).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::bare(FortuneError::ResponseFormat {
                snippet: "gibberish".to_string()
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unknown_shape_body_carries_usage_examples() {
        let response = AppError::UnknownShape.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
