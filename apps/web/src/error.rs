//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ohm-web                                │
//! │                                                                         │
//! │  GET /api/resistance?a=gold&b=gray                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<Json<T>, ApiError>                                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown color? ─── ParseBandColorError ─────── 400 ──┐         │  │
//! │  │         │                                             │         │  │
//! │  │         ▼                                             ▼         │  │
//! │  │  Bad bands? ─────── ResistorError ───────────── 422 ─ ApiError ►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {                                                                      │
//! │    "code": "UNTRANSLATABLE_SIGNIFICANT_FIGURE_BAND",                    │
//! │    "message": "Cannot convert a gold A band to a significant figure."   │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ohm_core::{ParseBandColorError, ResistorError};
use serde::Serialize;

/// API error returned from JSON handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "MISSING_MULTIPLIER_BAND",
///   "message": "No multiplier band found."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A band name is not a known color (400)
    InvalidBandColor,

    /// Significant figure band A or B is absent (422)
    MissingSignificantFigureBand,

    /// Significant figure band is gold or silver (422)
    UntranslatableSignificantFigureBand,

    /// Multiplier band C is absent (422)
    MissingMultiplierBand,

    /// Multiplier band is gold or silver (422)
    UntranslatableMultiplierBand,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status carried by this code.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidBandColor => StatusCode::BAD_REQUEST,
            ErrorCode::MissingSignificantFigureBand
            | ErrorCode::UntranslatableSignificantFigureBand
            | ErrorCode::MissingMultiplierBand
            | ErrorCode::UntranslatableMultiplierBand => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts calculator errors to API errors, keeping the message verbatim.
impl From<ResistorError> for ApiError {
    fn from(err: ResistorError) -> Self {
        let code = match err {
            ResistorError::MissingSignificantFigureBand(_) => ErrorCode::MissingSignificantFigureBand,
            ResistorError::UntranslatableSignificantFigureBand(..) => {
                ErrorCode::UntranslatableSignificantFigureBand
            }
            ResistorError::MissingMultiplierBand => ErrorCode::MissingMultiplierBand,
            ResistorError::UntranslatableMultiplierBand(_) => ErrorCode::UntranslatableMultiplierBand,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<ParseBandColorError> for ApiError {
    fn from(err: ParseBandColorError) -> Self {
        ApiError::new(ErrorCode::InvalidBandColor, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.code == ErrorCode::Internal {
            tracing::error!(message = %self.message, "Internal error");
        }
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
