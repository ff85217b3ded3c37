//! # Resistance Handlers
//!
//! Decode submitted bands through `ohm-core` and render the outcome.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /resistance (form)          GET /api/resistance?a=..&b=..        │
//! │         │                                  │                            │
//! │         ▼                                  ▼                            │
//! │  parse_bands() ── unknown color? ──► 400 fragment / 400 ApiError       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  decode() ── span with request_id ──► ohm_core::calculate              │
//! │         │                                                               │
//! │         ├── Ok(ohms)  ──► "Resistance: 4.7 kΩ" / { ohms, display }     │
//! │         └── Err(e)    ──► message verbatim    / 422 ApiError           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Form, Query};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use ohm_core::{
    calculate, format_ohms, BandColor, ParseBandColorError, ResistorResult, BAND_COUNT,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::error::ApiError;
use crate::views;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Fields posted by the band form. Missing fields are unselected bands.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BandForm {
    #[serde(default)]
    pub band_a: String,
    #[serde(default)]
    pub band_b: String,
    #[serde(default)]
    pub band_c: String,
    #[serde(default)]
    pub band_d: String,
}

/// Query string of the JSON endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BandQuery {
    #[serde(default)]
    pub a: String,
    #[serde(default)]
    pub b: String,
    #[serde(default)]
    pub c: String,
    #[serde(default)]
    pub d: String,
}

/// Successful JSON response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResistanceResponse {
    /// Nominal resistance in ohms.
    pub ohms: i64,
    /// The same value with an SI prefix, e.g. "4.7 kΩ".
    pub display: String,
    pub bands: [BandColor; BAND_COUNT],
}

fn parse_bands(names: [&str; BAND_COUNT]) -> Result<[BandColor; BAND_COUNT], ParseBandColorError> {
    let [a, b, c, d] = names;
    Ok([a.parse()?, b.parse()?, c.parse()?, d.parse()?])
}

/// Runs one calculation inside its own request span.
fn decode(bands: [BandColor; BAND_COUNT]) -> ResistorResult<i64> {
    let request_id = Uuid::new_v4();
    let span = info_span!("calculate", %request_id);
    let _enter = span.enter();

    let [a, b, c, d] = bands;
    let outcome = calculate(a, b, c, d);

    match &outcome {
        Ok(ohms) => info!(band_a = %a, band_b = %b, band_c = %c, band_d = %d, ohms, "Resistance calculated"),
        Err(err) => debug!(band_a = %a, band_b = %b, band_c = %c, code = err.code(), %err, "Bands rejected"),
    }

    outcome
}

// =============================================================================
// Handlers
// =============================================================================

/// Renders the result fragment for a form submission.
pub async fn resistance_form(Form(form): Form<BandForm>) -> (StatusCode, Html<String>) {
    match parse_bands([
        form.band_a.as_str(),
        form.band_b.as_str(),
        form.band_c.as_str(),
        form.band_d.as_str(),
    ]) {
        Ok(bands) => (
            StatusCode::OK,
            Html(views::resistance_fragment(&decode(bands))),
        ),
        Err(err) => {
            debug!(%err, "Unparseable band in form");
            (StatusCode::BAD_REQUEST, Html(views::invalid_band_fragment(&err)))
        }
    }
}

/// JSON variant of the calculation.
pub async fn resistance_api(
    Query(query): Query<BandQuery>,
) -> Result<Json<ResistanceResponse>, ApiError> {
    let bands = parse_bands([query.a.as_str(), query.b.as_str(), query.c.as_str(), query.d.as_str()])?;
    let ohms = decode(bands)?;

    Ok(Json(ResistanceResponse {
        ohms,
        display: format_ohms(ohms),
        bands,
    }))
}
