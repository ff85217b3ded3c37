//! # Error Types
//!
//! Domain-specific error types for ohm-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ohm-core errors (this file)                                           │
//! │  ├── ResistorError        - Band combination cannot be decoded         │
//! │  └── ParseBandColorError  - Color name is not in the table             │
//! │                                                                         │
//! │  ohm-web errors (separate crate)                                       │
//! │  └── ApiError             - What the browser sees (serialized)         │
//! │                                                                         │
//! │  Flow: ResistorError → ApiError → Browser                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Name the offending band and color in the message
//! 3. Errors are enum variants, never String
//! 4. Each variant renders the exact sentence shown to the user

use thiserror::Error;

use crate::band::{BandColor, BandLabel};

// =============================================================================
// Resistor Error
// =============================================================================

/// Reasons a band combination cannot be decoded into a resistance.
///
/// Every variant is an expected input-validation outcome, not a fault.
/// Significant-figure variants always win over multiplier variants when both
/// apply to the same resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResistorError {
    /// Band A or B was left empty.
    #[error("Significant figure band {0} not present.")]
    MissingSignificantFigureBand(BandLabel),

    /// Band A or B is gold or silver, which carry no digit.
    #[error("Cannot convert a {1} {0} band to a significant figure.")]
    UntranslatableSignificantFigureBand(BandLabel, BandColor),

    /// Band C was left empty.
    #[error("No multiplier band found.")]
    MissingMultiplierBand,

    /// Band C is gold or silver; fractional results are not supported.
    #[error("Unhandled {0} multiplier band.")]
    UntranslatableMultiplierBand(BandColor),
}

impl ResistorError {
    /// Machine-readable code for API consumers.
    pub const fn code(&self) -> &'static str {
        match self {
            ResistorError::MissingSignificantFigureBand(_) => "MISSING_SIGNIFICANT_FIGURE_BAND",
            ResistorError::UntranslatableSignificantFigureBand(..) => {
                "UNTRANSLATABLE_SIGNIFICANT_FIGURE_BAND"
            }
            ResistorError::MissingMultiplierBand => "MISSING_MULTIPLIER_BAND",
            ResistorError::UntranslatableMultiplierBand(_) => "UNTRANSLATABLE_MULTIPLIER_BAND",
        }
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// A color name that does not appear in the band table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown band color: '{0}'. Valid options: none, black, brown, red, orange, yellow, green, blue, violet, gray, white, gold, silver")]
pub struct ParseBandColorError(pub String);

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ResistorError.
pub type ResistorResult<T> = Result<T, ResistorError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significant_figure_messages() {
        let err = ResistorError::MissingSignificantFigureBand(BandLabel::A);
        assert_eq!(err.to_string(), "Significant figure band A not present.");

        let err = ResistorError::UntranslatableSignificantFigureBand(BandLabel::B, BandColor::Silver);
        assert_eq!(
            err.to_string(),
            "Cannot convert a silver B band to a significant figure."
        );
    }

    #[test]
    fn test_multiplier_messages() {
        assert_eq!(
            ResistorError::MissingMultiplierBand.to_string(),
            "No multiplier band found."
        );
        assert_eq!(
            ResistorError::UntranslatableMultiplierBand(BandColor::Gold).to_string(),
            "Unhandled gold multiplier band."
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ResistorError::MissingMultiplierBand.code(),
            "MISSING_MULTIPLIER_BAND"
        );
        assert_eq!(
            ResistorError::UntranslatableSignificantFigureBand(BandLabel::A, BandColor::Gold).code(),
            "UNTRANSLATABLE_SIGNIFICANT_FIGURE_BAND"
        );
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = ParseBandColorError("teal".to_string());
        assert!(err.to_string().starts_with("Unknown band color: 'teal'."));
    }
}
