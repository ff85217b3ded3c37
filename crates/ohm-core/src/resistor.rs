//! # Resistor Module
//!
//! Decodes the nominal resistance of a four-band resistor.
//!
//! ## Decoding Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Resistance Calculation                             │
//! │                                                                         │
//! │  Bands: A  B  C  D                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  A = black, B = none, C = none? ──► 0 Ω (zero-ohm marking)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Step 1: Significant figures                                           │
//! │  ├── A missing? → MissingSignificantFigureBand(A)                      │
//! │  ├── B missing? → MissingSignificantFigureBand(B)                      │
//! │  ├── A gold/silver? → UntranslatableSignificantFigureBand(A, color)    │
//! │  ├── B gold/silver? → UntranslatableSignificantFigureBand(B, color)    │
//! │  └── sig = 10 × digit(A) + digit(B)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Step 2: Multiplier                                                    │
//! │  ├── C missing? → MissingMultiplierBand                                │
//! │  ├── C gold/silver? → UntranslatableMultiplierBand(color)              │
//! │  └── mult = 10 ^ digit(C)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Result: sig × mult (i64, up to 99 000 000 000 Ω)                      │
//! │                                                                         │
//! │  Band D (tolerance) is carried along but never read.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ohm_core::{calculate, BandColor};
//!
//! let ohms = calculate(
//!     BandColor::Yellow,
//!     BandColor::Violet,
//!     BandColor::Red,
//!     BandColor::Gold,
//! ).unwrap();
//! assert_eq!(ohms, 4700);
//! ```

use serde::{Deserialize, Serialize};

use crate::band::{BandColor, BandLabel};
use crate::error::{ResistorError, ResistorResult};

// =============================================================================
// Resistor
// =============================================================================

/// A discrete four-band resistor, described by its band colors.
///
/// Built once per calculation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Resistor {
    band_a: BandColor,
    band_b: BandColor,
    band_c: BandColor,
    band_d: BandColor,
}

impl Resistor {
    /// Creates a resistor from its four bands, read left to right.
    #[inline]
    pub const fn new(band_a: BandColor, band_b: BandColor, band_c: BandColor, band_d: BandColor) -> Self {
        Resistor {
            band_a,
            band_b,
            band_c,
            band_d,
        }
    }

    /// Returns the four bands in order A, B, C, D.
    #[inline]
    pub const fn bands(&self) -> [BandColor; 4] {
        [self.band_a, self.band_b, self.band_c, self.band_d]
    }

    /// Returns the tolerance band (D).
    #[inline]
    pub const fn tolerance_band(&self) -> BandColor {
        self.band_d
    }

    /// Decodes the nominal resistance in ohms.
    ///
    /// ## Example
    /// ```rust
    /// use ohm_core::{BandColor, BandLabel, Resistor, ResistorError};
    ///
    /// let zero = Resistor::new(BandColor::Black, BandColor::None, BandColor::None, BandColor::None);
    /// assert_eq!(zero.resistance(), Ok(0));
    ///
    /// let broken = Resistor::new(BandColor::None, BandColor::Gray, BandColor::None, BandColor::None);
    /// assert_eq!(
    ///     broken.resistance(),
    ///     Err(ResistorError::MissingSignificantFigureBand(BandLabel::A))
    /// );
    /// ```
    pub fn resistance(&self) -> ResistorResult<i64> {
        if self.is_zero_ohm() {
            return Ok(0);
        }

        let significant_figures = self.significant_figures()?;
        let multiplier = self.multiplier()?;

        Ok(significant_figures * multiplier)
    }

    /// A lone black band marks a zero-ohm link.
    fn is_zero_ohm(&self) -> bool {
        self.band_a == BandColor::Black
            && self.band_b == BandColor::None
            && self.band_c == BandColor::None
    }

    fn significant_figures(&self) -> ResistorResult<i64> {
        // Both bands must be present before either is translated.
        require_present(self.band_a, BandLabel::A)?;
        require_present(self.band_b, BandLabel::B)?;

        let first = significant_digit(self.band_a, BandLabel::A)?;
        let second = significant_digit(self.band_b, BandLabel::B)?;

        Ok(10 * first + second)
    }

    fn multiplier(&self) -> ResistorResult<i64> {
        if !self.band_c.is_present() {
            return Err(ResistorError::MissingMultiplierBand);
        }

        self.band_c
            .digit()
            .map(|exponent| 10_i64.pow(u32::from(exponent)))
            .ok_or(ResistorError::UntranslatableMultiplierBand(self.band_c))
    }
}

fn require_present(color: BandColor, label: BandLabel) -> ResistorResult<()> {
    if color.is_present() {
        Ok(())
    } else {
        Err(ResistorError::MissingSignificantFigureBand(label))
    }
}

fn significant_digit(color: BandColor, label: BandLabel) -> ResistorResult<i64> {
    color
        .digit()
        .map(i64::from)
        .ok_or(ResistorError::UntranslatableSignificantFigureBand(label, color))
}

// =============================================================================
// Free Function
// =============================================================================

/// Decodes the resistance of the resistor with bands A, B, C and D.
///
/// Equivalent to `Resistor::new(a, b, c, d).resistance()`.
pub fn calculate(
    band_a: BandColor,
    band_b: BandColor,
    band_c: BandColor,
    band_d: BandColor,
) -> ResistorResult<i64> {
    Resistor::new(band_a, band_b, band_c, band_d).resistance()
}

// =============================================================================
// Unit Tests
// =============================================================================
