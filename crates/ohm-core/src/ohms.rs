//! # Ohms Module
//!
//! Provides the `Ohms` type for showing a decoded resistance to people.
//!
//! ## Display Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Integer ohms are scaled to the largest SI prefix that keeps the       │
//! │  whole part at least 1, then trailing zeros are dropped:               │
//! │                                                                         │
//! │    68              → "68 Ω"                                            │
//! │    4 700           → "4.7 kΩ"                                          │
//! │    3 500 000       → "3.5 MΩ"                                          │
//! │    29 000 000 000  → "29 GΩ"                                           │
//! │                                                                         │
//! │  No floating point is involved, so the text is always exact.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// SI prefixes, each a factor of 1000 above the previous one.
const PREFIXES: [&str; 5] = ["", "k", "M", "G", "T"];

// =============================================================================
// Ohms Type
// =============================================================================

/// A resistance magnitude in whole ohms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ohms(i64);

impl Ohms {
    /// Wraps a raw ohm count.
    #[inline]
    pub const fn new(ohms: i64) -> Self {
        Ohms(ohms)
    }

    /// Returns the raw ohm count.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Ohms {
    fn from(ohms: i64) -> Self {
        Ohms(ohms)
    }
}

/// Display implementation shows the value with an SI prefix.
///
/// ## Example
/// ```rust
/// use ohm_core::Ohms;
///
/// assert_eq!(Ohms::new(4700).to_string(), "4.7 kΩ");
/// assert_eq!(Ohms::new(0).to_string(), "0 Ω");
/// ```
impl fmt::Display for Ohms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();

        let mut step = 0;
        let mut scale: u64 = 1;
        while step + 1 < PREFIXES.len() && magnitude >= scale * 1000 {
            scale *= 1000;
            step += 1;
        }

        let whole = magnitude / scale;
        let fraction = magnitude % scale;

        if fraction == 0 {
            return write!(f, "{}{} {}Ω", sign, whole, PREFIXES[step]);
        }

        let width = 3 * step;
        let digits = format!("{:0width$}", fraction, width = width);
        write!(
            f,
            "{}{}.{} {}Ω",
            sign,
            whole,
            digits.trim_end_matches('0'),
            PREFIXES[step]
        )
    }
}

/// Formats a raw ohm count for display.
pub fn format_ohms(ohms: i64) -> String {
    Ohms::new(ohms).to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ohms() {
        assert_eq!(format_ohms(0), "0 Ω");
        assert_eq!(format_ohms(68), "68 Ω");
        assert_eq!(format_ohms(470), "470 Ω");
        assert_eq!(format_ohms(999), "999 Ω");
    }

    #[test]
    fn test_prefixed_values() {
        assert_eq!(format_ohms(1_000), "1 kΩ");
        assert_eq!(format_ohms(4_700), "4.7 kΩ");
        assert_eq!(format_ohms(22_000), "22 kΩ");
        assert_eq!(format_ohms(100_000), "100 kΩ");
        assert_eq!(format_ohms(3_500_000), "3.5 MΩ");
        assert_eq!(format_ohms(890_000_000), "890 MΩ");
        assert_eq!(format_ohms(29_000_000_000), "29 GΩ");
        assert_eq!(format_ohms(99_000_000_000), "99 GΩ");
    }

    #[test]
    fn test_fraction_keeps_inner_zeros() {
        assert_eq!(format_ohms(1_050), "1.05 kΩ");
        assert_eq!(format_ohms(1_001), "1.001 kΩ");
    }

    #[test]
    fn test_negative_and_extreme_values() {
        assert_eq!(format_ohms(-4_700), "-4.7 kΩ");
        assert!(format_ohms(i64::MIN).ends_with(" TΩ"));
    }

    #[test]
    fn test_value_round_trip() {
        let ohms = Ohms::from(330);
        assert_eq!(ohms.value(), 330);
        assert_eq!(Ohms::default().value(), 0);
    }
}
