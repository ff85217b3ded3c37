//! # Band Colors
//!
//! The fixed encoding table for resistor color bands.
//!
//! ## Encoding Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Four-Band Color Code                              │
//! │                                                                         │
//! │   Color    Rank   Significant figure   Multiplier                       │
//! │   ──────   ────   ──────────────────   ──────────                       │
//! │   black      0            0              ×1                             │
//! │   brown      1            1              ×10                            │
//! │   red        2            2              ×100                           │
//! │   orange     3            3              ×1 000                         │
//! │   yellow     4            4              ×10 000                        │
//! │   green      5            5              ×100 000                       │
//! │   blue       6            6              ×1 000 000                     │
//! │   violet     7            7              ×10 000 000                    │
//! │   gray       8            8              ×100 000 000                   │
//! │   white      9            9              ×1 000 000 000                 │
//! │   gold      -1            -              ×0.1 (unsupported)             │
//! │   silver    -2            -              ×0.01 (unsupported)            │
//! │   none       -            -              -                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ParseBandColorError;

// =============================================================================
// Band Color
// =============================================================================

/// The color painted on a single resistor band.
///
/// `None` marks a band that is absent from the body of the resistor. It is the
/// default so that an unselected form field decodes as "no band".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BandColor {
    #[default]
    None,
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    #[serde(alias = "grey")]
    Gray,
    White,
    Gold,
    Silver,
}

impl BandColor {
    /// Every color, in the order a selection list shows them.
    pub const ALL: [BandColor; 13] = [
        BandColor::None,
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Gray,
        BandColor::White,
        BandColor::Gold,
        BandColor::Silver,
    ];

    /// The ten colors that encode a decimal digit, indexed by that digit.
    pub const DIGITS: [BandColor; 10] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Gray,
        BandColor::White,
    ];

    /// Returns the integer rank of the color.
    ///
    /// Digit colors rank 0 through 9, gold is -1 and silver is -2.
    /// An absent band has no rank.
    pub const fn rank(&self) -> Option<i8> {
        match self {
            BandColor::None => None,
            BandColor::Black => Some(0),
            BandColor::Brown => Some(1),
            BandColor::Red => Some(2),
            BandColor::Orange => Some(3),
            BandColor::Yellow => Some(4),
            BandColor::Green => Some(5),
            BandColor::Blue => Some(6),
            BandColor::Violet => Some(7),
            BandColor::Gray => Some(8),
            BandColor::White => Some(9),
            BandColor::Gold => Some(-1),
            BandColor::Silver => Some(-2),
        }
    }

    /// Returns the decimal digit this color encodes, if it encodes one.
    ///
    /// ## Example
    /// ```rust
    /// use ohm_core::BandColor;
    ///
    /// assert_eq!(BandColor::Violet.digit(), Some(7));
    /// assert_eq!(BandColor::Gold.digit(), None);
    /// assert_eq!(BandColor::None.digit(), None);
    /// ```
    pub const fn digit(&self) -> Option<u8> {
        match self.rank() {
            Some(rank) if rank >= 0 => Some(rank as u8),
            _ => None,
        }
    }

    /// Returns true unless the band is absent.
    #[inline]
    pub const fn is_present(&self) -> bool {
        !matches!(self, BandColor::None)
    }

    /// Returns true for gold and silver, whose multipliers are fractional.
    #[inline]
    pub const fn is_fractional(&self) -> bool {
        matches!(self, BandColor::Gold | BandColor::Silver)
    }

    /// Lowercase name, as shown to users and accepted by the form.
    pub const fn name(&self) -> &'static str {
        match self {
            BandColor::None => "none",
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
            BandColor::Blue => "blue",
            BandColor::Violet => "violet",
            BandColor::Gray => "gray",
            BandColor::White => "white",
            BandColor::Gold => "gold",
            BandColor::Silver => "silver",
        }
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BandColor {
    type Err = ParseBandColorError;

    /// Parses a color name, ignoring case and surrounding whitespace.
    ///
    /// An empty string is an unselected band and parses as `None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(BandColor::None),
            "black" => Ok(BandColor::Black),
            "brown" => Ok(BandColor::Brown),
            "red" => Ok(BandColor::Red),
            "orange" => Ok(BandColor::Orange),
            "yellow" => Ok(BandColor::Yellow),
            "green" => Ok(BandColor::Green),
            "blue" => Ok(BandColor::Blue),
            "violet" => Ok(BandColor::Violet),
            "gray" | "grey" => Ok(BandColor::Gray),
            "white" => Ok(BandColor::White),
            "gold" => Ok(BandColor::Gold),
            "silver" => Ok(BandColor::Silver),
            _ => Err(ParseBandColorError(s.trim().to_string())),
        }
    }
}

// =============================================================================
// Band Label
// =============================================================================

/// Names the significant-figure band that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BandLabel {
    A,
    B,
}

impl fmt::Display for BandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandLabel::A => f.write_str("A"),
            BandLabel::B => f.write_str("B"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_colors_map_to_their_index() {
        for (digit, color) in BandColor::DIGITS.iter().enumerate() {
            assert_eq!(color.digit(), Some(digit as u8));
            assert_eq!(color.rank(), Some(digit as i8));
        }
    }

    #[test]
    fn test_special_markers_have_no_digit() {
        assert_eq!(BandColor::Gold.rank(), Some(-1));
        assert_eq!(BandColor::Silver.rank(), Some(-2));
        assert_eq!(BandColor::None.rank(), None);

        assert_eq!(BandColor::Gold.digit(), None);
        assert_eq!(BandColor::Silver.digit(), None);
        assert_eq!(BandColor::None.digit(), None);
    }

    #[test]
    fn test_presence_and_fractional() {
        assert!(!BandColor::None.is_present());
        assert!(BandColor::Black.is_present());
        assert!(BandColor::Gold.is_fractional());
        assert!(BandColor::Silver.is_fractional());
        assert!(!BandColor::White.is_fractional());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(BandColor::default(), BandColor::None);
    }

    #[test]
    fn test_parse_names() {
        for color in BandColor::ALL {
            assert_eq!(color.name().parse::<BandColor>().unwrap(), color);
        }
        assert_eq!("  Yellow ".parse::<BandColor>().unwrap(), BandColor::Yellow);
        assert_eq!("GREY".parse::<BandColor>().unwrap(), BandColor::Gray);
        assert_eq!("".parse::<BandColor>().unwrap(), BandColor::None);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "magenta".parse::<BandColor>().unwrap_err();
        assert_eq!(err, ParseBandColorError("magenta".to_string()));
    }

    #[test]
    fn test_display_is_lowercase_name() {
        assert_eq!(BandColor::Violet.to_string(), "violet");
        assert_eq!(BandLabel::A.to_string(), "A");
        assert_eq!(BandLabel::B.to_string(), "B");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&BandColor::Gray).unwrap(), "\"gray\"");
        let grey: BandColor = serde_json::from_str("\"grey\"").unwrap();
        assert_eq!(grey, BandColor::Gray);
        let none: BandColor = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(none, BandColor::None);
    }
}
