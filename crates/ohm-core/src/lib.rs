//! # ohm-core: Pure Resistor Decoding
//!
//! This crate is the **heart** of the resistor calculator. It turns four
//! color bands into a nominal resistance as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Resistor Calculator Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser (HTML form)                          │   │
//! │  │        Band A ──► Band B ──► Band C ──► Band D ──► Submit       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    ohm-web (Axum handlers)                      │   │
//! │  │        index, resistance, api/resistance, health               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ohm-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   band    │  │ resistor  │  │   ohms    │  │   error   │  │   │
//! │  │   │ BandColor │  │ Resistor  │  │   Ohms    │  │ Resistor- │  │   │
//! │  │   │ BandLabel │  │ calculate │  │  display  │  │   Error   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STATE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`band`] - Band color table (BandColor, BandLabel)
//! - [`resistor`] - Resistor type and the resistance calculation
//! - [`ohms`] - Human-readable ohm formatting
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use ohm_core::{calculate, format_ohms, BandColor};
//!
//! let ohms = calculate(
//!     BandColor::Red,
//!     BandColor::White,
//!     BandColor::White,
//!     BandColor::None,
//! ).unwrap();
//!
//! assert_eq!(ohms, 29_000_000_000);
//! assert_eq!(format_ohms(ohms), "29 GΩ");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod band;
pub mod error;
pub mod ohms;
pub mod resistor;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use band::{BandColor, BandLabel};
pub use error::{ParseBandColorError, ResistorError, ResistorResult};
pub use ohms::{format_ohms, Ohms};
pub use resistor::{calculate, Resistor};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of bands on the resistors this crate decodes.
pub const BAND_COUNT: usize = 4;
