//! # ohm-web
//!
//! HTTP front end for the resistor color code calculator.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ohm-web Routes                                 │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  Pages         │  │  Resistance    │  │  Health                    ││
//! │  │                │  │                │  │                            ││
//! │  │ • GET /        │  │ • POST         │  │ • GET /health              ││
//! │  │ • GET /about   │  │   /resistance  │  │                            ││
//! │  │ • GET /contact │  │ • GET /api/    │  │                            ││
//! │  │                │  │   resistance   │  │                            ││
//! │  └────────────────┘  └───────┬────────┘  └────────────────────────────┘│
//! │                              │                                          │
//! │                              ▼                                          │
//! │                    ohm_core::calculate (pure)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `OHM_BIND_ADDR` - Listener address (default: 0.0.0.0)
//! - `OHM_PORT` - Listener port (default: 8080)
//! - `OHM_SITE_TITLE` - Page title
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod handlers;
pub mod views;

use std::sync::Arc;

use axum::Router;

// Re-exports
pub use config::WebConfig;
pub use error::ApiError;

/// Shared application state.
///
/// Read-only after startup; handlers never mutate it.
pub struct AppState {
    pub config: WebConfig,
}

/// Builds the router for the given configuration.
pub fn app(config: WebConfig) -> Router {
    handlers::router(Arc::new(AppState { config }))
}
