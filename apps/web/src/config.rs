//! # Web Configuration
//!
//! Configuration management for the web front end.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     OHM_BIND_ADDR=127.0.0.1                                            │
//! │     OHM_PORT=9090                                                      │
//! │     OHM_SITE_TITLE="Bench Calculator"                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/ohm-web/web.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.ohm.ohm-web/web.toml (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:8080, "Resistor Color Code Calculator"                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # web.toml
//! [server]
//! bind_addr = "127.0.0.1"
//! port = 8080
//!
//! [site]
//! title = "Resistor Color Code Calculator"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// Server Settings
// =============================================================================

/// Where the HTTP listener binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address (default: 0.0.0.0).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

// =============================================================================
// Site Settings
// =============================================================================

/// Presentation settings for rendered pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Title shown in the page header and `<title>`.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Resistor Color Code Calculator".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            title: default_title(),
        }
    }
}

// =============================================================================
// Web Config
// =============================================================================

/// Complete configuration for the web front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Page settings.
    #[serde(default)]
    pub site: SiteSettings,
}

impl WebConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (web.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading web config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("bind_addr must not be empty".into()));
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue("port must be greater than 0".into()));
        }

        Ok(())
    }

    /// Applies `OHM_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("OHM_BIND_ADDR") {
            debug!(addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Some(port) = lookup("OHM_PORT") {
            match port.parse::<u16>() {
                Ok(p) => {
                    debug!(port = p, "Overriding port from environment");
                    self.server.port = p;
                }
                Err(_) => warn!(port = %port, "Ignoring unparseable OHM_PORT"),
            }
        }

        if let Some(title) = lookup("OHM_SITE_TITLE") {
            self.site.title = title;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ohm", "ohm-web")
            .map(|dirs| dirs.config_dir().join("web.toml"))
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.bind_addr, self.server.port)
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidValue(String),

    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
