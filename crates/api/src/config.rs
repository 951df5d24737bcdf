//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use storefront_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "STOREFRONT_BIND_ADDR";
pub const SEED_VAR: &str = "STOREFRONT_SEED";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Which catalog the service starts with.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// The three demo Apple products.
    #[default]
    Demo,
    /// No products at all.
    Empty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{var}: {message}; using default")]
pub struct ConfigWarning {
    pub var: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub seed: SeedMode,
    pub log_format: LogFormat,
    /// Values that were present but unusable. Logged once tracing is up.
    pub warnings: Vec<ConfigWarning>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed: SeedMode::default(),
            log_format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source. Missing variables
    /// take their default; invalid ones do too, with a recorded warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => config.warn(BIND_ADDR_VAR, format!("invalid address {raw:?} ({e}), expected e.g. {DEFAULT_BIND_ADDR}")),
            }
        }

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "demo" => config.seed = SeedMode::Demo,
                "empty" => config.seed = SeedMode::Empty,
                _ => config.warn(SEED_VAR, format!("unknown seed {raw:?} (expected demo or empty)")),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config.warn(LOG_FORMAT_VAR, e),
            }
        }

        config
    }

    fn warn(&mut self, var: &'static str, message: String) {
        self.warnings.push(ConfigWarning { var, message });
    }
}
