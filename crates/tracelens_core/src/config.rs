//! Dashboard runtime configuration.
//!
//! # Responsibility
//! - Hold tunables for the investigation controller.
//! - Resolve overrides from process environment.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - `delay_ms` never exceeds [`MAX_DELAY_MS`].

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Environment variable overriding the simulated lookup delay.
pub const DELAY_ENV_VAR: &str = "TRACELENS_DELAY_MS";
/// Simulated lookup delay used when nothing overrides it.
pub const DEFAULT_DELAY_MS: u64 = 3_000;
/// Upper bound for the simulated lookup delay.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Controller tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Fixed delay between submit and results, in milliseconds.
    pub delay_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl DashboardConfig {
    /// Builds a config with an explicit delay.
    ///
    /// # Errors
    /// - Returns `DelayTooLarge` when `delay_ms > MAX_DELAY_MS`.
    pub fn with_delay_ms(delay_ms: u64) -> Result<Self, ConfigError> {
        if delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::DelayTooLarge(delay_ms));
        }
        Ok(Self { delay_ms })
    }

    /// Reads overrides from the process environment.
    ///
    /// # Errors
    /// - Returns an error when `TRACELENS_DELAY_MS` is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(DELAY_ENV_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let trimmed = raw.trim();
                let delay_ms = trimmed.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: DELAY_ENV_VAR,
                    value: trimmed.to_string(),
                })?;
                Self::with_delay_ms(delay_ms)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Configuration resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
    DelayTooLarge(u64),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: `{value}`; expected milliseconds")
            }
            Self::DelayTooLarge(value) => {
                write!(f, "delay {value}ms exceeds maximum of {MAX_DELAY_MS}ms")
            }
        }
    }
}

impl Error for ConfigError {}
