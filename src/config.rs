//! Planner configuration loaded from environment variables.
//!
//! Only defaults live here: the stride and speed used when the form leaves
//! them blank, and the quiet period for debounced recalculation.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::units::{DEFAULT_STEPS_PER_KM, DEFAULT_WALKING_SPEED_KMH};

/// Default quiet period before recalculating while the user is typing.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Planner configuration, loaded once by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Stride factor used when the form has no value
    pub default_steps_per_km: f64,
    /// Walking speed used when the form has no value
    pub default_walking_speed_kmh: f64,
    /// Debounce window for the recalculation worker
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_steps_per_km: DEFAULT_STEPS_PER_KM,
            default_walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults; a `.env` file is read if
    /// present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            default_steps_per_km: parse_finite_var("STEP_PLANNER_STEPS_PER_KM")?
                .unwrap_or(DEFAULT_STEPS_PER_KM),
            default_walking_speed_kmh: parse_finite_var("STEP_PLANNER_WALKING_SPEED_KMH")?
                .unwrap_or(DEFAULT_WALKING_SPEED_KMH),
            debounce: Duration::from_millis(
                parse_var("STEP_PLANNER_DEBOUNCE_MS")?.unwrap_or(DEFAULT_DEBOUNCE_MS),
            ),
        })
    }
}

/// Read and parse an optional environment variable.
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Read an optional float, rejecting NaN and infinities.
fn parse_finite_var(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match parse_var::<f64>(name)? {
        Some(value) if !value.is_finite() => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        }),
        other => Ok(other),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
