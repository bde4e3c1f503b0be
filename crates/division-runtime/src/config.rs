//! Frame pacing configuration
//!
//! Loaded from TOML, either as a bare table:
//!
//! ```toml
//! target_hz = 60.0
//! samples = 60
//! ```
//!
//! or as a `[pacing]` section inside a larger engine config file.

use division_core::{DivisionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default target update rate in Hz
pub const DEFAULT_TARGET_HZ: f64 = 60.0;
/// Default number of ticks averaged per measurement
pub const DEFAULT_SAMPLES: u32 = 60;

const MIN_TARGET_HZ: f64 = 1.0;
const MAX_TARGET_HZ: f64 = 1000.0;
const MAX_SAMPLES: u32 = 10_000;

/// Target cadence and sample count for the update-rate profiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_target_hz")]
    pub target_hz: f64,
    #[serde(default = "default_samples")]
    pub samples: u32,
}

fn default_target_hz() -> f64 {
    DEFAULT_TARGET_HZ
}

fn default_samples() -> u32 {
    DEFAULT_SAMPLES
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            target_hz: DEFAULT_TARGET_HZ,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Wrapper for engine config files that carry a `[pacing]` section
#[derive(Debug, Deserialize)]
struct PacingSection {
    pacing: PacingConfig,
}

impl PacingConfig {
    /// Build a config for a given rate with the default sample count
    pub fn with_target_hz(hz: f64) -> Self {
        Self {
            target_hz: hz,
            ..Self::default()
        }
    }

    /// Parse and validate a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let config = if table.contains_key("pacing") {
            toml::Value::Table(table).try_into::<PacingSection>()?.pacing
        } else {
            toml::Value::Table(table).try_into::<PacingConfig>()?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_TARGET_HZ..=MAX_TARGET_HZ).contains(&self.target_hz) {
            return Err(DivisionError::ValueOutOfRange {
                field: "target_hz".into(),
                min: MIN_TARGET_HZ,
                max: MAX_TARGET_HZ,
                value: self.target_hz,
            });
        }
        if self.samples == 0 || self.samples > MAX_SAMPLES {
            return Err(DivisionError::ValueOutOfRange {
                field: "samples".into(),
                min: 1.0,
                max: MAX_SAMPLES as f64,
                value: self.samples as f64,
            });
        }
        Ok(())
    }

    /// Duration of one tick at the target rate.
    ///
    /// Capped at the tick of the slowest accepted rate, so a config that
    /// skipped validation (zero, negative, NaN or tiny rates) still yields
    /// a bounded tick.
    pub fn target_tick(&self) -> Duration {
        let longest = Duration::from_secs_f64(1.0 / MIN_TARGET_HZ);
        Duration::try_from_secs_f64(1.0 / self.target_hz)
            .map_or(longest, |tick| tick.min(longest))
    }
}
