//! Application configuration.
//!
//! Values come from three layers, later ones winning:
//! 1. Built-in defaults
//! 2. JSON file at `$WELLSPRING_CONFIG` or `<config dir>/wellspring/config.json`
//! 3. `WELLSPRING_TICK_MS` / `WELLSPRING_BREATHS` environment overrides
//!
//! # Example
//!
//! ```ignore
//! use wellspring::config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_tick_interval_ms(4000)
//!     .with_breaths(6);
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Env var naming an explicit config file.
pub const ENV_CONFIG_PATH: &str = "WELLSPRING_CONFIG";
/// Env var overriding the breathing tick interval, in milliseconds.
pub const ENV_TICK_MS: &str = "WELLSPRING_TICK_MS";
/// Env var overriding the number of breaths per exercise.
pub const ENV_BREATHS: &str = "WELLSPRING_BREATHS";

/// Ticks per breath: one inhale, one exhale.
pub const TICKS_PER_BREATH: u32 = 2;

/// Timing of the guided breathing exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingConfig {
    /// Milliseconds between ticks (one inhale or one exhale).
    pub tick_interval_ms: u64,
    /// Tick count at which the exercise completes.
    pub tick_ceiling: u32,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 5000,
            tick_ceiling: 10,
        }
    }
}

impl BreathingConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Number of full breaths in one exercise.
    pub fn total_breaths(&self) -> u32 {
        self.tick_ceiling / TICKS_PER_BREATH
    }

    /// Check the interval is non-zero and the ceiling covers whole breaths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.tick_ceiling == 0 || self.tick_ceiling % TICKS_PER_BREATH != 0 {
            return Err(ConfigError::InvalidValue {
                key: "tick_ceiling",
                reason: format!(
                    "must be a positive multiple of {} (got {})",
                    TICKS_PER_BREATH, self.tick_ceiling
                ),
            });
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub breathing: BreathingConfig,
    /// UI frame tick in milliseconds (redraw cadence of the event loop).
    pub frame_tick_ms: u64,
    /// Render the milestone celebration panel on the toolkit screen.
    pub show_milestones: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            breathing: BreathingConfig::default(),
            frame_tick_ms: 16,
            show_milestones: true,
        }
    }
}

impl AppConfig {
    /// Set the breathing tick interval.
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.breathing.tick_interval_ms = ms;
        self
    }

    /// Set the number of breaths (the tick ceiling is twice this).
    pub fn with_breaths(mut self, breaths: u32) -> Self {
        self.breathing.tick_ceiling = breaths.saturating_mul(TICKS_PER_BREATH);
        self
    }

    /// Set whether the milestone panel is shown.
    pub fn with_show_milestones(mut self, show: bool) -> Self {
        self.show_milestones = show;
        self
    }

    pub fn frame_tick(&self) -> Duration {
        Duration::from_millis(self.frame_tick_ms.max(1))
    }

    /// Default config file location, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wellspring").join("config.json"))
    }

    /// Resolve the config path (env var first), load it, apply env overrides
    /// and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .or_else(Self::default_path);

        let config = match path {
            Some(path) => Self::load_from(&path)?,
            None => {
                tracing::warn!("No config directory available, using defaults");
                Self::default()
            }
        };

        let config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply `WELLSPRING_TICK_MS` and `WELLSPRING_BREATHS` if set.
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(ms) = read_env_number::<u64>(ENV_TICK_MS)? {
            self.breathing.tick_interval_ms = ms;
        }
        if let Some(breaths) = read_env_number::<u32>(ENV_BREATHS)? {
            self = self.with_breaths(breaths);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.breathing.validate()
    }
}

fn read_env_number<T: std::str::FromStr>(var: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                var: var.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
