//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `iotsim.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::time::Duration;

use iotsim_domain::settings::MonitorSettings;
use serde::Deserialize;

/// Seed used when none is configured, so demo output is reproducible.
pub const DEFAULT_SEED: u64 = 42;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Monitoring loop settings.
    pub monitoring: MonitoringConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Monitoring loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Number of cycles to run.
    pub cycles: u32,
    /// Pause between cycles, in milliseconds.
    pub pause_ms: u64,
    /// Temperature above which the alarm is raised (°C).
    pub temperature_threshold: f64,
    /// Seed for the reading generator.
    pub seed: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `iotsim.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("iotsim.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Unparseable numeric values are ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(cycles) = var("IOTSIM_CYCLES").and_then(|v| v.parse().ok()) {
            self.monitoring.cycles = cycles;
        }
        if let Some(pause_ms) = var("IOTSIM_PAUSE_MS").and_then(|v| v.parse().ok()) {
            self.monitoring.pause_ms = pause_ms;
        }
        if let Some(threshold) = var("IOTSIM_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.monitoring.temperature_threshold = threshold;
        }
        if let Some(seed) = var("IOTSIM_SEED").and_then(|v| v.parse().ok()) {
            self.monitoring.seed = seed;
        }
        if let Some(filter) = var("IOTSIM_LOG") {
            self.logging.filter = filter;
        }
        if let Some(filter) = var("RUST_LOG") {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.monitor_settings().map(|_| ())
    }

    /// Settings for the monitor, checked by the domain builder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for zero cycles or a non-finite
    /// threshold.
    pub fn monitor_settings(&self) -> Result<MonitorSettings, ConfigError> {
        MonitorSettings::builder()
            .cycles(self.monitoring.cycles)
            .pause(Duration::from_millis(self.monitoring.pause_ms))
            .temperature_threshold(self.monitoring.temperature_threshold)
            .build()
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            cycles: MonitorSettings::DEFAULT_CYCLES,
            pause_ms: u64::try_from(MonitorSettings::DEFAULT_PAUSE.as_millis()).unwrap_or(1500),
            temperature_threshold: MonitorSettings::DEFAULT_TEMPERATURE_THRESHOLD,
            seed: DEFAULT_SEED,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "iotsim=info,iotsim_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
