//! Monitor settings: the few scalar knobs of a monitoring run.

use std::time::Duration;

use crate::error::ValidationError;

/// Parameters for one monitoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSettings {
    /// Number of sense → decide → act → report cycles.
    pub cycles: u32,
    /// Pause between two consecutive cycles.
    pub pause: Duration,
    /// A temperature strictly above this value raises the alarm.
    pub temperature_threshold: f64,
}

impl MonitorSettings {
    pub const DEFAULT_CYCLES: u32 = 5;
    pub const DEFAULT_PAUSE: Duration = Duration::from_millis(1500);
    pub const DEFAULT_TEMPERATURE_THRESHOLD: f64 = 30.0;

    /// Create a builder for constructing [`MonitorSettings`].
    #[must_use]
    pub fn builder() -> MonitorSettingsBuilder {
        MonitorSettingsBuilder::default()
    }

    /// Check invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroCycles`] when `cycles` is zero and
    /// [`ValidationError::NonFiniteThreshold`] when the threshold is NaN or
    /// infinite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cycles == 0 {
            return Err(ValidationError::ZeroCycles);
        }
        if !self.temperature_threshold.is_finite() {
            return Err(ValidationError::NonFiniteThreshold(
                self.temperature_threshold,
            ));
        }
        Ok(())
    }
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            cycles: Self::DEFAULT_CYCLES,
            pause: Self::DEFAULT_PAUSE,
            temperature_threshold: Self::DEFAULT_TEMPERATURE_THRESHOLD,
        }
    }
}

/// Step-by-step builder for [`MonitorSettings`].
#[derive(Debug, Default)]
pub struct MonitorSettingsBuilder {
    cycles: Option<u32>,
    pause: Option<Duration>,
    temperature_threshold: Option<f64>,
}

impl MonitorSettingsBuilder {
    #[must_use]
    pub fn cycles(mut self, cycles: u32) -> Self {
        self.cycles = Some(cycles);
        self
    }

    #[must_use]
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = Some(pause);
        self
    }

    #[must_use]
    pub fn temperature_threshold(mut self, threshold: f64) -> Self {
        self.temperature_threshold = Some(threshold);
        self
    }

    /// Consume the builder, validate, and return [`MonitorSettings`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if an invariant does not hold.
    pub fn build(self) -> Result<MonitorSettings, ValidationError> {
        let defaults = MonitorSettings::default();
        let settings = MonitorSettings {
            cycles: self.cycles.unwrap_or(defaults.cycles),
            pause: self.pause.unwrap_or(defaults.pause),
            temperature_threshold: self
                .temperature_threshold
                .unwrap_or(defaults.temperature_threshold),
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_five_cycles_every_one_and_a_half_seconds() {
        let settings = MonitorSettings::default();
        assert_eq!(settings.cycles, 5);
        assert_eq!(settings.pause, Duration::from_millis(1500));
        assert!((settings.temperature_threshold - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_build_with_overrides() {
        let settings = MonitorSettings::builder()
            .cycles(1)
            .pause(Duration::ZERO)
            .temperature_threshold(25.5)
            .build()
            .unwrap();
        assert_eq!(settings.cycles, 1);
        assert_eq!(settings.pause, Duration::ZERO);
        assert!((settings.temperature_threshold - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let settings = MonitorSettings::builder().cycles(3).build().unwrap();
        assert_eq!(settings.pause, MonitorSettings::DEFAULT_PAUSE);
    }

    #[test]
    fn should_reject_zero_cycles() {
        let result = MonitorSettings::builder().cycles(0).build();
        assert_eq!(result, Err(ValidationError::ZeroCycles));
    }

    #[test]
    fn should_reject_nan_threshold() {
        let result = MonitorSettings::builder()
            .temperature_threshold(f64::NAN)
            .build();
        assert!(matches!(result, Err(ValidationError::NonFiniteThreshold(_))));
    }

    #[test]
    fn should_reject_infinite_threshold() {
        let result = MonitorSettings::builder()
            .temperature_threshold(f64::INFINITY)
            .build();
        assert!(matches!(result, Err(ValidationError::NonFiniteThreshold(_))));
    }
}
