//! Measured quantities and sensor readings.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A physical quantity observed by a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Air temperature in degrees Celsius.
    Temperature,
    /// Relative humidity in percent.
    Humidity,
}

impl Quantity {
    /// Unit symbol appended to readings.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "\u{b0}C",
            Self::Humidity => "%",
        }
    }

    /// Span of values a powered sensor of this quantity can produce.
    #[must_use]
    pub fn simulated_range(self) -> RangeInclusive<f64> {
        match self {
            Self::Temperature => 20.0..=40.0,
            Self::Humidity => 30.0..=90.0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The last value stored by a sensor, together with what it measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub quantity: Quantity,
    pub value: f64,
}

impl Measurement {
    /// The value every sensor holds before its first powered reading, and
    /// after any reading attempted while off.
    #[must_use]
    pub fn zero(quantity: Quantity) -> Self {
        Self {
            quantity,
            value: 0.0,
        }
    }

    /// Build a measurement from a raw sample, rounded to two decimals.
    #[must_use]
    pub fn rounded(quantity: Quantity, raw: f64) -> Self {
        Self {
            quantity,
            value: round_to_hundredths(raw),
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.value, self.quantity.unit())
    }
}

/// Round half away from zero to two decimal places.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
