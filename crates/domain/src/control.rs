//! Control values sent to actuators, and the bounded [`Intensity`] they map to.

use serde::{Deserialize, Serialize};

use crate::error::AdjustError;

/// An untyped control input, as an operator or rule might supply it.
///
/// Only [`Int`](Self::Int) values can become an [`Intensity`]; the other
/// variants exist so the "wrong type" path is representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for ControlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<i64> for ControlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ControlValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for ControlValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Intensity> for ControlValue {
    fn from(value: Intensity) -> Self {
        Self::Int(i64::from(value.percent()))
    }
}

impl From<f64> for ControlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ControlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Light intensity as a whole percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const OFF: Self = Self(0);
    pub const MAX: Self = Self(100);
    /// Setting applied to every light while the temperature alarm is raised.
    pub const ALARM: Self = Self(80);
    /// Setting applied to every light otherwise.
    pub const NORMAL: Self = Self(20);

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Intensity {
    type Error = AdjustError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(percent) if percent <= Self::MAX.0 => Ok(Self(percent)),
            _ => Err(AdjustError::OutOfRange { value }),
        }
    }
}

impl TryFrom<&ControlValue> for Intensity {
    type Error = AdjustError;

    /// Type check first, then range check.
    fn try_from(value: &ControlValue) -> Result<Self, Self::Error> {
        match value {
            ControlValue::Int(raw) => Self::try_from(*raw),
            other => Err(AdjustError::NotAnInteger {
                value: other.clone(),
            }),
        }
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_lower_bound() {
        assert_eq!(Intensity::try_from(0_i64).unwrap(), Intensity::OFF);
    }

    #[test]
    fn should_accept_upper_bound() {
        assert_eq!(Intensity::try_from(100_i64).unwrap(), Intensity::MAX);
    }

    #[test]
    fn should_reject_negative_value() {
        assert_eq!(
            Intensity::try_from(-1_i64),
            Err(AdjustError::OutOfRange { value: -1 })
        );
    }

    #[test]
    fn should_reject_value_above_hundred() {
        assert_eq!(
            Intensity::try_from(101_i64),
            Err(AdjustError::OutOfRange { value: 101 })
        );
    }

    #[test]
    fn should_reject_value_beyond_u8() {
        assert!(Intensity::try_from(300_i64).is_err());
    }

    #[test]
    fn should_reject_float_control_value_even_when_whole() {
        let value = ControlValue::Float(80.0);
        assert_eq!(
            Intensity::try_from(&value),
            Err(AdjustError::NotAnInteger { value })
        );
    }

    #[test]
    fn should_reject_text_control_value() {
        let value = ControlValue::from("bright");
        assert!(matches!(
            Intensity::try_from(&value),
            Err(AdjustError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn should_check_type_before_range() {
        let value = ControlValue::Float(250.5);
        assert!(matches!(
            Intensity::try_from(&value),
            Err(AdjustError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn should_display_as_percentage() {
        assert_eq!(Intensity::try_from(80_i64).unwrap().to_string(), "80%");
    }

    #[test]
    fn should_deserialize_untagged_control_values() {
        let int: ControlValue = serde_json::from_str("42").unwrap();
        let float: ControlValue = serde_json::from_str("4.5").unwrap();
        let text: ControlValue = serde_json::from_str("\"dim\"").unwrap();
        assert_eq!(int, ControlValue::Int(42));
        assert_eq!(float, ControlValue::Float(4.5));
        assert_eq!(text, ControlValue::Text("dim".to_string()));
    }

    #[test]
    fn should_refuse_to_deserialize_out_of_range_intensity() {
        let result: Result<Intensity, _> = serde_json::from_str("150");
        assert!(result.is_err());
    }
}
