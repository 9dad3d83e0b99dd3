//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`IotSimError`] via `#[from]`. No variant carries a free-form `String`.

use serde::{Deserialize, Serialize};

use crate::control::ControlValue;
use crate::id::DeviceId;

/// Top-level error for every fallible iotsim operation.
#[derive(Debug, thiserror::Error)]
pub enum IotSimError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("actuation rejected")]
    Adjust(#[from] AdjustError),
}

/// A domain invariant was violated while building a value or starting a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("device identifier must not be empty")]
    EmptyDeviceId,

    #[error("at least one device is required")]
    NoDevices,

    #[error("device identifier {0} is used more than once")]
    DuplicateDeviceId(DeviceId),

    #[error("cycle count must be at least one")]
    ZeroCycles,

    #[error("temperature threshold must be finite, got {0}")]
    NonFiniteThreshold(f64),
}

/// Why an actuator refused a control value.
///
/// These are never fatal: the actuator keeps its previous setting and the
/// caller moves on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AdjustError {
    #[error("{device_id} is powered off; intensity cannot be adjusted")]
    PoweredOff { device_id: DeviceId },

    #[error("intensity must be an integer (0-100), got {value}")]
    NotAnInteger { value: ControlValue },

    #[error("intensity {value} out of range (0-100); no change applied")]
    OutOfRange { value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_iotsim_error() {
        let err: IotSimError = ValidationError::NoDevices.into();
        assert!(matches!(
            err,
            IotSimError::Validation(ValidationError::NoDevices)
        ));
    }

    #[test]
    fn should_convert_adjust_error_into_iotsim_error() {
        let err: IotSimError = AdjustError::OutOfRange { value: 101 }.into();
        assert!(matches!(err, IotSimError::Adjust(_)));
    }

    #[test]
    fn should_display_duplicate_device_id() {
        let id: DeviceId = "Light_Kitchen".parse().unwrap();
        let err = ValidationError::DuplicateDeviceId(id);
        assert_eq!(
            err.to_string(),
            "device identifier Light_Kitchen is used more than once"
        );
    }

    #[test]
    fn should_display_powered_off_rejection() {
        let err = AdjustError::PoweredOff {
            device_id: "Light_LivingRoom".parse().unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Light_LivingRoom is powered off; intensity cannot be adjusted"
        );
    }

    #[test]
    fn should_display_not_an_integer_rejection() {
        let err = AdjustError::NotAnInteger {
            value: ControlValue::Float(55.5),
        };
        assert_eq!(
            err.to_string(),
            "intensity must be an integer (0-100), got 55.5"
        );
    }

    #[test]
    fn should_display_out_of_range_rejection() {
        let err = AdjustError::OutOfRange { value: -1 };
        assert_eq!(
            err.to_string(),
            "intensity -1 out of range (0-100); no change applied"
        );
    }
}
