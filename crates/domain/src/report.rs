//! Device reports: point-in-time snapshots of a device's observable state.

use serde::{Deserialize, Serialize};

use crate::control::Intensity;
use crate::id::DeviceId;
use crate::measurement::Measurement;
use crate::power::PowerState;

/// What kind of simulated device produced a report.
///
/// Used for presentation only; behaviour is selected through capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    TemperatureSensor,
    HumiditySensor,
    LightActuator,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemperatureSensor => f.write_str("TemperatureSensor"),
            Self::HumiditySensor => f.write_str("HumiditySensor"),
            Self::LightActuator => f.write_str("LightActuator"),
        }
    }
}

/// The type-specific part of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportDetail {
    Measurement(Measurement),
    Intensity { intensity: Intensity },
}

/// Snapshot of one device: identity and power state, extended with the
/// variant's measurement or intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub device_id: DeviceId,
    pub kind: DeviceKind,
    pub power: PowerState,
    pub detail: Option<ReportDetail>,
}

impl std::fmt::Display for DeviceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] ID: {} | State: {}",
            self.kind, self.device_id, self.power
        )?;
        match &self.detail {
            Some(ReportDetail::Measurement(m)) => {
                write!(f, "\n   \u{2022} Current {}: {m}", m.quantity)
            }
            Some(ReportDetail::Intensity { intensity }) => {
                write!(f, "\n   \u{2022} Current intensity: {intensity}")
            }
            None => Ok(()),
        }
    }
}
