//! Notification: an immutable record of something observable that happened.
//!
//! Devices and the monitor never print. They hand notifications to a sink
//! (see the `app` crate), which decides whether to log, collect or forward
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::control::Intensity;
use crate::error::AdjustError;
use crate::id::{DeviceId, RunId};
use crate::measurement::Measurement;
use crate::report::DeviceReport;

/// UTC instant at which a notification was emitted.
pub type Timestamp = DateTime<Utc>;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationKind {
    PoweredOn {
        device_id: DeviceId,
    },
    PoweredOff {
        device_id: DeviceId,
    },
    ReadingTaken {
        device_id: DeviceId,
        measurement: Measurement,
    },
    IntensityAdjusted {
        device_id: DeviceId,
        intensity: Intensity,
    },
    AdjustRejected {
        device_id: DeviceId,
        error: AdjustError,
    },
    RunStarted {
        run_id: RunId,
        cycles: u32,
    },
    CycleStarted {
        run_id: RunId,
        cycle: u32,
    },
    AlarmEvaluated {
        run_id: RunId,
        cycle: u32,
        alarm: bool,
        threshold: f64,
    },
    DeviceReported {
        run_id: RunId,
        cycle: u32,
        report: DeviceReport,
    },
    RunFinished {
        run_id: RunId,
        cycles_completed: u32,
        cancelled: bool,
    },
}

/// A timestamped [`NotificationKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub at: Timestamp,
    pub kind: NotificationKind,
}

impl Notification {
    /// Stamp `kind` with the current time.
    #[must_use]
    pub fn new(kind: NotificationKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }

    /// Severity derived from the kind.
    ///
    /// Actuating a powered-off device is a warning; malformed control
    /// values are errors; readings are debug noise; everything else is
    /// informational.
    #[must_use]
    pub fn level(&self) -> Level {
        match &self.kind {
            NotificationKind::ReadingTaken { .. } | NotificationKind::AlarmEvaluated { .. } => {
                Level::Debug
            }
            NotificationKind::AdjustRejected {
                error: AdjustError::PoweredOff { .. },
                ..
            } => Level::Warning,
            NotificationKind::AdjustRejected { .. } => Level::Error,
            _ => Level::Info,
        }
    }

    /// The device this notification concerns, if any.
    #[must_use]
    pub fn device_id(&self) -> Option<&DeviceId> {
        match &self.kind {
            NotificationKind::PoweredOn { device_id }
            | NotificationKind::PoweredOff { device_id }
            | NotificationKind::ReadingTaken { device_id, .. }
            | NotificationKind::IntensityAdjusted { device_id, .. }
            | NotificationKind::AdjustRejected { device_id, .. } => Some(device_id),
            NotificationKind::DeviceReported { report, .. } => Some(&report.device_id),
            NotificationKind::RunStarted { .. }
            | NotificationKind::CycleStarted { .. }
            | NotificationKind::AlarmEvaluated { .. }
            | NotificationKind::RunFinished { .. } => None,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            NotificationKind::PoweredOn { device_id } => write!(f, "{device_id} powered on"),
            NotificationKind::PoweredOff { device_id } => write!(f, "{device_id} powered off"),
            NotificationKind::ReadingTaken {
                device_id,
                measurement,
            } => write!(f, "{device_id} read {measurement}"),
            NotificationKind::IntensityAdjusted {
                device_id,
                intensity,
            } => write!(f, "intensity of {device_id} set to {intensity}"),
            NotificationKind::AdjustRejected { error, .. } => write!(f, "{error}"),
            NotificationKind::RunStarted { cycles, .. } => {
                write!(f, "monitoring started ({cycles} cycles)")
            }
            NotificationKind::CycleStarted { cycle, .. } => write!(f, "cycle {cycle}"),
            NotificationKind::AlarmEvaluated {
                alarm, threshold, ..
            } => {
                if *alarm {
                    write!(f, "temperature above {threshold} \u{b0}C detected")
                } else {
                    write!(f, "all temperatures at or below {threshold} \u{b0}C")
                }
            }
            NotificationKind::DeviceReported { report, .. } => write!(f, "{report}"),
            NotificationKind::RunFinished {
                cycles_completed,
                cancelled,
                ..
            } => {
                if *cancelled {
                    write!(f, "monitoring cancelled after {cycles_completed} cycles")
                } else {
                    write!(f, "monitoring finished ({cycles_completed} cycles)")
                }
            }
        }
    }
}
