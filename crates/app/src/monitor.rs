//! Monitoring loop: drives a fixed number of cycles over a set of devices.
//!
//! Each cycle runs four phases, each one visiting every device before the
//! next phase starts:
//!
//! 1. **Sense**: every sensor takes a reading.
//! 2. **Decide**: the alarm is raised when any temperature reading is
//!    strictly above the threshold.
//! 3. **Act**: every actuator receives [`Intensity::ALARM`] or
//!    [`Intensity::NORMAL`].
//! 4. **Report**: every device reports, in the order it was given.
//!
//! The monitor borrows the devices for one run and keeps nothing between
//! runs except its random source.

use std::collections::HashSet;

use iotsim_domain::control::Intensity;
use iotsim_domain::error::{IotSimError, ValidationError};
use iotsim_domain::id::RunId;
use iotsim_domain::measurement::Quantity;
use iotsim_domain::notification::{Notification, NotificationKind};
use iotsim_domain::report::DeviceReport;
use iotsim_domain::settings::MonitorSettings;
use rand::RngCore;
use tokio::sync::watch;

use crate::ports::{Device, NotificationSink, Pause};

/// What happened during one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    /// 1-based cycle number.
    pub cycle: u32,
    /// Whether the temperature alarm was raised.
    pub alarm: bool,
    /// Temperatures the decision was based on, in device order.
    pub temperatures: Vec<f64>,
    /// One report per device, in device order.
    pub reports: Vec<DeviceReport>,
}

/// Result of a monitoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub run_id: RunId,
    pub cycles_completed: u32,
    /// `true` when the shutdown signal stopped the run early.
    pub cancelled: bool,
    pub cycles: Vec<CycleOutcome>,
}

impl RunSummary {
    /// Outcome of the final completed cycle.
    #[must_use]
    pub fn last_cycle(&self) -> Option<&CycleOutcome> {
        self.cycles.last()
    }
}

/// The alarm rule: any temperature strictly above `threshold`.
#[must_use]
pub fn alarm_raised(temperatures: &[f64], threshold: f64) -> bool {
    temperatures.iter().any(|t| *t > threshold)
}

/// Intensity every actuator receives for a given alarm state.
#[must_use]
pub fn target_intensity(alarm: bool) -> Intensity {
    if alarm {
        Intensity::ALARM
    } else {
        Intensity::NORMAL
    }
}

/// Runs the sense → decide → act → report loop.
pub struct Monitor<S, P, R> {
    settings: MonitorSettings,
    sink: S,
    pause: P,
    rng: R,
}

impl<S, P, R> Monitor<S, P, R>
where
    S: NotificationSink,
    P: Pause,
    R: RngCore + Send,
{
    /// Create a monitor. `rng` feeds every sensor reading; seed it for
    /// reproducible runs.
    pub fn new(settings: MonitorSettings, sink: S, pause: P, rng: R) -> Self {
        Self {
            settings,
            sink,
            pause,
            rng,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    /// Run every configured cycle to completion.
    ///
    /// # Errors
    ///
    /// Returns [`IotSimError::Validation`] before any cycle runs when the
    /// settings are invalid, `devices` is empty, or two devices share an
    /// identifier.
    pub async fn run(&mut self, devices: &mut [Box<dyn Device>]) -> Result<RunSummary, IotSimError> {
        let (_keep_alive, shutdown) = watch::channel(false);
        self.run_until(devices, shutdown).await
    }

    /// Run until every cycle completes or `shutdown` turns `true`.
    ///
    /// The signal is consulted between cycles and interrupts the pause; a
    /// cycle that has started always finishes.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn run_until(
        &mut self,
        devices: &mut [Box<dyn Device>],
        shutdown: watch::Receiver<bool>,
    ) -> Result<RunSummary, IotSimError> {
        self.settings.validate()?;
        validate_devices(devices)?;
        let run_id = RunId::new();
        Ok(self.run_cycles(run_id, devices, shutdown).await)
    }

    #[tracing::instrument(skip(self, devices, shutdown), fields(cycles = self.settings.cycles))]
    async fn run_cycles(
        &mut self,
        run_id: RunId,
        devices: &mut [Box<dyn Device>],
        mut shutdown: watch::Receiver<bool>,
    ) -> RunSummary {
        let cycles = self.settings.cycles;
        self.emit(NotificationKind::RunStarted { run_id, cycles });

        let mut outcomes = Vec::new();
        let mut cancelled = false;
        let mut completed = 0;

        for cycle in 1..=cycles {
            if *shutdown.borrow() {
                cancelled = true;
                break;
            }

            outcomes.push(self.run_cycle(run_id, cycle, devices));
            completed = cycle;

            if cycle < cycles {
                tokio::select! {
                    () = self.pause.pause(self.settings.pause) => {}
                    Ok(()) = shutdown.changed() => {}
                }
            }
        }

        self.emit(NotificationKind::RunFinished {
            run_id,
            cycles_completed: completed,
            cancelled,
        });
        tracing::debug!(completed, cancelled, "monitoring run over");

        RunSummary {
            run_id,
            cycles_completed: completed,
            cancelled,
            cycles: outcomes,
        }
    }

    #[tracing::instrument(level = "debug", skip(self, run_id, devices))]
    fn run_cycle(
        &mut self,
        run_id: RunId,
        cycle: u32,
        devices: &mut [Box<dyn Device>],
    ) -> CycleOutcome {
        self.emit(NotificationKind::CycleStarted { run_id, cycle });

        self.sense(devices);

        let temperatures = temperatures(devices);
        let threshold = self.settings.temperature_threshold;
        let alarm = alarm_raised(&temperatures, threshold);
        self.emit(NotificationKind::AlarmEvaluated {
            run_id,
            cycle,
            alarm,
            threshold,
        });

        self.act(devices, target_intensity(alarm));

        let reports = self.report(run_id, cycle, devices);

        CycleOutcome {
            cycle,
            alarm,
            temperatures,
            reports,
        }
    }

    fn sense(&mut self, devices: &mut [Box<dyn Device>]) {
        for device in devices.iter_mut() {
            if let Some(sensor) = device.as_sensor_mut() {
                sensor.take_reading(&mut self.rng, &self.sink);
            }
        }
    }

    fn act(&self, devices: &mut [Box<dyn Device>], target: Intensity) {
        for device in devices.iter_mut() {
            let id = device.id().clone();
            if let Some(actuator) = device.as_actuator_mut() {
                if let Err(err) = actuator.adjust_intensity(target.into(), &self.sink) {
                    tracing::debug!(device_id = %id, %err, "actuator kept its previous intensity");
                }
            }
        }
    }

    fn report(
        &self,
        run_id: RunId,
        cycle: u32,
        devices: &[Box<dyn Device>],
    ) -> Vec<DeviceReport> {
        devices
            .iter()
            .map(|device| {
                let report = device.report();
                self.emit(NotificationKind::DeviceReported {
                    run_id,
                    cycle,
                    report: report.clone(),
                });
                report
            })
            .collect()
    }

    fn emit(&self, kind: NotificationKind) {
        self.sink.notify(Notification::new(kind));
    }
}

/// Stored temperatures of every device measuring temperature, whatever its
/// power state.
fn temperatures(devices: &[Box<dyn Device>]) -> Vec<f64> {
    devices
        .iter()
        .filter_map(|device| device.measurement())
        .filter(|m| m.quantity == Quantity::Temperature)
        .map(|m| m.value)
        .collect()
}

fn validate_devices(devices: &[Box<dyn Device>]) -> Result<(), ValidationError> {
    if devices.is_empty() {
        return Err(ValidationError::NoDevices);
    }
    let mut seen = HashSet::new();
    for device in devices {
        if !seen.insert(device.id()) {
            return Err(ValidationError::DuplicateDeviceId(device.id().clone()));
        }
    }
    Ok(())
}
