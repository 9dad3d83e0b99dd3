//! Device port: the capability set every simulated device exposes.
//!
//! The monitor never asks *what* a device is. It asks what a device can
//! do: [`Device::as_sensor_mut`] and [`Device::as_actuator_mut`] return the
//! optional type-specific capability, and [`Device::measurement`] exposes the
//! last stored reading for the decision phase.

use iotsim_domain::control::{ControlValue, Intensity};
use iotsim_domain::error::AdjustError;
use iotsim_domain::id::DeviceId;
use iotsim_domain::measurement::{Measurement, Quantity};
use iotsim_domain::power::PowerState;
use iotsim_domain::report::{DeviceKind, DeviceReport};
use rand::RngCore;

use crate::ports::NotificationSink;

/// Identity, power control and reporting shared by every device.
pub trait Device: Send {
    /// Identifier assigned at construction; never changes.
    fn id(&self) -> &DeviceId;

    /// Presentation label used in reports.
    fn kind(&self) -> DeviceKind;

    /// Current power state.
    fn power(&self) -> PowerState;

    /// Switch the device on. Always succeeds and emits a notification.
    fn power_on(&mut self, sink: &dyn NotificationSink);

    /// Switch the device off. Always succeeds and emits a notification.
    fn power_off(&mut self, sink: &dyn NotificationSink);

    /// Snapshot of the device. Callable in any power state, and free of
    /// side effects: two calls without an intervening mutation are equal.
    fn report(&self) -> DeviceReport;

    /// Last stored measurement, for devices that measure something.
    fn measurement(&self) -> Option<Measurement> {
        None
    }

    /// The sensing capability, if this device has one.
    fn as_sensor_mut(&mut self) -> Option<&mut dyn Sensor> {
        None
    }

    /// The actuation capability, if this device has one.
    fn as_actuator_mut(&mut self) -> Option<&mut dyn Actuator> {
        None
    }
}

/// A device that produces a measured value while powered.
pub trait Sensor {
    /// What this sensor measures.
    fn quantity(&self) -> Quantity;

    /// Refresh the stored value and return it.
    ///
    /// While powered, draws a uniform sample from the quantity's simulated
    /// range using `rng` and rounds it to two decimals. While off, resets the
    /// stored value to `0.0` and returns `0.0`.
    fn take_reading(&mut self, rng: &mut dyn RngCore, sink: &dyn NotificationSink) -> f64;
}

/// A device that accepts a bounded control value while powered.
pub trait Actuator {
    /// Current intensity.
    fn intensity(&self) -> Intensity;

    /// Apply `value` as the new intensity.
    ///
    /// Checks, in order: the device is powered, `value` is an integer, and
    /// it lies in `[0, 100]`. A failed check emits a notification and leaves
    /// the intensity untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`AdjustError`] describing the failed check. The error is
    /// informational; callers are not expected to abort on it.
    fn adjust_intensity(
        &mut self,
        value: ControlValue,
        sink: &dyn NotificationSink,
    ) -> Result<Intensity, AdjustError>;
}
