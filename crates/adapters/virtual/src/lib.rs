//! # iotsim-adapter-virtual
//!
//! Simulated devices implementing the `iotsim-app` device ports.
//!
//! ## Provided devices
//!
//! | Device | Kind | Behaviour |
//! |--------|------|-----------|
//! | [`TemperatureSensor`] | sensor | Samples 20.00 to 40.00 °C while on |
//! | [`HumiditySensor`] | sensor | Samples 30.00 to 90.00 % while on |
//! | [`LightActuator`] | actuator | Accepts integer intensities 0 to 100 while on |
//!
//! Every device starts powered off. A reading taken while off stores `0.0`.
//!
//! ## Dependency rule
//!
//! Depends on `iotsim-app` (port traits) and `iotsim-domain` only.

mod devices;

pub use devices::{HumiditySensor, LightActuator, TemperatureSensor};

use iotsim_app::ports::{Device, NotificationSink};
use iotsim_domain::error::ValidationError;

/// Identifiers of the demonstration device set, in report order.
pub const DEMO_TEMPERATURE_SENSORS: [&str; 2] = ["TempSensor_01", "TempSensor_02"];
pub const DEMO_HUMIDITY_SENSORS: [&str; 1] = ["HumSensor_01"];
pub const DEMO_LIGHTS: [&str; 2] = ["Light_LivingRoom", "Light_Kitchen"];

/// Build the demonstration set: two temperature sensors, one humidity
/// sensor and two lights, all powered off.
///
/// # Errors
///
/// Returns a validation error if an identifier is rejected.
pub fn demo_devices() -> Result<Vec<Box<dyn Device>>, ValidationError> {
    let mut devices: Vec<Box<dyn Device>> = Vec::with_capacity(5);
    for id in DEMO_TEMPERATURE_SENSORS {
        devices.push(Box::new(TemperatureSensor::new(id.parse()?)));
    }
    for id in DEMO_HUMIDITY_SENSORS {
        devices.push(Box::new(HumiditySensor::new(id.parse()?)));
    }
    for id in DEMO_LIGHTS {
        devices.push(Box::new(LightActuator::new(id.parse()?)));
    }
    Ok(devices)
}

/// Power on every device, in order.
pub fn power_on_all(devices: &mut [Box<dyn Device>], sink: &dyn NotificationSink) {
    for device in devices.iter_mut() {
        device.power_on(sink);
    }
}
