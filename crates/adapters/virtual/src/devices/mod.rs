//! Simulated device implementations: sensors and a dimmable light.
//!
//! Every device embeds a [`DeviceCore`] holding its identifier and power
//! state, so power handling and its notifications are written once.

mod light;
mod sensor;

pub use light::LightActuator;
pub use sensor::{HumiditySensor, TemperatureSensor};

use iotsim_app::ports::NotificationSink;
use iotsim_domain::id::DeviceId;
use iotsim_domain::notification::{Notification, NotificationKind};
use iotsim_domain::power::PowerState;

/// Identity and power state shared by every simulated device.
#[derive(Debug, Clone)]
struct DeviceCore {
    id: DeviceId,
    power: PowerState,
}

impl DeviceCore {
    /// New devices start powered off.
    fn new(id: DeviceId) -> Self {
        Self {
            id,
            power: PowerState::Off,
        }
    }

    fn is_on(&self) -> bool {
        self.power.is_on()
    }

    fn switch(&mut self, power: PowerState, sink: &dyn NotificationSink) {
        self.power = power;
        let device_id = self.id.clone();
        let kind = match power {
            PowerState::On => NotificationKind::PoweredOn { device_id },
            PowerState::Off => NotificationKind::PoweredOff { device_id },
        };
        sink.notify(Notification::new(kind));
    }
}
