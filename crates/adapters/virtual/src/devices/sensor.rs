//! Simulated sensors. Each one samples a uniform value from its quantity's
//! range when powered and stores `0.0` otherwise.

use iotsim_app::ports::{Device, NotificationSink, Sensor};
use iotsim_domain::id::DeviceId;
use iotsim_domain::measurement::{Measurement, Quantity};
use iotsim_domain::notification::{Notification, NotificationKind};
use iotsim_domain::power::PowerState;
use iotsim_domain::report::{DeviceKind, DeviceReport, ReportDetail};
use rand::{Rng, RngCore};

use super::DeviceCore;

/// Shared sampling state behind every concrete sensor type.
#[derive(Debug, Clone)]
struct Sampler {
    core: DeviceCore,
    last: Measurement,
}

impl Sampler {
    fn new(id: DeviceId, quantity: Quantity) -> Self {
        Self {
            core: DeviceCore::new(id),
            last: Measurement::zero(quantity),
        }
    }

    fn sample(&mut self, rng: &mut dyn RngCore, sink: &dyn NotificationSink) -> f64 {
        let quantity = self.last.quantity;
        self.last = if self.core.is_on() {
            Measurement::rounded(quantity, rng.gen_range(quantity.simulated_range()))
        } else {
            Measurement::zero(quantity)
        };
        sink.notify(Notification::new(NotificationKind::ReadingTaken {
            device_id: self.core.id.clone(),
            measurement: self.last,
        }));
        self.last.value
    }

    fn report(&self, kind: DeviceKind) -> DeviceReport {
        DeviceReport {
            device_id: self.core.id.clone(),
            kind,
            power: self.core.power,
            detail: Some(ReportDetail::Measurement(self.last)),
        }
    }
}

macro_rules! simulated_sensor {
    ($(#[$meta:meta])* $name:ident, $quantity:expr, $kind:expr, $accessor:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: Sampler,
        }

        impl $name {
            /// Create a powered-off sensor holding `0.0`.
            #[must_use]
            pub fn new(id: DeviceId) -> Self {
                Self {
                    inner: Sampler::new(id, $quantity),
                }
            }

            /// Last stored value, rounded to two decimals.
            #[must_use]
            pub fn $accessor(&self) -> f64 {
                self.inner.last.value
            }
        }

        impl Device for $name {
            fn id(&self) -> &DeviceId {
                &self.inner.core.id
            }

            fn kind(&self) -> DeviceKind {
                $kind
            }

            fn power(&self) -> PowerState {
                self.inner.core.power
            }

            fn power_on(&mut self, sink: &dyn NotificationSink) {
                self.inner.core.switch(PowerState::On, sink);
            }

            fn power_off(&mut self, sink: &dyn NotificationSink) {
                self.inner.core.switch(PowerState::Off, sink);
            }

            fn report(&self) -> DeviceReport {
                self.inner.report($kind)
            }

            fn measurement(&self) -> Option<Measurement> {
                Some(self.inner.last)
            }

            fn as_sensor_mut(&mut self) -> Option<&mut dyn Sensor> {
                Some(self)
            }
        }

        impl Sensor for $name {
            fn quantity(&self) -> Quantity {
                $quantity
            }

            fn take_reading(&mut self, rng: &mut dyn RngCore, sink: &dyn NotificationSink) -> f64 {
                self.inner.sample(rng, sink)
            }
        }
    };
}

simulated_sensor!(
    /// Temperature sensor sampling 20.00 to 40.00 °C.
    TemperatureSensor,
    Quantity::Temperature,
    DeviceKind::TemperatureSensor,
    temperature
);

simulated_sensor!(
    /// Relative humidity sensor sampling 30.00 to 90.00 %.
    HumiditySensor,
    Quantity::Humidity,
    DeviceKind::HumiditySensor,
    humidity
);
