//! Dimmable light actuator.

use iotsim_app::ports::{Actuator, Device, NotificationSink};
use iotsim_domain::control::{ControlValue, Intensity};
use iotsim_domain::error::AdjustError;
use iotsim_domain::id::DeviceId;
use iotsim_domain::notification::{Notification, NotificationKind};
use iotsim_domain::power::PowerState;
use iotsim_domain::report::{DeviceKind, DeviceReport, ReportDetail};

use super::DeviceCore;

/// A simulated light with an intensity between 0 and 100 %.
///
/// The intensity is only ever changed by a successful
/// [`Actuator::adjust_intensity`]; powering off leaves it untouched.
#[derive(Debug, Clone)]
pub struct LightActuator {
    core: DeviceCore,
    intensity: Intensity,
}

impl LightActuator {
    /// Create a powered-off light at intensity 0.
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            core: DeviceCore::new(id),
            intensity: Intensity::OFF,
        }
    }

    /// Checks run in a fixed order: power, then type, then range.
    fn apply(&mut self, value: &ControlValue) -> Result<Intensity, AdjustError> {
        if !self.core.is_on() {
            return Err(AdjustError::PoweredOff {
                device_id: self.core.id.clone(),
            });
        }
        let intensity = Intensity::try_from(value)?;
        self.intensity = intensity;
        Ok(intensity)
    }
}

impl Device for LightActuator {
    fn id(&self) -> &DeviceId {
        &self.core.id
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::LightActuator
    }

    fn power(&self) -> PowerState {
        self.core.power
    }

    fn power_on(&mut self, sink: &dyn NotificationSink) {
        self.core.switch(PowerState::On, sink);
    }

    fn power_off(&mut self, sink: &dyn NotificationSink) {
        self.core.switch(PowerState::Off, sink);
    }

    fn report(&self) -> DeviceReport {
        DeviceReport {
            device_id: self.core.id.clone(),
            kind: DeviceKind::LightActuator,
            power: self.core.power,
            detail: Some(ReportDetail::Intensity {
                intensity: self.intensity,
            }),
        }
    }

    fn as_actuator_mut(&mut self) -> Option<&mut dyn Actuator> {
        Some(self)
    }
}

impl Actuator for LightActuator {
    fn intensity(&self) -> Intensity {
        self.intensity
    }

    fn adjust_intensity(
        &mut self,
        value: ControlValue,
        sink: &dyn NotificationSink,
    ) -> Result<Intensity, AdjustError> {
        let result = self.apply(&value);
        let device_id = self.core.id.clone();
        let kind = match &result {
            Ok(intensity) => NotificationKind::IntensityAdjusted {
                device_id,
                intensity: *intensity,
            },
            Err(error) => NotificationKind::AdjustRejected {
                device_id,
                error: error.clone(),
            },
        };
        sink.notify(Notification::new(kind));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotsim_app::sink::RecordingSink;
    use iotsim_domain::notification::Level;

    fn light_on(sink: &RecordingSink) -> LightActuator {
        let mut light = LightActuator::new("Light_Kitchen".parse().unwrap());
        light.power_on(sink);
        sink.clear();
        light
    }

    #[test]
    fn should_start_off_at_zero_intensity() {
        let light = LightActuator::new("Light_Kitchen".parse().unwrap());
        assert_eq!(light.power(), PowerState::Off);
        assert_eq!(light.intensity(), Intensity::OFF);
    }

    #[test]
    fn should_accept_range_boundaries() {
        let sink = RecordingSink::new();
        let mut light = light_on(&sink);

        assert_eq!(
            light.adjust_intensity(ControlValue::Int(0), &sink),
            Ok(Intensity::OFF)
        );
        assert_eq!(
            light.adjust_intensity(ControlValue::Int(100), &sink),
            Ok(Intensity::MAX)
        );
        assert_eq!(light.intensity(), Intensity::MAX);
        assert_eq!(sink.count_at(Level::Info), 2);
    }

    #[test]
    fn should_reject_out_of_range_and_keep_previous_value() {
        let sink = RecordingSink::new();
        let mut light = light_on(&sink);
        light
            .adjust_intensity(ControlValue::Int(50), &sink)
            .unwrap();

        for value in [-1_i64, 101, 150] {
            assert_eq!(
                light.adjust_intensity(ControlValue::Int(value), &sink),
                Err(AdjustError::OutOfRange { value })
            );
        }
        assert_eq!(light.intensity().percent(), 50);
        assert_eq!(sink.count_at(Level::Error), 3);
    }

    #[test]
    fn should_reject_non_integer_values() {
        let sink = RecordingSink::new();
        let mut light = light_on(&sink);

        for value in [ControlValue::Float(80.0), ControlValue::from("high")] {
            let result = light.adjust_intensity(value.clone(), &sink);
            assert_eq!(result, Err(AdjustError::NotAnInteger { value }));
        }
        assert_eq!(light.intensity(), Intensity::OFF);
    }

    #[test]
    fn should_check_type_before_range() {
        let sink = RecordingSink::new();
        let mut light = light_on(&sink);

        let result = light.adjust_intensity(ControlValue::Float(500.0), &sink);

        assert!(matches!(result, Err(AdjustError::NotAnInteger { .. })));
    }

    #[test]
    fn should_ignore_adjustment_while_off_with_warning() {
        let sink = RecordingSink::new();
        let mut light = LightActuator::new("Light_Kitchen".parse().unwrap());

        let result = light.adjust_intensity(ControlValue::from("garbage"), &sink);

        assert!(matches!(result, Err(AdjustError::PoweredOff { .. })));
        assert_eq!(light.intensity(), Intensity::OFF);
        assert_eq!(sink.count_at(Level::Warning), 1);
        assert_eq!(sink.count_at(Level::Error), 0);
    }

    #[test]
    fn should_keep_intensity_across_power_cycle() {
        let sink = RecordingSink::new();
        let mut light = light_on(&sink);
        light
            .adjust_intensity(Intensity::ALARM.into(), &sink)
            .unwrap();

        light.power_off(&sink);
        light.power_on(&sink);

        assert_eq!(light.intensity(), Intensity::ALARM);
    }

    #[test]
    fn should_report_intensity_without_changing_state() {
        let sink = RecordingSink::new();
        let mut light = light_on(&sink);
        light
            .adjust_intensity(Intensity::NORMAL.into(), &sink)
            .unwrap();

        let report = light.report();

        assert_eq!(report, light.report());
        assert_eq!(report.kind, DeviceKind::LightActuator);
        assert_eq!(
            report.detail,
            Some(ReportDetail::Intensity {
                intensity: Intensity::NORMAL
            })
        );
        assert!(light.measurement().is_none());
        assert!(light.as_sensor_mut().is_none());
    }
}
