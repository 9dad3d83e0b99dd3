//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the monitoring loop and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod device;
pub mod notification;
pub mod pause;

pub use device::{Actuator, Device, Sensor};
pub use notification::NotificationSink;
pub use pause::Pause;
