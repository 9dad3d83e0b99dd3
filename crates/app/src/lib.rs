//! # iotsim-app
//!
//! Application layer: the monitoring use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `Device`: identity, power control, reporting, capability access
//!   - `Sensor` / `Actuator`: the type-specific capabilities
//!   - `NotificationSink`: where observable events go
//!   - `Pause`: how the loop waits between cycles
//! - Provide the **monitoring loop** (`Monitor`): sense → decide → act → report
//! - Provide in-process sinks and pauses that don't need IO
//!
//! ## Dependency rule
//! Depends on `iotsim-domain` only (plus `tokio` for timers and the shutdown
//! signal, and `rand` for the injected random source).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod monitor;
pub mod pause;
pub mod ports;
pub mod sink;
