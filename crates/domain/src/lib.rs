//! # iotsim-domain
//!
//! Pure domain model for the iotsim device simulation.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Describe device **power state** and the **kinds** of simulated devices
//! - Define **measurements** (temperature, humidity) and their valid ranges
//! - Define the bounded **intensity** value accepted by light actuators
//! - Define **reports** (per-device snapshots) and **notifications**
//!   (records of everything observable that happens during a run)
//! - Define **monitor settings** and enforce their invariants
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod control;
pub mod measurement;
pub mod notification;
pub mod power;
pub mod report;
pub mod settings;
