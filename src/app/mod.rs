//! Application core: pure domain logic, zero I/O.
//!
//! Startup seeding and the dual-gate fade loop.  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
