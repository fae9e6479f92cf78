//! Peripheral drivers: tilt inputs, LED PWM, status screen, watchdog.

pub mod led;
pub mod screen;
pub mod tilt;
pub mod watchdog;
