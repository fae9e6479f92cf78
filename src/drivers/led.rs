//! Dimmable LED on one LEDC PWM channel.
//!
//! A brightness level (0–255) is applied as the duty fraction
//! `level / 255`, so the mapping is independent of the timer resolution.
//! With the 8-bit timer from [`pins`](crate::pins) it is exactly 1:1.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: wraps an `esp-idf-hal` `LedcDriver`.
//! On host/test: any `embedded-hal` [`SetDutyCycle`] mock.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::error::{Error, PinError};
use crate::ramp::LEVEL_MAX;

pub struct LedDriver<P> {
    pwm: P,
    level: u8,
}

impl<P: SetDutyCycle> LedDriver<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm, level: 0 }
    }

    pub fn try_set_level(&mut self, level: u8) -> Result<(), PinError> {
        self.pwm
            .set_duty_cycle_fraction(u16::from(level), u16::from(LEVEL_MAX))
            .map_err(|_| PinError::DutyWriteFailed)?;
        self.level = level;
        Ok(())
    }

    /// Apply `level`, logging (not propagating) a driver failure.
    pub fn set_level(&mut self, level: u8) {
        if let Err(e) = self.try_set_level(level) {
            warn!("LED: {} (level {})", Error::from(e), level);
        }
    }

    pub fn off(&mut self) {
        self.set_level(0);
    }

    /// Last level the PWM accepted.
    pub fn level(&self) -> u8 {
        self.level
    }
}
