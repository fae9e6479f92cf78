//! KY-027 tilt switch input.
//!
//! The module's D0 line is active-low: the mercury switch pulls it LOW
//! when the cup is tilted.  This driver is the only place that knows
//! about the polarity; everything above sees `true` = tilted.
//!
//! Generic over any `embedded-hal` 1.0 [`InputPin`], so host tests can
//! drive it with a plain mock pin.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::error::{Error, PinError};

pub struct TiltSensor<P> {
    pin: P,
    last: bool,
    read_failed: bool,
}

impl<P: InputPin> TiltSensor<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last: false,
            read_failed: false,
        }
    }

    /// Sample the switch.  `true` when the physical line is LOW.
    pub fn try_is_tilted(&mut self) -> Result<bool, PinError> {
        self.pin.is_low().map_err(|_| PinError::ReadFailed)
    }

    /// Sample the switch, falling back to the last good reading on error.
    ///
    /// A failure is logged once per outage rather than once per sample.
    pub fn is_tilted(&mut self) -> bool {
        match self.try_is_tilted() {
            Ok(tilted) => {
                self.last = tilted;
                self.read_failed = false;
            }
            Err(e) => {
                if !self.read_failed {
                    warn!("Tilt sensor: {}, holding last state ({})", Error::from(e), self.last);
                }
                self.read_failed = true;
            }
        }
        self.last
    }
}
