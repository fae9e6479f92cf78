//! Hardware adapter: bridges the tilt switches and LEDs to the port traits.
//!
//! Owns one [`TiltSensor`] and one [`LedDriver`] per channel and exposes
//! them through [`TiltPort`] and [`LedPort`].  Generic over the
//! `embedded-hal` pin traits: on the device these are `esp-idf-hal`
//! `PinDriver` / `LedcDriver`, in tests they are mocks.

use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::{LedPort, TiltPort};
use crate::channel::ChannelId;
use crate::drivers::led::LedDriver;
use crate::drivers::tilt::TiltSensor;

/// Concrete adapter that combines both light cups behind port traits.
pub struct HardwareAdapter<T, L> {
    tilt: [TiltSensor<T>; 2],
    leds: [LedDriver<L>; 2],
}

impl<T, L> HardwareAdapter<T, L>
where
    T: InputPin,
    L: SetDutyCycle,
{
    pub fn new(tilt_a: T, tilt_b: T, led_a: L, led_b: L) -> Self {
        Self {
            tilt: [TiltSensor::new(tilt_a), TiltSensor::new(tilt_b)],
            leds: [LedDriver::new(led_a), LedDriver::new(led_b)],
        }
    }

    /// Last level each LED accepted, `(A, B)`.
    pub fn led_levels(&self) -> (u8, u8) {
        (self.leds[0].level(), self.leds[1].level())
    }

    /// Turn both LEDs off.
    pub fn all_off(&mut self) {
        for led in &mut self.leds {
            led.off();
        }
    }
}

// ── TiltPort implementation ───────────────────────────────────

impl<T: InputPin, L> TiltPort for HardwareAdapter<T, L> {
    fn read_channel(&mut self, id: ChannelId) -> bool {
        self.tilt[id.index()].is_tilted()
    }
}

// ── LedPort implementation ────────────────────────────────────

impl<T, L: SetDutyCycle> LedPort for HardwareAdapter<T, L> {
    fn write_channel(&mut self, id: ChannelId, level: u8) {
        self.leds[id.index()].set_level(level);
    }
}
