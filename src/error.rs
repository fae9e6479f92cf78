//! Unified error type for the LightCups firmware.
//!
//! The control core itself is infallible (levels saturate).  Errors only
//! arise at the edges: configuration checks, board bring-up, and the
//! drivers behind the port traits.  All variants are `Copy`.

use core::fmt;

/// Every fallible library operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// A configuration value is out of range.
    Config(&'static str),
    /// The display rejected a draw call.
    Display,
    /// A GPIO or PWM pin operation failed.
    Pin(PinError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Display => write!(f, "display draw failed"),
            Self::Pin(e) => write!(f, "pin: {e}"),
        }
    }
}

impl core::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// Reading a tilt input failed.
    ReadFailed,
    /// Setting a PWM duty cycle failed.
    DutyWriteFailed,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "GPIO read failed"),
            Self::DutyWriteFailed => write!(f, "PWM duty write failed"),
        }
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Self::Pin(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
