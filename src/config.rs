//! Control-loop timing and ramp parameters.
//!
//! Compile-time defaults only; nothing is loaded or persisted.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ramp::DEFAULT_STEP;

/// Core loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Tilt sampling + ramp interval (milliseconds)
    pub sample_period_ms: u32,
    /// Display refresh interval (milliseconds)
    pub render_period_ms: u32,
    /// Brightness change per sample tick
    pub ramp_step: u8,
    /// Longest a single loop pass may take before the task watchdog fires
    pub watchdog_timeout_ms: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: 5,   // 200 Hz
            render_period_ms: 100, // 10 Hz
            ramp_step: DEFAULT_STEP,
            watchdog_timeout_ms: 5_000,
        }
    }
}

impl LoopConfig {
    /// Reject parameters that would stall a fade or spin a gate.
    pub fn validate(&self) -> Result<()> {
        if self.ramp_step == 0 {
            return Err(Error::Config("ramp_step must be non-zero"));
        }
        if self.sample_period_ms == 0 {
            return Err(Error::Config("sample_period_ms must be non-zero"));
        }
        if self.render_period_ms == 0 {
            return Err(Error::Config("render_period_ms must be non-zero"));
        }
        if self.watchdog_timeout_ms <= self.sample_period_ms.max(self.render_period_ms) {
            return Err(Error::Config("watchdog_timeout_ms must exceed both periods"));
        }
        Ok(())
    }

    /// Worst-case fade duration from one rail to the other (milliseconds).
    pub fn full_fade_ms(&self) -> u32 {
        let ticks = crate::ramp::ticks_to_rail(true, crate::ramp::LEVEL_MIN, self.ramp_step);
        ticks.saturating_mul(self.sample_period_ms)
    }
}
