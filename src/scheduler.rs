//! Dual-gate polling scheduler.
//!
//! Two independent periodic gates share one millisecond clock read per
//! loop pass.  Each gate fires when `now - previous >= period` and then
//! resets `previous` to `now`:
//!
//! ```text
//!  now_ms ──┬──▶ [ sample gate  5 ms ] ──▶ DueTasks.sample
//!           └──▶ [ render gate 100 ms ] ──▶ DueTasks.render
//! ```
//!
//! There is no backlog.  A pass delayed by several periods fires each
//! gate once, and the next period is measured from that pass.  The clock
//! is a wrapping `u32`, so elapsed time survives the rollover.

use log::debug;

use crate::config::LoopConfig;

/// The two scheduled tasks of the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskId {
    /// Sample tilt switches, advance ramps, write LEDs.
    SampleRamp,
    /// Redraw the two level fields.
    Render,
}

/// One fixed-period gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTimer {
    period_ms: u32,
    previous_ms: u32,
}

impl PeriodicTimer {
    /// A gate whose reference point is boot (`t = 0`).
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            previous_ms: 0,
        }
    }

    /// Milliseconds since the last fire (wrapping).
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.previous_ms)
    }

    /// Whether the gate would fire at `now_ms`.
    pub fn is_due(&self, now_ms: u32) -> bool {
        self.elapsed(now_ms) >= self.period_ms
    }

    /// Fire if due.  On fire the reference point becomes `now_ms`.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if self.is_due(now_ms) {
            self.previous_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Move the reference point without firing.
    pub fn reset(&mut self, now_ms: u32) {
        self.previous_ms = now_ms;
    }

    pub fn previous_ms(&self) -> u32 {
        self.previous_ms
    }
}

/// Gates that fired during one [`Scheduler::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DueTasks {
    pub sample: bool,
    pub render: bool,
}

impl DueTasks {
    /// Fired tasks in execution order.
    pub fn iter(self) -> impl Iterator<Item = TaskId> {
        [
            self.sample.then_some(TaskId::SampleRamp),
            self.render.then_some(TaskId::Render),
        ]
        .into_iter()
        .flatten()
    }

    pub fn any(self) -> bool {
        self.sample || self.render
    }
}

/// The scheduler engine: one sample gate and one render gate.
#[derive(Debug, Clone)]
pub struct Scheduler {
    sample: PeriodicTimer,
    render: PeriodicTimer,
}

impl Scheduler {
    pub fn new(config: &LoopConfig) -> Self {
        debug!(
            "Scheduler: sample every {} ms, render every {} ms",
            config.sample_period_ms, config.render_period_ms
        );
        Self {
            sample: PeriodicTimer::new(config.sample_period_ms),
            render: PeriodicTimer::new(config.render_period_ms),
        }
    }

    /// Evaluate both gates against a single clock read.
    ///
    /// Each gate fires at most once per call.
    pub fn poll(&mut self, now_ms: u32) -> DueTasks {
        DueTasks {
            sample: self.sample.poll(now_ms),
            render: self.render.poll(now_ms),
        }
    }
}
