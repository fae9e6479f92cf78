//! Control service: the fade loop core.
//!
//! [`LightCupService`] owns both channels and the scheduler.  It exposes
//! a hardware-agnostic API; all I/O flows through port traits injected at
//! call sites, so the whole loop is testable with mock adapters.
//!
//! ```text
//!   TiltPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                │     LightCupService       │
//!    LedPort ◀── │  Channel A · Channel B    │ ──▶ DisplayPort
//!                │  Scheduler (5 / 100 ms)   │
//!                └──────────────────────────┘
//! ```

use log::info;

use crate::channel::{Channel, ChannelId};
use crate::config::LoopConfig;
use crate::ramp;
use crate::scheduler::{DueTasks, Scheduler};

use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink, LedPort, TiltPort};

/// The control service orchestrates seeding, ramping and rendering.
pub struct LightCupService {
    config: LoopConfig,
    scheduler: Scheduler,
    channels: [Channel; 2],
}

impl LightCupService {
    /// Construct the service.  Channels start dark until [`start`](Self::start)
    /// seeds them from the first sample.
    pub fn new(config: LoopConfig) -> Self {
        Self {
            scheduler: Scheduler::new(&config),
            channels: [
                Channel::seeded(ChannelId::A, false),
                Channel::seeded(ChannelId::B, false),
            ],
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Draw the static screen, seed both channels from one sample each and
    /// commit the seeded levels to the LEDs.
    pub fn start(
        &mut self,
        hw: &mut (impl TiltPort + LedPort),
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        display.draw_static();

        for id in ChannelId::ALL {
            let active = hw.read_channel(id);
            let channel = Channel::seeded(id, active);
            hw.write_channel(id, channel.level());
            self.channels[id.index()] = channel;
        }

        let (level_a, level_b) = self.levels();
        sink.emit(&AppEvent::Started { level_a, level_b });
        info!(
            "LightCupService started (A={} B={}, full fade {} ms)",
            level_a,
            level_b,
            self.config.full_fade_ms()
        );
    }

    // ── Per-pass orchestration ────────────────────────────────

    /// Run one loop pass at `now_ms`.
    ///
    /// The sample/ramp task runs first, so a render firing in the same pass
    /// shows the freshly ramped levels.
    pub fn poll(
        &mut self,
        now_ms: u32,
        hw: &mut (impl TiltPort + LedPort),
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) -> DueTasks {
        let due = self.scheduler.poll(now_ms);

        if due.sample {
            self.sample_and_ramp(hw, sink);
        }
        if due.render {
            self.render(display);
        }

        due
    }

    fn sample_and_ramp(&mut self, hw: &mut (impl TiltPort + LedPort), sink: &mut impl EventSink) {
        let step = self.config.ramp_step;

        for channel in &mut self.channels {
            let id = channel.id();
            let active = hw.read_channel(id);
            let update = channel.update(active, step);

            if update.tilt_changed {
                sink.emit(&AppEvent::TiltChanged { channel: id, active });
            }
            if update.reached_rail {
                sink.emit(&AppEvent::RailReached {
                    channel: id,
                    level: channel.level(),
                });
            }

            hw.write_channel(id, channel.level());
        }
    }

    fn render(&self, display: &mut impl DisplayPort) {
        let (level_a, level_b) = self.levels();
        display.render_levels(level_a, level_b);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current `(A, B)` levels.
    pub fn levels(&self) -> (u8, u8) {
        (
            self.channels[ChannelId::A.index()].level(),
            self.channels[ChannelId::B.index()].level(),
        )
    }

    pub fn channel(&self, id: ChannelId) -> &Channel {
        &self.channels[id.index()]
    }

    /// Ticks until both channels settle on their rails.
    pub fn ticks_to_settle(&self) -> u32 {
        self.channels
            .iter()
            .map(|c| ramp::ticks_to_rail(c.is_active(), c.level(), self.config.ramp_step))
            .max()
            .unwrap_or(0)
    }
}
