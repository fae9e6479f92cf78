//! Port traits: the boundary between the fade loop and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LightCupService (domain)
//! ```
//!
//! Driven adapters (tilt inputs, LED PWM, screen, clock, event sinks)
//! implement these traits.  The [`LightCupService`](super::service::LightCupService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! None of the ports return errors: the collaborators are assumed to
//! succeed, and adapters log and swallow driver failures.

use crate::channel::ChannelId;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: raw tilt state per channel.
pub trait TiltPort {
    /// Current tilt state, polarity-normalised (`true` = tilted/active).
    fn read_channel(&mut self, id: ChannelId) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: commit a brightness level to a channel's LED.
pub trait LedPort {
    fn write_channel(&mut self, id: ChannelId, level: u8);
}

// ───────────────────────────────────────────────────────────────
// Display port
// ───────────────────────────────────────────────────────────────

/// The status screen.
pub trait DisplayPort {
    /// One-time static layout: background, header, field labels.
    fn draw_static(&mut self);

    /// Redraw the two level fields only.  Must be idempotent.
    fn render_levels(&mut self, level_a: u8, level_b: u8);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock (wraps at `u32::MAX`).
pub trait Clock {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
