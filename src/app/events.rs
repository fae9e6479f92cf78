//! Outbound application events.
//!
//! The [`LightCupService`](super::service::LightCupService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Only state
//! transitions produce events; a steady fade is silent.

use crate::channel::ChannelId;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Startup seeding finished (carries the seeded levels).
    Started { level_a: u8, level_b: u8 },

    /// A tilt switch changed state between two samples.
    TiltChanged { channel: ChannelId, active: bool },

    /// A fade landed on a rail (0 or 255).
    RailReached { channel: ChannelId, level: u8 },
}
