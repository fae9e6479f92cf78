//! Per-channel fade state (one tilt switch + one LED).

use crate::ramp;

/// Identifies one of the two light cups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    A,
    B,
}

impl ChannelId {
    /// Both channels, in processing order.
    pub const ALL: [ChannelId; 2] = [ChannelId::A, ChannelId::B];

    /// Array index for per-channel storage.
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl core::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// What changed during one [`Channel::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelUpdate {
    /// The sampled tilt state differs from the previous sample.
    pub tilt_changed: bool,
    /// The level moved onto a rail during this update.
    pub reached_rail: bool,
}

/// Live state of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    id: ChannelId,
    raw_active: bool,
    level: u8,
}

impl Channel {
    /// Seed a channel from its first sample: the level snaps to the rail.
    pub fn seeded(id: ChannelId, active: bool) -> Self {
        Self {
            id,
            raw_active: active,
            level: ramp::seed(active),
        }
    }

    /// Record a fresh sample and advance the level by one ramp step.
    pub fn update(&mut self, active: bool, step: u8) -> ChannelUpdate {
        let tilt_changed = active != self.raw_active;
        let before = self.level;

        self.raw_active = active;
        self.level = ramp::advance(active, before, step);

        ChannelUpdate {
            tilt_changed,
            reached_rail: self.level != before && ramp::is_rail(self.level),
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.raw_active
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// `true` once the level has settled on the rail its tilt state selects.
    pub fn is_settled(&self) -> bool {
        self.level == ramp::target(self.raw_active)
    }
}
