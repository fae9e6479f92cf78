//! Brightness ramp: the integrate-and-clamp rule behind every fade.
//!
//! A channel's level walks toward one of two rails: [`LEVEL_MAX`] while the
//! tilt switch is active, [`LEVEL_MIN`] while it is not.  Each call to
//! [`advance`] moves at most `step` and lands exactly on the rail when the
//! step would cross it.
//!
//! ```text
//!   active   ──▶  0 ─ 2 ─ 4 ─ … ─ 252 ─ 254 ─ 255 ─ 255
//!   inactive ──▶ 255 ─ 253 ─ … ─ 3 ─ 1 ─ 0 ─ 0
//! ```
//!
//! Levels are `u8`, so the [0, 255] range holds by construction and the
//! clamp is plain saturating arithmetic.

/// Lower rail: LED fully off.
pub const LEVEL_MIN: u8 = 0;
/// Upper rail: LED fully on (8-bit PWM full scale).
pub const LEVEL_MAX: u8 = u8::MAX;
/// Default per-tick step, shared by both channels.
pub const DEFAULT_STEP: u8 = 2;

/// Move `level` one step toward the rail selected by `active`.
pub fn advance(active: bool, level: u8, step: u8) -> u8 {
    if active {
        if level < LEVEL_MAX {
            level.saturating_add(step)
        } else {
            level
        }
    } else if level > LEVEL_MIN {
        level.saturating_sub(step)
    } else {
        level
    }
}

/// Startup level for a channel: snap straight to the rail, no fade.
pub fn seed(active: bool) -> u8 {
    target(active)
}

/// The rail a channel in state `active` is heading for.
pub fn target(active: bool) -> u8 {
    if active { LEVEL_MAX } else { LEVEL_MIN }
}

/// `true` if `level` sits on either rail.
pub fn is_rail(level: u8) -> bool {
    level == LEVEL_MIN || level == LEVEL_MAX
}

/// Number of [`advance`] calls needed to reach the rail from `level`.
///
/// Returns 0 when already there.  A zero `step` never converges and
/// reports `u32::MAX` unless the level is already on the rail.
pub fn ticks_to_rail(active: bool, level: u8, step: u8) -> u32 {
    let distance = u32::from(target(active).abs_diff(level));
    if distance == 0 {
        return 0;
    }
    if step == 0 {
        return u32::MAX;
    }
    distance.div_ceil(u32::from(step))
}
