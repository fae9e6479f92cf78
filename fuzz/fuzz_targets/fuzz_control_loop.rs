//! Fuzz target: control loop under arbitrary timing and tilt input
//!
//! Each input byte is one loop pass: the low six bits advance the clock,
//! bits 6 and 7 are the tilt states of cups A and B.  Verifies:
//! - No panics, including across a u32 clock wrap
//! - A level moves by at most one ramp step per pass
//! - A level only moves toward the rail its tilt state selects
//!
//! cargo fuzz run fuzz_control_loop

#![no_main]

use libfuzzer_sys::fuzz_target;
use lightcups::app::events::AppEvent;
use lightcups::app::ports::{DisplayPort, EventSink, LedPort, TiltPort};
use lightcups::app::service::LightCupService;
use lightcups::channel::ChannelId;
use lightcups::config::LoopConfig;

struct Rig {
    tilted: [bool; 2],
    written: [u8; 2],
}

impl TiltPort for Rig {
    fn read_channel(&mut self, id: ChannelId) -> bool {
        self.tilted[id.index()]
    }
}

impl LedPort for Rig {
    fn write_channel(&mut self, id: ChannelId, level: u8) {
        self.written[id.index()] = level;
    }
}

struct NullDisplay;

impl DisplayPort for NullDisplay {
    fn draw_static(&mut self) {}
    fn render_levels(&mut self, _level_a: u8, _level_b: u8) {}
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, passes)) = data.split_first() else {
        return;
    };

    let config = LoopConfig::default();
    let step = config.ramp_step;
    let mut app = LightCupService::new(config);
    let mut rig = Rig {
        tilted: [first & 0x40 != 0, first & 0x80 != 0],
        written: [0; 2],
    };

    // Start near the top of the clock so long inputs cross the wrap.
    let mut now = u32::MAX - 2_000;
    app.start(&mut rig, &mut NullDisplay, &mut NullSink);

    for &byte in passes {
        now = now.wrapping_add(u32::from(byte & 0x3F));
        rig.tilted = [byte & 0x40 != 0, byte & 0x80 != 0];

        let (a, b) = app.levels();
        app.poll(now, &mut rig, &mut NullDisplay, &mut NullSink);
        let after = app.levels();

        for (before, after, active) in [(a, after.0, rig.tilted[0]), (b, after.1, rig.tilted[1])] {
            assert!(before.abs_diff(after) <= step);
            if active {
                assert!(after >= before);
            } else {
                assert!(after <= before);
            }
        }
        assert_eq!(rig.written, [after.0, after.1]);
    }
});
