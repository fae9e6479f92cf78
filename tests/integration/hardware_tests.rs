//! Hardware adapter: tilt polarity and LED duty mapping through mock pins.

use lightcups::adapters::hardware::HardwareAdapter;
use lightcups::app::ports::{LedPort, TiltPort};
use lightcups::channel::ChannelId;

use super::mock_hw::{MockPwm, MockTiltLine};

struct Rig {
    hw: HardwareAdapter<MockTiltLine, MockPwm>,
    tilt_a: MockTiltLine,
    tilt_b: MockTiltLine,
    led_a: MockPwm,
    led_b: MockPwm,
}

fn rig() -> Rig {
    let (tilt_a, tilt_b) = (MockTiltLine::new(), MockTiltLine::new());
    let (led_a, led_b) = (MockPwm::new(), MockPwm::new());
    Rig {
        hw: HardwareAdapter::new(tilt_a.clone(), tilt_b.clone(), led_a.clone(), led_b.clone()),
        tilt_a,
        tilt_b,
        led_a,
        led_b,
    }
}

#[test]
fn low_line_reads_as_active() {
    let mut r = rig();
    assert!(!r.hw.read_channel(ChannelId::A), "line idles HIGH = upright");

    r.tilt_a.set_tilted(true);
    assert!(r.hw.read_channel(ChannelId::A));
    assert!(!r.hw.read_channel(ChannelId::B));

    r.tilt_b.set_tilted(true);
    assert!(r.hw.read_channel(ChannelId::B));
}

#[test]
fn level_is_written_as_duty() {
    let mut r = rig();
    r.hw.write_channel(ChannelId::A, 255);
    r.hw.write_channel(ChannelId::B, 128);
    assert_eq!(r.led_a.duty(), 255);
    assert_eq!(r.led_b.duty(), 128);
    assert_eq!(r.hw.led_levels(), (255, 128));
}

#[test]
fn all_off_darkens_both() {
    let mut r = rig();
    r.hw.write_channel(ChannelId::A, 200);
    r.hw.write_channel(ChannelId::B, 100);
    r.hw.all_off();
    assert_eq!((r.led_a.duty(), r.led_b.duty()), (0, 0));
}
