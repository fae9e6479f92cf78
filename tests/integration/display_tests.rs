//! Status screen: static layout, field redraws, failure handling.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

use lightcups::adapters::display::ScreenAdapter;
use lightcups::app::ports::DisplayPort;
use lightcups::channel::ChannelId;
use lightcups::drivers::screen::{FIELD_A, FIELD_B, field_area};

use super::mock_hw::{DeadPanel, FrameBuffer};

fn drawn_screen() -> ScreenAdapter<FrameBuffer> {
    let mut screen = ScreenAdapter::new(FrameBuffer::new());
    screen.draw_static();
    screen
}

#[test]
fn static_layout_clears_and_draws_labels() {
    let screen = drawn_screen();
    let fb = screen.screen().target();

    // Background cleared from the initial red fill.
    assert_eq!(fb.pixel(169, 319), Rgb565::BLACK);
    assert_eq!(fb.pixel(0, 60), Rgb565::BLACK);

    // Header and both labels put white pixels on their rows.
    assert!(fb.rows(0, 13).contains(&Rgb565::WHITE));
    assert!(fb.rows(FIELD_A.label_y, FIELD_A.label_y + 13).contains(&Rgb565::WHITE));
    assert!(fb.rows(FIELD_B.label_y, FIELD_B.label_y + 13).contains(&Rgb565::WHITE));

    // Value fields stay empty until the first render.
    assert_eq!(fb.lit_in(&field_area(ChannelId::A)), 0);
    assert_eq!(fb.lit_in(&field_area(ChannelId::B)), 0);
}

#[test]
fn render_draws_both_fields() {
    let mut screen = drawn_screen();
    screen.render_levels(255, 0);

    let fb = screen.screen().target();
    assert!(fb.lit_in(&field_area(ChannelId::A)) > 0);
    assert!(fb.lit_in(&field_area(ChannelId::B)) > 0, "\"0\" has lit pixels too");
    assert_eq!(screen.screen().shown(ChannelId::A), Some(255));
    assert_eq!(screen.screen().shown(ChannelId::B), Some(0));
}

#[test]
fn render_leaves_labels_untouched() {
    let mut screen = drawn_screen();
    let labels_before = screen.screen().target().rows(0, FIELD_A.value_y);

    for level in [0u8, 17, 128, 255] {
        screen.render_levels(level, 255 - level);
    }

    assert_eq!(screen.screen().target().rows(0, FIELD_A.value_y), labels_before);
}

#[test]
fn repeated_render_is_idempotent() {
    let mut screen = drawn_screen();
    screen.render_levels(42, 200);
    let first = screen.screen().target().snapshot();
    let writes = screen.screen().target().pixel_writes;

    screen.render_levels(42, 200);
    assert_eq!(screen.screen().target().snapshot(), first);
    assert_eq!(
        screen.screen().target().pixel_writes,
        writes,
        "unchanged fields are not redrawn"
    );
}

#[test]
fn shorter_number_erases_longer_one() {
    let mut direct = drawn_screen();
    direct.render_levels(7, 0);
    let expected = direct.screen().target().snapshot();

    let mut screen = drawn_screen();
    screen.render_levels(255, 0);
    screen.render_levels(7, 0);
    assert_eq!(screen.screen().target().snapshot(), expected);
}

#[test]
fn only_changed_field_is_repainted() {
    let mut screen = drawn_screen();
    screen.render_levels(10, 20);
    let b_before = screen
        .screen()
        .target()
        .rows(FIELD_B.value_y, FIELD_B.value_y + 13);

    screen.render_levels(12, 20);
    assert_eq!(screen.screen().shown(ChannelId::A), Some(12));
    assert_eq!(
        screen
            .screen()
            .target()
            .rows(FIELD_B.value_y, FIELD_B.value_y + 13),
        b_before
    );
}

#[test]
fn redrawing_static_forces_next_render() {
    let mut screen = drawn_screen();
    screen.render_levels(99, 99);
    screen.draw_static();
    assert_eq!(screen.screen().shown(ChannelId::A), None);

    screen.render_levels(99, 99);
    assert!(screen.screen().target().lit_in(&field_area(ChannelId::A)) > 0);
}

#[test]
fn dead_panel_is_logged_not_fatal() {
    let mut screen = ScreenAdapter::new(DeadPanel);
    screen.draw_static();
    screen.render_levels(1, 2);
    assert_eq!(screen.screen().shown(ChannelId::A), None);
    assert_eq!(screen.screen().shown(ChannelId::B), None);
}
