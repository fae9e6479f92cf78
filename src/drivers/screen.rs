//! Status screen layout on any `embedded-graphics` RGB565 target.
//!
//! ```text
//!  y=0    ---------------------------
//!  y=16    KY027 Magic Light Cups
//!  y=32   ---------------------------
//!  y=70   LED A Brightness:
//!  y=90   <level A>
//!  y=120  LED B Brightness:
//!  y=140  <level B>
//! ```
//!
//! The static part is drawn once.  Each value field is blanked to
//! [`FIELD_CHARS`] characters before the new number goes in, and a field
//! whose value has not changed since the last draw is skipped entirely.

use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X13},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::channel::ChannelId;

const FOREGROUND: Rgb565 = Rgb565::WHITE;
const BACKGROUND: Rgb565 = Rgb565::BLACK;

const CHAR_WIDTH: u32 = 6;
const LINE_HEIGHT: i32 = 16;

pub const HEADER_RULE: &str = "---------------------------";
pub const TITLE: &str = " KY027 Magic Light Cups";

/// Width of a value field in characters; blanked before every redraw.
pub const FIELD_CHARS: u32 = 6;

/// Where one channel's label and value live on screen.
#[derive(Debug, Clone, Copy)]
pub struct FieldLayout {
    pub label: &'static str,
    pub label_y: i32,
    pub value_y: i32,
}

pub const FIELD_A: FieldLayout = FieldLayout {
    label: "LED A Brightness:",
    label_y: 70,
    value_y: 90,
};

pub const FIELD_B: FieldLayout = FieldLayout {
    label: "LED B Brightness:",
    label_y: 120,
    value_y: 140,
};

pub const fn field(id: ChannelId) -> FieldLayout {
    match id {
        ChannelId::A => FIELD_A,
        ChannelId::B => FIELD_B,
    }
}

/// Bounding box of a channel's value field.
pub fn field_area(id: ChannelId) -> Rectangle {
    Rectangle::new(
        Point::new(0, field(id).value_y),
        Size::new(FIELD_CHARS * CHAR_WIDTH, FONT_6X13.character_size.height),
    )
}

/// Decimal digits of `level`, written right-aligned into `buf`.
fn level_digits(level: u8, buf: &mut [u8; 3]) -> &str {
    let mut n = level;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // ASCII digits only.
    core::str::from_utf8(&buf[start..]).unwrap_or_default()
}

pub struct LevelScreen<D> {
    target: D,
    drawn: [Option<u8>; 2],
}

impl<D> LevelScreen<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            drawn: [None; 2],
        }
    }

    fn text_style() -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyleBuilder::new()
            .font(&FONT_6X13)
            .text_color(FOREGROUND)
            .background_color(BACKGROUND)
            .build()
    }

    fn text(&mut self, s: &str, y: i32) -> Result<(), D::Error> {
        Text::with_baseline(s, Point::new(0, y), Self::text_style(), Baseline::Top)
            .draw(&mut self.target)?;
        Ok(())
    }

    /// Clear the panel and draw header and labels.  Forgets cached values,
    /// so the next [`draw_level`](Self::draw_level) always paints.
    pub fn draw_static(&mut self) -> Result<(), D::Error> {
        // Cleared before drawing: a failure part-way leaves blank fields.
        self.drawn = [None; 2];
        self.target.clear(BACKGROUND)?;

        self.text(HEADER_RULE, 0)?;
        self.text(TITLE, LINE_HEIGHT)?;
        self.text(HEADER_RULE, 2 * LINE_HEIGHT)?;

        for id in ChannelId::ALL {
            let layout = field(id);
            self.text(layout.label, layout.label_y)?;
        }

        Ok(())
    }

    /// Redraw one value field.  Returns `false` if the field already shows
    /// `level` and nothing was drawn.
    pub fn draw_level(&mut self, id: ChannelId, level: u8) -> Result<bool, D::Error> {
        if self.drawn[id.index()] == Some(level) {
            return Ok(false);
        }

        field_area(id)
            .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
            .draw(&mut self.target)?;

        let mut buf = [0u8; 3];
        self.text(level_digits(level, &mut buf), field(id).value_y)?;

        self.drawn[id.index()] = Some(level);
        Ok(true)
    }

    /// Value currently shown in a field, if any.
    pub fn shown(&self, id: ChannelId) -> Option<u8> {
        self.drawn[id.index()]
    }

    pub fn target(&self) -> &D {
        &self.target
    }
}
