//! Mock pins and panel for integration tests.
//!
//! Pins share their state through `Rc<Cell<_>>` handles, so a test can
//! flip a tilt line or inspect a duty value after the pin has been moved
//! into an adapter.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::digital::{ErrorType as DigitalErrorType, InputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};

use lightcups::pins::{LCD_HEIGHT, LCD_WIDTH};

// ── Tilt input ────────────────────────────────────────────────

/// Physical line level of a KY-027 D0 output.  Starts HIGH (upright).
#[derive(Clone)]
pub struct MockTiltLine {
    high: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl MockTiltLine {
    pub fn new() -> Self {
        Self {
            high: Rc::new(Cell::new(true)),
        }
    }

    /// Tilted pulls the line LOW.
    pub fn set_tilted(&self, tilted: bool) {
        self.high.set(!tilted);
    }
}

impl DigitalErrorType for MockTiltLine {
    type Error = Infallible;
}

impl InputPin for MockTiltLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

// ── LED PWM ───────────────────────────────────────────────────

/// 8-bit LEDC channel stand-in.
#[derive(Clone)]
pub struct MockPwm {
    duty: Rc<Cell<u16>>,
    writes: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl MockPwm {
    pub fn new() -> Self {
        Self {
            duty: Rc::new(Cell::new(0)),
            writes: Rc::new(Cell::new(0)),
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PwmErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }
    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty.set(duty);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// ── Panel ─────────────────────────────────────────────────────

/// In-memory 170x320 RGB565 panel.
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
    pub pixel_writes: usize,
}

#[allow(dead_code)]
impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::RED; usize::from(LCD_WIDTH) * usize::from(LCD_HEIGHT)],
            pixel_writes: 0,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[y as usize * usize::from(LCD_WIDTH) + x as usize]
    }

    /// Copy of the rows `y0..y1`.
    pub fn rows(&self, y0: i32, y1: i32) -> Vec<Rgb565> {
        let w = usize::from(LCD_WIDTH);
        self.pixels[y0 as usize * w..y1 as usize * w].to_vec()
    }

    pub fn snapshot(&self) -> Vec<Rgb565> {
        self.pixels.clone()
    }

    /// Count lit (non-background) pixels inside a region.
    pub fn lit_in(&self, area: &embedded_graphics::primitives::Rectangle) -> usize {
        area.points()
            .filter(|p| self.bounding_box().contains(*p))
            .filter(|p| self.pixel(p.x, p.y) != Rgb565::BLACK)
            .count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(u32::from(LCD_WIDTH), u32::from(LCD_HEIGHT))
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = i32::from(LCD_WIDTH);
        let h = i32::from(LCD_HEIGHT);
        for Pixel(p, color) in pixels {
            if (0..w).contains(&p.x) && (0..h).contains(&p.y) {
                self.pixels[(p.y * w + p.x) as usize] = color;
                self.pixel_writes += 1;
            }
        }
        Ok(())
    }
}

/// A panel whose bus is dead: every draw fails.
pub struct DeadPanel;

impl OriginDimensions for DeadPanel {
    fn size(&self) -> Size {
        Size::new(u32::from(LCD_WIDTH), u32::from(LCD_HEIGHT))
    }
}

impl DrawTarget for DeadPanel {
    type Color = Rgb565;
    type Error = ();

    fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        Err(())
    }
}
