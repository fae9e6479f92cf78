//! Display adapter: exposes the [`LevelScreen`] through [`DisplayPort`].
//!
//! Draw failures are logged and dropped: the next render retries, since
//! the screen only caches a field after it was drawn successfully.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use log::warn;

use crate::app::ports::DisplayPort;
use crate::channel::ChannelId;
use crate::drivers::screen::LevelScreen;
use crate::error::Error;

pub struct ScreenAdapter<D> {
    screen: LevelScreen<D>,
}

impl<D> ScreenAdapter<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            screen: LevelScreen::new(target),
        }
    }

    pub fn screen(&self) -> &LevelScreen<D> {
        &self.screen
    }
}

impl<D> DisplayPort for ScreenAdapter<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn draw_static(&mut self) {
        if self.screen.draw_static().is_err() {
            warn!("Screen: static layout: {}", Error::Display);
        }
    }

    fn render_levels(&mut self, level_a: u8, level_b: u8) {
        for (id, level) in [(ChannelId::A, level_a), (ChannelId::B, level_b)] {
            if self.screen.draw_level(id, level).is_err() {
                warn!("Screen: field {}: {}", id, Error::Display);
            }
        }
    }
}
