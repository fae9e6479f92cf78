//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { level_a, level_b } => {
                info!("START | A={} B={}", level_a, level_b);
            }
            AppEvent::TiltChanged { channel, active } => {
                info!(
                    "TILT  | {} {}",
                    channel,
                    if *active { "tilted -> fading on" } else { "upright -> fading off" }
                );
            }
            AppEvent::RailReached { channel, level } => {
                info!("RAIL  | {} settled at {}", channel, level);
            }
        }
    }
}
