//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter     | Implements         | Connects to                 |
//! |-------------|--------------------|-----------------------------|
//! | `hardware`  | TiltPort           | KY-027 D0 inputs (GPIO)     |
//! |             | LedPort            | LEDC PWM channels           |
//! | `display`   | DisplayPort        | ST7789 via embedded-graphics|
//! | `log_sink`  | EventSink          | Serial log output           |
//! | `time`      | Clock              | ESP32 system timer          |

pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod time;
