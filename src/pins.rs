//! GPIO / peripheral pin assignments for the LilyGO T-Display-S3.
//!
//! Single source of truth: board bring-up references this module rather
//! than hard-coding pin numbers.  `main.rs` takes the matching typed pins
//! from `Peripherals`; keep both in sync when rewiring.

// ---------------------------------------------------------------------------
// KY-027 module A
// ---------------------------------------------------------------------------

/// Tilt switch D0.  Active-low: LOW = tilted.
pub const TILT_A_GPIO: i32 = 3;
/// LED, driven from LEDC channel 0.
pub const LED_A_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// KY-027 module B
// ---------------------------------------------------------------------------

/// Tilt switch D0.  Active-low: LOW = tilted.
pub const TILT_B_GPIO: i32 = 18;
/// LED, driven from LEDC channel 1.
pub const LED_B_GPIO: i32 = 44;

// ---------------------------------------------------------------------------
// ST7789 LCD (8080 8-bit parallel bus)
// ---------------------------------------------------------------------------

/// Data lines D0..D7, in bus order.
pub const LCD_DATA_GPIOS: [i32; 8] = [39, 40, 41, 42, 45, 46, 47, 48];
pub const LCD_WR_GPIO: i32 = 8;
/// Read strobe; unused, held HIGH.
pub const LCD_RD_GPIO: i32 = 9;
pub const LCD_DC_GPIO: i32 = 7;
/// Chip select; the panel is the only device, held LOW.
pub const LCD_CS_GPIO: i32 = 6;
pub const LCD_RST_GPIO: i32 = 5;
/// Backlight enable (active HIGH).
pub const LCD_BL_GPIO: i32 = 38;
/// Panel power rail enable (active HIGH).
pub const LCD_POWER_GPIO: i32 = 15;

/// Native panel size in portrait orientation.
pub const LCD_WIDTH: u16 = 170;
pub const LCD_HEIGHT: u16 = 320;
/// Column offset of the 170-px window inside the ST7789's 240-px RAM.
pub const LCD_X_OFFSET: u16 = 35;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels,
/// so a brightness level maps 1:1 onto a duty value.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC frequency for both LEDs (1 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
