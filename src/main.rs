//! LightCups Firmware: Main Entry Point
//!
//! Two KY-027 magic light cups on a LilyGO T-Display-S3.  One cooperative
//! polling loop, two periodic gates.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter     ScreenAdapter   LogEventSink   Esp32Time  │
//! │  (Tilt+Led)          (Display)       (EventSink)    (Clock)    │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │           LightCupService (pure logic)                 │    │
//! │  │  Channel A · Channel B · Ramp · Scheduler              │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Watchdog (fed once per pass)                                  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use esp_idf_hal::delay::Ets;
use esp_idf_hal::gpio::{AnyOutputPin, InputPin as _, Level, Output, OutputPin as _, PinDriver};
use esp_idf_hal::ledc::config::TimerConfig;
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;
use mipidsi::interface::{Generic8BitBus, ParallelInterface};
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};

use lightcups::adapters::display::ScreenAdapter;
use lightcups::adapters::hardware::HardwareAdapter;
use lightcups::adapters::log_sink::LogEventSink;
use lightcups::adapters::time::Esp32TimeAdapter;
use lightcups::app::ports::Clock;
use lightcups::app::service::LightCupService;
use lightcups::config::LoopConfig;
use lightcups::drivers::watchdog::Watchdog;
use lightcups::error::Error;
use lightcups::pins;

type LcdPin = PinDriver<'static, AnyOutputPin, Output>;

fn lcd_pin(pin: AnyOutputPin, level: Level) -> Result<LcdPin> {
    let mut drv = PinDriver::output(pin)?;
    drv.set_level(level)?;
    Ok(drv)
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  LightCups v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = LoopConfig::default();
    config.validate()?;
    info!("Config: {}", serde_json::to_string(&config)?);

    let peripherals = Peripherals::take()?;
    let io = peripherals.pins;

    // ── 2. Light cups: tilt inputs + LED PWM ──────────────────
    info!(
        "Cup A: tilt=GPIO{} led=GPIO{} | Cup B: tilt=GPIO{} led=GPIO{}",
        pins::TILT_A_GPIO,
        pins::LED_A_GPIO,
        pins::TILT_B_GPIO,
        pins::LED_B_GPIO
    );

    let led_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::new()
            .frequency(pins::LED_PWM_FREQ_HZ.Hz())
            .resolution(Resolution::Bits8),
    )?;
    info!(
        "LEDC: {} Hz, {}-bit",
        pins::LED_PWM_FREQ_HZ,
        pins::PWM_RESOLUTION_BITS
    );

    let led_a = LedcDriver::new(peripherals.ledc.channel0, &led_timer, io.gpio2)?;
    let led_b = LedcDriver::new(peripherals.ledc.channel1, &led_timer, io.gpio44)?;
    let tilt_a = PinDriver::input(io.gpio3.downgrade_input())?;
    let tilt_b = PinDriver::input(io.gpio18.downgrade_input())?;

    let mut hw = HardwareAdapter::new(tilt_a, tilt_b, led_a, led_b);

    // ── 3. ST7789 over the 8080 parallel bus ──────────────────
    info!(
        "LCD: D0..D7={:?} WR={} DC={} CS={} RST={} BL={}",
        pins::LCD_DATA_GPIOS,
        pins::LCD_WR_GPIO,
        pins::LCD_DC_GPIO,
        pins::LCD_CS_GPIO,
        pins::LCD_RST_GPIO,
        pins::LCD_BL_GPIO
    );

    // Held for the lifetime of the program; dropping a PinDriver resets the pin.
    let _lcd_power = lcd_pin(io.gpio15.downgrade_output(), Level::High)?;
    let _lcd_backlight = lcd_pin(io.gpio38.downgrade_output(), Level::High)?;
    let _lcd_cs = lcd_pin(io.gpio6.downgrade_output(), Level::Low)?;
    let _lcd_rd = lcd_pin(io.gpio9.downgrade_output(), Level::High)?;

    let dc = lcd_pin(io.gpio7.downgrade_output(), Level::Low)?;
    let wr = lcd_pin(io.gpio8.downgrade_output(), Level::High)?;
    let rst = lcd_pin(io.gpio5.downgrade_output(), Level::High)?;

    let bus = Generic8BitBus::new((
        lcd_pin(io.gpio39.downgrade_output(), Level::Low)?,
        lcd_pin(io.gpio40.downgrade_output(), Level::Low)?,
        lcd_pin(io.gpio41.downgrade_output(), Level::Low)?,
        lcd_pin(io.gpio42.downgrade_output(), Level::Low)?,
        lcd_pin(io.gpio45.downgrade_output(), Level::Low)?,
        lcd_pin(io.gpio46.downgrade_output(), Level::Low)?,
        lcd_pin(io.gpio47.downgrade_output(), Level::Low)?,
        lcd_pin(io.gpio48.downgrade_output(), Level::Low)?,
    ));
    let di = ParallelInterface::new(bus, dc, wr);

    let panel = mipidsi::Builder::new(ST7789, di)
        .display_size(pins::LCD_WIDTH, pins::LCD_HEIGHT)
        .display_offset(pins::LCD_X_OFFSET, 0)
        .invert_colors(ColorInversion::Inverted)
        .orientation(Orientation::new().rotate(Rotation::Deg0))
        .reset_pin(rst)
        .init(&mut Ets)
        .map_err(|_| Error::Init("ST7789 panel"))?;

    let mut display = ScreenAdapter::new(panel);

    // ── 4. Control service ────────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();
    let mut app = LightCupService::new(config);

    app.start(&mut hw, &mut display, &mut log_sink);

    let watchdog = Watchdog::arm(&config)?;

    info!(
        "System ready (stall budget {} ms). Entering control loop.",
        watchdog.timeout_ms()
    );

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        app.poll(clock.now_ms(), &mut hw, &mut display, &mut log_sink);
        watchdog.feed();
    }
}
