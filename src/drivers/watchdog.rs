//! Loop stall guard on the ESP-IDF task watchdog (TWDT).
//!
//! Only the main task is watched.  The fade loop spins without yielding,
//! so the idle tasks would never check in and are left out of the mask.
//! A pass that takes longer than the configured budget panics the chip;
//! after the reboot both cups re-seed from their tilt switches.
//!
//! On the host the guard only counts feeds.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{
    ESP_OK, esp_task_wdt_add, esp_task_wdt_config_t, esp_task_wdt_reconfigure,
    esp_task_wdt_reset,
};
use log::info;

use crate::config::LoopConfig;
use crate::error::Result;

pub struct Watchdog {
    timeout_ms: u32,
    #[cfg(not(target_os = "espidf"))]
    feeds: core::cell::Cell<u32>,
}

impl Watchdog {
    /// Arm the TWDT with the stall budget from `config` and subscribe the
    /// calling task.
    pub fn arm(config: &LoopConfig) -> Result<Self> {
        let timeout_ms = config.watchdog_timeout_ms;

        #[cfg(target_os = "espidf")]
        {
            let cfg = esp_task_wdt_config_t {
                timeout_ms,
                idle_core_mask: 0,
                trigger_panic: true,
            };
            // SAFETY: the TWDT calls only touch the watchdog's own task list
            // and run once, from the main task, before the loop starts.
            let reconfigured = unsafe { esp_task_wdt_reconfigure(&cfg) };
            if reconfigured != ESP_OK {
                log::warn!("Watchdog: reconfigure returned {}, keeping IDF defaults", reconfigured);
            }
            // SAFETY: as above; a null handle subscribes the calling task.
            if unsafe { esp_task_wdt_add(core::ptr::null_mut()) } != ESP_OK {
                return Err(crate::error::Error::Init("task watchdog subscribe"));
            }
        }

        info!("Watchdog: armed, {} ms per loop pass", timeout_ms);
        Ok(Self {
            timeout_ms,
            #[cfg(not(target_os = "espidf"))]
            feeds: core::cell::Cell::new(0),
        })
    }

    /// Reset the stall budget.  Called once per loop pass.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: resets the calling task's TWDT entry, subscribed in `arm`.
            unsafe {
                esp_task_wdt_reset();
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            self.feeds.set(self.feeds.get().wrapping_add(1));
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Feeds seen so far (host only).
    #[cfg(not(target_os = "espidf"))]
    pub fn feeds(&self) -> u32 {
        self.feeds.get()
    }
}
