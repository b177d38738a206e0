//! Tick delay for host builds.
//!
//! On the device the loop sleeps through `esp_idf_hal::delay::FreeRtos`,
//! which already implements [`DelayNs`].  Host simulation and tests use
//! [`StdDelay`], a thin wrapper over `std::thread::sleep`.

use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Blocking delay backed by the OS scheduler.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl StdDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
