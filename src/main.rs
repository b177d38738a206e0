//! Dashlight Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  GpioAdapter (DashboardIo)   LogEventSink (EventSink)    │
//! │  FreeRtos (DelayNs)                                      │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          DashLight (pure logic)                │      │
//! │  │  Smoothing · Override arbiter · Decision       │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{error, info};

use dashlight::adapters::hardware::GpioAdapter;
use dashlight::adapters::log_sink::LogEventSink;
use dashlight::app::ports::{DigitalInput, DigitalOutput};
use dashlight::app::service::DashLight;
use dashlight::config::DashlightConfig;
use dashlight::drivers::gpio::{LightAdc, SysInputPin, SysOutputPin};
use dashlight::drivers::hw_init;
use dashlight::error::Error;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Dashlight v{}", env!("CARGO_PKG_VERSION"));

    let config = DashlightConfig::DEFAULT;

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals(config.polarity.bright_level) {
        let e = Error::from(e);
        error!("HAL init failed: {}", e);
        return Err(e.into());
    }

    // ── 3. Construct adapters ─────────────────────────────────
    let io = GpioAdapter::new(
        LightAdc::default(),
        SysInputPin::for_input(DigitalInput::Headlight),
        SysInputPin::for_input(DigitalInput::ForceBright),
        SysInputPin::for_input(DigitalInput::ForceDim),
        SysOutputPin::for_output(DigitalOutput::Dimmer),
    );
    let mut sink = LogEventSink::new();
    let mut delay = FreeRtos;

    // ── 4. Construct the controller ───────────────────────────
    let mut app = DashLight::new(config, io)?;
    app.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop (returns only on hardware failure) ────
    match app.run(&mut delay, &mut sink) {
        Ok(never) => match never {},
        Err(e) => {
            error!("Control loop terminated after {} ticks: {}", app.tick_count(), e);
            Err(e.into())
        }
    }
}
