//! Application service — the hexagonal core.
//!
//! [`DashLight`] owns the light history, calibration bounds, and the
//! hardware port.  Construct it once at boot and hand it to [`DashLight::run`];
//! nothing else holds a reference to its state.
//!
//! ```text
//!  DashboardIo ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                  │         DashLight         │
//!  DashboardIo ◀── │ Smoothing · Arbiter · Dec │
//!                  └──────────────────────────┘
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::DashlightConfig;
use crate::control::arbiter::OverrideState;
use crate::control::decision::{DecisionEngine, DimmerOutput};
use crate::control::smoothing::LightHistory;
use crate::error::Result;
use crate::sensors::InputSnapshot;
use crate::sensors::calibration::CalibrationBounds;

use super::events::{AppEvent, TickReport};
use super::ports::{DashboardIo, DigitalOutput, EventSink};

// ───────────────────────────────────────────────────────────────
// DashLight
// ───────────────────────────────────────────────────────────────

/// The dimmer controller.
pub struct DashLight<IO> {
    io: IO,
    config: DashlightConfig,
    engine: DecisionEngine,
    history: LightHistory,
    calibration: CalibrationBounds,
    last_output: Option<DimmerOutput>,
    tick_count: u64,
}

impl<IO: DashboardIo> DashLight<IO> {
    /// Validate `config` and take ownership of the hardware port.
    ///
    /// An invalid configuration is fatal: the output would be undefined.
    pub fn new(config: DashlightConfig, io: IO) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            io,
            engine: DecisionEngine::new(config.light_transition),
            config,
            history: LightHistory::new(),
            calibration: CalibrationBounds::new(),
            last_output: None,
            tick_count: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the controller.  Call once before the first tick.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        info!(
            "DashLight started (transition={}, tick={}ms)",
            self.engine.threshold(), self.config.tick_period_ms
        );
        sink.emit(&AppEvent::Started(self.config));
    }

    /// Tick forever.  Returns only if the hardware fails.
    pub fn run(
        &mut self,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Result<Infallible> {
        loop {
            self.tick(sink)?;
            debug!("Tick");
            delay.delay_ms(self.config.tick_period_ms);
        }
    }

    /// Tick until `keep_running` returns `false`, checked before each tick.
    pub fn run_while(
        &mut self,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
        mut keep_running: impl FnMut() -> bool,
    ) -> Result<()> {
        while keep_running() {
            self.tick(sink)?;
            debug!("Tick");
            delay.delay_ms(self.config.tick_period_ms);
        }
        info!("DashLight stopped after {} ticks", self.tick_count);
        sink.emit(&AppEvent::Stopped {
            ticks: self.tick_count,
        });
        Ok(())
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle: sample → smooth → arbitrate → decide → drive.
    ///
    /// The tick only counts once the dimmer line has been written; a failed
    /// read or write leaves `tick_count` unchanged.
    pub fn tick(&mut self, sink: &mut impl EventSink) -> Result<TickReport> {
        // 1. Sample every input at once
        let input = InputSnapshot::capture(&mut self.io)?;

        // 2. Calibration bounds and rolling average
        self.calibration.observe(input.light);
        self.history.record(input.light);
        let average = self.history.average();

        // 3. Overrides
        let override_state = OverrideState::resolve(input.force_bright, input.force_dim);
        if override_state.is_active() {
            debug!("Override {:?} bypasses average {:.1}", override_state, average);
        }

        // 4. Decision
        let output = self.engine.decide(average, override_state);

        // 5. Drive the dimmer line
        self.io
            .write_output(DigitalOutput::Dimmer, output.level(self.config.polarity))?;
        self.tick_count += 1;

        if self.last_output != Some(output) {
            sink.emit(&AppEvent::OutputChanged {
                from: self.last_output,
                to: output,
            });
            self.last_output = Some(output);
        }

        let report = TickReport {
            tick: self.tick_count,
            light: input.light,
            light_min: self.calibration.min(),
            light_max: self.calibration.max(),
            average,
            headlight: input.headlight,
            force_bright: input.force_bright,
            force_dim: input.force_dim,
            override_state,
            output,
        };
        if self.tick_count % u64::from(self.config.telemetry_interval_ticks) == 0 {
            sink.emit(&AppEvent::Telemetry(report));
        }
        Ok(report)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current rolling average, `-1.0` before the first tick.
    pub fn average(&self) -> f32 {
        self.history.average()
    }

    pub fn history(&self) -> &LightHistory {
        &self.history
    }

    pub fn calibration(&self) -> CalibrationBounds {
        self.calibration
    }

    /// Output written on the most recent tick.
    pub fn last_output(&self) -> Option<DimmerOutput> {
        self.last_output
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &DashlightConfig {
        &self.config
    }

    /// Give the hardware port back (e.g. to release pins on shutdown).
    pub fn into_io(self) -> IO {
        self.io
    }
}
