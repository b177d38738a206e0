//! Mock hardware adapter for integration tests.
//!
//! Replays a scripted sequence of light readings, serves fixed digital
//! input levels, and records every dimmer write so tests can assert on the
//! full output history without touching real GPIO/ADC registers.

use std::collections::VecDeque;

use dashlight::app::events::AppEvent;
use dashlight::app::ports::{DashboardIo, DigitalInput, DigitalOutput, EventSink};
use dashlight::error::{ActuatorError, SensorError};
use embedded_hal::delay::DelayNs;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    light: VecDeque<u16>,
    last_light: u16,
    pub headlight: bool,
    pub force_bright: bool,
    pub force_dim: bool,
    /// Every level written to the dimmer line, in order.
    pub dimmer_writes: Vec<bool>,
    /// Fail the ADC read once this many readings have been served.
    pub fail_light_after: Option<usize>,
    pub fail_writes: bool,
    light_reads: usize,
}

#[allow(dead_code)]
impl MockHardware {
    /// Light readings are served in order; the last one repeats once the
    /// script runs out.
    pub fn with_light(samples: &[u16]) -> Self {
        Self {
            light: samples.iter().copied().collect(),
            last_light: 0,
            headlight: false,
            force_bright: false,
            force_dim: false,
            dimmer_writes: Vec::new(),
            fail_light_after: None,
            fail_writes: false,
            light_reads: 0,
        }
    }

    pub fn constant_light(level: u16) -> Self {
        Self::with_light(&[level])
    }

    pub fn last_dimmer(&self) -> Option<bool> {
        self.dimmer_writes.last().copied()
    }
}

impl DashboardIo for MockHardware {
    fn read_light(&mut self) -> Result<u16, SensorError> {
        if self.fail_light_after == Some(self.light_reads) {
            return Err(SensorError::AdcReadFailed);
        }
        self.light_reads += 1;
        if let Some(next) = self.light.pop_front() {
            self.last_light = next;
        }
        Ok(self.last_light)
    }

    fn read_input(&mut self, input: DigitalInput) -> Result<bool, SensorError> {
        Ok(match input {
            DigitalInput::Headlight => self.headlight,
            DigitalInput::ForceBright => self.force_bright,
            DigitalInput::ForceDim => self.force_dim,
        })
    }

    fn write_output(&mut self, output: DigitalOutput, high: bool) -> Result<(), ActuatorError> {
        if self.fail_writes {
            return Err(ActuatorError::GpioWriteFailed);
        }
        match output {
            DigitalOutput::Dimmer => self.dimmer_writes.push(high),
        }
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn telemetry_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Telemetry(_)))
            .count()
    }

    pub fn output_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::OutputChanged { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Records requested sleeps instead of sleeping.
#[derive(Default)]
pub struct MockDelay {
    pub sleeps_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeps_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleeps_ms.push(ms);
    }
}
