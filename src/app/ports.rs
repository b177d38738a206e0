//! Port traits — the hexagonal boundary between domain logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DashLight (domain)
//! ```
//!
//! Driven adapters (GPIO/ADC, event sinks) implement these traits.  The
//! [`DashLight`](super::service::DashLight) controller consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::{ActuatorError, SensorError};

// ───────────────────────────────────────────────────────────────
// Channels
// ───────────────────────────────────────────────────────────────

/// Digital input channels.  All are pulled up and reported active-high
/// after pull-up resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalInput {
    /// Headlight power sense.
    Headlight,
    /// Override switch forcing the display bright.
    ForceBright,
    /// Override switch forcing the display dim.
    ForceDim,
}

impl DigitalInput {
    pub const ALL: [Self; 3] = [Self::Headlight, Self::ForceBright, Self::ForceDim];
}

/// Digital output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalOutput {
    /// Dimmer control line to the display.
    Dimmer,
}

// ───────────────────────────────────────────────────────────────
// Hardware port (driven adapter: hardware ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Read/write access to the controller's I/O.
///
/// Calls are blocking with bounded latency.  Any error is fatal to the
/// control loop; there is no degraded mode.
pub trait DashboardIo {
    /// Raw 16-bit sample from the light sensor ADC.
    fn read_light(&mut self) -> Result<u16, SensorError>;

    /// Current level of a digital input.
    fn read_input(&mut self, input: DigitalInput) -> Result<bool, SensorError>;

    /// Drive a digital output.
    fn write_output(&mut self, output: DigitalOutput, high: bool) -> Result<(), ActuatorError>;
}

impl<T: DashboardIo + ?Sized> DashboardIo for &mut T {
    fn read_light(&mut self) -> Result<u16, SensorError> {
        (**self).read_light()
    }

    fn read_input(&mut self, input: DigitalInput) -> Result<bool, SensorError> {
        (**self).read_input(input)
    }

    fn write_output(&mut self, output: DigitalOutput, high: bool) -> Result<(), ActuatorError> {
        (**self).write_output(output, high)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
