//! Input sampling — the per-tick [`InputSnapshot`] and raw-level helpers.
//!
//! Every input is read once at the start of a tick and the snapshot is what
//! the rest of the tick works from, so the override pair is never observed
//! half-updated.

pub mod calibration;

use crate::app::ports::{DashboardIo, DigitalInput};
use crate::error::SensorError;

/// A point-in-time snapshot of every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    /// Raw light sensor reading (higher = darker).
    pub light: u16,
    /// Headlight power present.
    pub headlight: bool,
    /// Force-bright override switch closed.
    pub force_bright: bool,
    /// Force-dim override switch closed.
    pub force_dim: bool,
}

impl InputSnapshot {
    /// Read every input through the port.  The light sensor is sampled
    /// first, then the digital inputs.
    pub fn capture(io: &mut impl DashboardIo) -> Result<Self, SensorError> {
        let light = io.read_light()?;
        let force_dim = io.read_input(DigitalInput::ForceDim)?;
        let force_bright = io.read_input(DigitalInput::ForceBright)?;
        let headlight = io.read_input(DigitalInput::Headlight)?;
        Ok(Self {
            light,
            headlight,
            force_bright,
            force_dim,
        })
    }
}

/// Interpret a raw pin value: anything `>= 1` is high.
pub const fn level_to_bool(raw: i32) -> bool {
    raw >= 1
}
