//! Output decision: smoothed light level + override → dimmer state.
//!
//! Pure functions only.  The light sensor scale is inverted, so a reading
//! *above* the transition threshold means the cabin is dark and the display
//! should dim.

use serde::Serialize;

use crate::config::DimmerPolarity;

use super::arbiter::OverrideState;

/// Binary state of the dimmer control line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DimmerOutput {
    Bright,
    Dim,
}

impl DimmerOutput {
    /// Pin level to write for this state.
    pub const fn level(self, polarity: DimmerPolarity) -> bool {
        match self {
            Self::Bright => polarity.bright_level,
            Self::Dim => polarity.dim_level,
        }
    }
}

/// Light-only decision, ignoring overrides.
pub fn decide_on_light(average: f32, threshold: u16) -> DimmerOutput {
    if average > f32::from(threshold) {
        DimmerOutput::Dim
    } else {
        DimmerOutput::Bright
    }
}

/// Final decision.  An active override bypasses the light level entirely.
pub fn decide(average: f32, override_state: OverrideState, threshold: u16) -> DimmerOutput {
    match override_state {
        OverrideState::ForceDim => DimmerOutput::Dim,
        OverrideState::ForceBright => DimmerOutput::Bright,
        OverrideState::None => decide_on_light(average, threshold),
    }
}

/// [`decide`] bound to a fixed transition threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionEngine {
    threshold: u16,
}

impl DecisionEngine {
    pub const fn new(threshold: u16) -> Self {
        Self { threshold }
    }

    pub const fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn decide(&self, average: f32, override_state: OverrideState) -> DimmerOutput {
        decide(average, override_state, self.threshold)
    }
}
