//! Manual override arbitration.
//!
//! Two independent switches can force the display bright or dim.  When
//! both are closed, bright wins.

use serde::Serialize;

/// Tri-state directive derived from the override switches each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OverrideState {
    ForceBright,
    ForceDim,
    #[default]
    None,
}

impl OverrideState {
    /// Resolve the two override inputs into a single directive.
    pub const fn resolve(force_bright: bool, force_dim: bool) -> Self {
        match (force_bright, force_dim) {
            (true, _) => Self::ForceBright,
            (false, true) => Self::ForceDim,
            (false, false) => Self::None,
        }
    }

    /// `true` if either override is in effect.
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}
