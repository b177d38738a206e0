//! Running min/max of every light reading since boot.
//!
//! Diagnostic only: the bounds are reported in telemetry and never feed
//! back into the threshold.

/// Monotonically widening range of observed light readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationBounds {
    min: u16,
    max: u16,
}

impl CalibrationBounds {
    /// An empty range (`min = u16::MAX`, `max = 0`).
    pub const fn new() -> Self {
        Self {
            min: u16::MAX,
            max: 0,
        }
    }

    /// Widen the range to include `reading`.
    pub fn observe(&mut self, reading: u16) {
        self.min = self.min.min(reading);
        self.max = self.max.max(reading);
    }

    pub const fn min(&self) -> u16 {
        self.min
    }

    pub const fn max(&self) -> u16 {
        self.max
    }

    /// `true` until the first reading has been observed.
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Width of the observed range, `None` if nothing was observed.
    pub fn span(&self) -> Option<u16> {
        (!self.is_empty()).then(|| self.max - self.min)
    }
}

impl Default for CalibrationBounds {
    fn default() -> Self {
        Self::new()
    }
}
