//! Rolling-average smoothing of light sensor readings.
//!
//! Keeps the most recent [`HISTORY_DEPTH`] raw ADC samples in a fixed-size
//! deque and reports their arithmetic mean.  No weighting, no outlier
//! rejection: a single bright flash moves the average by at most 1/6 of
//! its size.

use heapless::Deque;

/// A raw 16-bit sample from the light sensor ADC.
pub type LightReading = u16;

/// Number of samples the rolling average covers.
pub const HISTORY_DEPTH: usize = 6;

/// Average reported before the first sample has been recorded.
pub const NO_AVERAGE: f32 = -1.0;

/// Arithmetic mean of a sequence of readings, or `None` if it is empty.
pub fn mean<I>(samples: I) -> Option<f32>
where
    I: IntoIterator<Item = LightReading>,
{
    let (sum, count) = samples
        .into_iter()
        .fold((0u64, 0usize), |(sum, count), s| (sum + u64::from(s), count + 1));
    if count == 0 {
        return None;
    }
    Some(sum as f32 / count as f32)
}

/// Mean of a single reading: the reading itself.
pub fn mean_of_scalar(sample: LightReading) -> f32 {
    f32::from(sample)
}

/// Bounded history of recent light readings, oldest first.
#[derive(Debug, Clone, Default)]
pub struct LightHistory {
    samples: Deque<LightReading, HISTORY_DEPTH>,
}

impl LightHistory {
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Append a reading, evicting the oldest one first if the history is
    /// already full.
    pub fn record(&mut self, reading: LightReading) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Cannot fail: a slot was freed above if the deque was full.
        let _ = self.samples.push_back(reading);
    }

    /// Mean of the retained samples, or [`NO_AVERAGE`] if nothing has been
    /// recorded yet.
    pub fn average(&self) -> f32 {
        self.mean().unwrap_or(NO_AVERAGE)
    }

    /// Mean of the retained samples, `None` if empty.
    pub fn mean(&self) -> Option<f32> {
        mean(self.samples.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recently recorded reading.
    pub fn latest(&self) -> Option<LightReading> {
        self.samples.back().copied()
    }

    /// Retained readings in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = LightReading> + '_ {
        self.samples.iter().copied()
    }
}
