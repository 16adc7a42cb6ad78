//! Refresh-count based second accumulator.

/// Refresh calls per elapsed second on the reference board.
///
/// Tuned by measurement against a 1 ms settle delay plus loop overhead, not
/// derived from the clock frequency. Changing the loop body changes the rate.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 225;

/// Counts refresh calls and reports when a second has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickAccumulator {
    count: u32,
    threshold: u32,
}

impl TickAccumulator {
    /// Creates an accumulator that fires every `threshold` ticks.
    ///
    /// A threshold of 0 behaves like 1.
    pub const fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    /// Records one tick. Returns true and resets when the threshold is reached.
    #[inline]
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Ticks recorded since the last elapsed second.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Ticks per elapsed second.
    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Discards any partial second.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl Default for TickAccumulator {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS_PER_SECOND)
    }
}
