use bcd_clock::Delay;
use embedded_hal::blocking::delay::DelayMs;

/// Adapts any blocking HAL delay to the clock's `Delay` trait
///
/// The wrapped delay must spin rather than sleep; the tick calibration
/// assumes each call costs its full duration plus a fixed overhead.
pub struct HalDelay<D: DelayMs<u32>> {
    inner: D,
}

impl<D: DelayMs<u32>> HalDelay<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Return the wrapped delay
    pub fn free(self) -> D {
        self.inner
    }
}

impl<D: DelayMs<u32>> Delay for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}
