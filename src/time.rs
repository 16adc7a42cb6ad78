//! Blocking delay abstraction.

/// Trait for abstracting the busy-wait delay primitive.
///
/// The clock's tick calibration depends on these calls blocking for their full
/// duration, so implementations must not return early or yield.
pub trait Delay {
    /// Blocks for the given number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}
