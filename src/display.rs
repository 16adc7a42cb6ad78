//! Multiplexed seven-segment display driver.
//!
//! Provides [`Multiplexer`], which lights one digit per [`Multiplexer::refresh`]
//! call and walks a persistent cursor through the six positions. Each refresh
//! also feeds the tick accumulator, so the rate at which the main loop spins
//! determines how fast the clock runs. Also defines the [`DisplayPort`] trait
//! for hardware abstraction.

use crate::clock::ClockTime;
use crate::config::{SETTLE_DELAY_MS, WatchConfig};
use crate::segment::{SegmentPattern, decode};
use crate::tick::{DEFAULT_TICKS_PER_SECOND, TickAccumulator};
use crate::time::Delay;
use crate::types::DigitSlot;

/// Trait for abstracting the display's GPIO lines.
///
/// Implement this for your board. The mapping from [`DigitSlot`] to a
/// digit-select pin lives in the implementation.
pub trait DisplayPort {
    /// Drives every segment line and every digit-select line inactive.
    fn clear(&mut self);

    /// Activates the digit-select line for `slot`.
    fn enable_digit(&mut self, slot: DigitSlot);

    /// Drives the segment lines from `pattern`, bit 0 = segment `a`.
    fn write_segments(&mut self, pattern: SegmentPattern);
}

impl<T: DisplayPort + ?Sized> DisplayPort for &mut T {
    #[inline]
    fn clear(&mut self) {
        (**self).clear();
    }

    #[inline]
    fn enable_digit(&mut self, slot: DigitSlot) {
        (**self).enable_digit(slot);
    }

    #[inline]
    fn write_segments(&mut self, pattern: SegmentPattern) {
        (**self).write_segments(pattern);
    }
}

/// What a single refresh drove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Refresh {
    /// Digit position that was lit.
    pub slot: DigitSlot,

    /// Decimal value shown.
    pub digit: u8,

    /// Segment pattern written.
    pub pattern: SegmentPattern,

    /// True if this refresh advanced the clock by one second.
    pub second_elapsed: bool,
}

/// Scans the six digits one position per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Multiplexer {
    cursor: usize,
    ticks: TickAccumulator,
    settle_delay_ms: u32,
}

impl Multiplexer {
    /// Creates a multiplexer with the cursor on the first scan slot.
    pub const fn new(ticks_per_second: u32, settle_delay_ms: u32) -> Self {
        Self {
            cursor: 0,
            ticks: TickAccumulator::new(ticks_per_second),
            settle_delay_ms,
        }
    }

    /// Creates a multiplexer from a watch configuration.
    pub fn from_config(config: &WatchConfig) -> Self {
        Self::new(config.ticks_per_second, config.settle_delay_ms)
    }

    /// Lights the next digit, waits the settle delay, and counts one tick.
    ///
    /// The sequence is fixed: clear all lines, select the digit, write its
    /// segments, advance the cursor, delay, then tick. When the tick completes
    /// a second, `clock` is advanced before returning.
    pub fn refresh<P, D>(&mut self, clock: &mut ClockTime, port: &mut P, delay: &mut D) -> Refresh
    where
        P: DisplayPort + ?Sized,
        D: Delay + ?Sized,
    {
        port.clear();

        let slot = DigitSlot::SCAN_ORDER[self.cursor];
        let digit = clock.digit(slot);
        let pattern = decode(digit);

        port.enable_digit(slot);
        port.write_segments(pattern);

        self.cursor = (self.cursor + 1) % DigitSlot::COUNT;

        delay.delay_ms(self.settle_delay_ms);

        let second_elapsed = self.ticks.tick();
        if second_elapsed {
            clock.advance_one_second();

            #[cfg(feature = "defmt")]
            defmt::trace!("second elapsed, now {}", clock);
        }

        Refresh {
            slot,
            digit,
            pattern,
            second_elapsed,
        }
    }

    /// Index into [`DigitSlot::SCAN_ORDER`] of the digit lit next.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The digit position lit by the next refresh.
    #[inline]
    pub fn next_slot(&self) -> DigitSlot {
        DigitSlot::SCAN_ORDER[self.cursor]
    }

    /// Returns the tick accumulator.
    #[inline]
    pub fn ticks(&self) -> &TickAccumulator {
        &self.ticks
    }
}

impl Default for Multiplexer {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS_PER_SECOND, SETTLE_DELAY_MS)
    }
}
