use bcd_clock::{DigitSlot, DisplayPort, SegmentPattern};
use embedded_hal::digital::v2::OutputPin;

/// Number of segment lines (a through g).
pub const SEGMENT_COUNT: usize = 7;

/// Seven-segment display driven directly from GPIO
///
/// Segment lines and digit-select lines are both active-high. Digit-select
/// pins are stored in scan order, so `digits[slot.index()]` selects `slot`.
pub struct GpioDisplayPort<S, D>
where
    S: OutputPin,
    D: OutputPin,
{
    segments: [S; SEGMENT_COUNT],
    digits: [D; DigitSlot::COUNT],
}

impl<S, D> GpioDisplayPort<S, D>
where
    S: OutputPin,
    D: OutputPin,
{
    /// Create a new display port
    ///
    /// # Arguments
    /// * `segments` - Segment pins, `a` first
    /// * `digits` - Digit-select pins in `DigitSlot::SCAN_ORDER`
    pub fn new(segments: [S; SEGMENT_COUNT], digits: [D; DigitSlot::COUNT]) -> Self {
        Self { segments, digits }
    }
}

// GPIO writes on this part cannot fail, so errors are discarded.
impl<S, D> DisplayPort for GpioDisplayPort<S, D>
where
    S: OutputPin,
    D: OutputPin,
{
    fn clear(&mut self) {
        for pin in self.segments.iter_mut() {
            let _ = pin.set_low();
        }
        for pin in self.digits.iter_mut() {
            let _ = pin.set_low();
        }
    }

    fn enable_digit(&mut self, slot: DigitSlot) {
        let _ = self.digits[slot.index()].set_high();
    }

    fn write_segments(&mut self, pattern: SegmentPattern) {
        for (bit, pin) in self.segments.iter_mut().enumerate() {
            let _ = if pattern & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
        }
    }
}
