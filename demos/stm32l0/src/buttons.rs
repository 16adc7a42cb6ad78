use bcd_clock::{Button, ButtonInput};
use embedded_hal::digital::v2::InputPin;

/// Push-buttons wired active-low with pull-ups
///
/// Pins are stored in `Button::POLL_ORDER`.
pub struct GpioButtons<P: InputPin> {
    pins: [P; Button::COUNT],
}

impl<P: InputPin> GpioButtons<P> {
    /// Create a new button set from pins in poll order
    pub fn new(pins: [P; Button::COUNT]) -> Self {
        Self { pins }
    }
}

impl<P: InputPin> ButtonInput for GpioButtons<P> {
    fn is_asserted(&mut self, button: Button) -> bool {
        // A failed read counts as released.
        self.pins[button as usize].is_low().unwrap_or(false)
    }
}
