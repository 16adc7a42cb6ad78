//! Polled push-button handling.
//!
//! Buttons are level-triggered and debounced only by a blocking delay after
//! each action. A held button therefore fires again on every loop iteration,
//! at a rate set by its delay.

use crate::clock::ClockTime;
use crate::command::ClockAction;
use crate::config::{DebounceTimings, WatchConfig};
use crate::time::Delay;
use crate::types::Button;
use heapless::Vec;

/// Buttons that fired during one poll, in poll order.
pub type Fired = Vec<Button, { Button::COUNT }>;

/// Trait for abstracting button input lines.
///
/// Implementations report the electrical state; for the usual active-low
/// wiring with pull-ups, a button is asserted when its line reads low.
pub trait ButtonInput {
    /// Returns true if `button` is currently pressed.
    fn is_asserted(&mut self, button: Button) -> bool;
}

impl<T: ButtonInput + ?Sized> ButtonInput for &mut T {
    #[inline]
    fn is_asserted(&mut self, button: Button) -> bool {
        (**self).is_asserted(button)
    }
}

/// Maps button presses onto clock actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputController {
    debounce: DebounceTimings,
}

impl InputController {
    /// Creates a controller with the given post-action delays.
    pub fn new(debounce: DebounceTimings) -> Self {
        Self { debounce }
    }

    /// Creates a controller from a watch configuration.
    pub fn from_config(config: &WatchConfig) -> Self {
        Self::new(config.debounce)
    }

    /// Returns the delay applied after `button` fires.
    pub fn post_delay_ms(&self, button: Button) -> u32 {
        match button {
            Button::FormatToggle => self.debounce.format_ms,
            Button::MinuteUp | Button::MinuteDown => self.debounce.minute_ms,
            Button::HourUp | Button::HourDown => self.debounce.hour_ms,
        }
    }

    /// Polls every button once in [`Button::POLL_ORDER`].
    ///
    /// Each asserted button applies its action to `clock` and then blocks for
    /// its post-action delay before the next button is read.
    pub fn poll<B, D>(&self, clock: &mut ClockTime, buttons: &mut B, delay: &mut D) -> Fired
    where
        B: ButtonInput + ?Sized,
        D: Delay + ?Sized,
    {
        let mut fired = Fired::new();

        for button in Button::POLL_ORDER {
            if !buttons.is_asserted(button) {
                continue;
            }

            clock.apply(ClockAction::from(button));

            #[cfg(feature = "defmt")]
            defmt::debug!("{} pressed, now {}", button, clock);

            delay.delay_ms(self.post_delay_ms(button));

            // Capacity equals the number of buttons, so this cannot fail.
            let _ = fired.push(button);
        }

        fired
    }
}
