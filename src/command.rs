//! Actions that adjust the clock.

use crate::types::Button;

/// A user-facing mutation of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockAction {
    /// Switch between 12h and 24h presentation.
    ToggleFormat,
    /// Minute forward, without carrying into the hour.
    IncrementMinute,
    /// Minute back, wrapping 00 to 59.
    DecrementMinute,
    /// Hour forward, wrapping at the format's last hour.
    IncrementHour,
    /// Hour back, wrapping at the format's first hour.
    DecrementHour,
    /// One second of elapsed time, with full carry.
    AdvanceSecond,
}

impl From<Button> for ClockAction {
    fn from(button: Button) -> Self {
        match button {
            Button::FormatToggle => ClockAction::ToggleFormat,
            Button::MinuteUp => ClockAction::IncrementMinute,
            Button::MinuteDown => ClockAction::DecrementMinute,
            Button::HourUp => ClockAction::IncrementHour,
            Button::HourDown => ClockAction::DecrementHour,
        }
    }
}
