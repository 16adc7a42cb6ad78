//! BCD time-keeping state machine.
//!
//! Provides [`ClockTime`], which stores the time as six decimal digits and owns
//! every carry, borrow and hour-format rule. Nothing else writes the digits.

use crate::command::ClockAction;
use crate::types::{DigitSlot, HourFormat, TimeError};

/// Wall-clock time held as three BCD digit pairs plus the hour format.
///
/// Operations assume the digits are in range on entry and keep them in range.
/// [`ClockTime::set`] is the one exception: it writes whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour_tens: u8,
    hour_units: u8,
    minute_tens: u8,
    minute_units: u8,
    second_tens: u8,
    second_units: u8,
    format: HourFormat,
}

impl ClockTime {
    /// 00:00:00 in 24h format.
    pub const fn new() -> Self {
        Self {
            hour_tens: 0,
            hour_units: 0,
            minute_tens: 0,
            minute_units: 0,
            second_tens: 0,
            second_units: 0,
            format: HourFormat::TwentyFourHour,
        }
    }

    /// Creates a validated time from decimal hour, minute and second.
    ///
    /// In 12h format the hour must be 1-12; in 24h format it must be 0-23.
    pub fn from_hms(
        hour: u8,
        minute: u8,
        second: u8,
        format: HourFormat,
    ) -> Result<Self, TimeError> {
        let hour_valid = match format {
            HourFormat::TwentyFourHour => hour <= 23,
            HourFormat::TwelveHour => (1..=12).contains(&hour),
        };
        if !hour_valid {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(TimeError::SecondOutOfRange(second));
        }

        let mut time = Self::new();
        time.set(
            hour / 10,
            hour % 10,
            minute / 10,
            minute % 10,
            second / 10,
            second % 10,
        );
        time.format = format;
        Ok(time)
    }

    /// Overwrites all six digits. No validation is performed.
    pub fn set(
        &mut self,
        hour_tens: u8,
        hour_units: u8,
        minute_tens: u8,
        minute_units: u8,
        second_tens: u8,
        second_units: u8,
    ) {
        self.hour_tens = hour_tens;
        self.hour_units = hour_units;
        self.minute_tens = minute_tens;
        self.minute_units = minute_units;
        self.second_tens = second_tens;
        self.second_units = second_units;
    }

    /// Applies an action to the clock.
    pub fn apply(&mut self, action: ClockAction) {
        match action {
            ClockAction::ToggleFormat => self.toggle_hour_format(),
            ClockAction::IncrementMinute => self.increment_minute(),
            ClockAction::DecrementMinute => self.decrement_minute(),
            ClockAction::IncrementHour => self.increment_hour(),
            ClockAction::DecrementHour => self.decrement_hour(),
            ClockAction::AdvanceSecond => self.advance_one_second(),
        }
    }

    /// Converts the hour to the other format and flips the format flag.
    ///
    /// 24h to 12h maps 0 to 12 and 13-23 down by twelve. 12h to 24h maps 12 to 0
    /// and everything else to `hour % 12 + 12`. Since no meridiem is stored, a
    /// morning hour comes back as the matching afternoon hour.
    pub fn toggle_hour_format(&mut self) {
        let hour = self.hour();
        let converted = match self.format {
            HourFormat::TwentyFourHour => match hour {
                0 => 12,
                13..=23 => hour - 12,
                _ => hour,
            },
            HourFormat::TwelveHour => {
                if hour == 12 {
                    0
                } else {
                    hour % 12 + 12
                }
            }
        };

        self.set_hour(converted);
        self.format = self.format.toggled();

        #[cfg(feature = "defmt")]
        defmt::debug!("hour format now {}: hour {} -> {}", self.format, hour, converted);
    }

    /// Steps the minute forward. 59 wraps to 00 without touching the hour.
    pub fn increment_minute(&mut self) {
        self.carry_minute();
    }

    /// Steps the minute back. 00 wraps to 59 without touching the hour.
    pub fn decrement_minute(&mut self) {
        if self.minute_units > 0 {
            self.minute_units -= 1;
            return;
        }

        self.minute_units = 9;
        if self.minute_tens > 0 {
            self.minute_tens -= 1;
        } else {
            self.minute_tens = 5;
        }
    }

    /// Steps the hour forward, wrapping past the format's last hour.
    pub fn increment_hour(&mut self) {
        self.hour_units += 1;
        if self.hour_units == 10 {
            self.hour_units = 0;
            self.hour_tens += 1;
        }

        if self.hour() > last_hour(self.format) {
            self.set_hour(first_hour(self.format));
        }
    }

    /// Steps the hour back, wrapping below the format's first hour.
    pub fn decrement_hour(&mut self) {
        if self.hour() <= first_hour(self.format) {
            self.set_hour(last_hour(self.format));
            return;
        }

        if self.hour_units == 0 {
            self.hour_units = 9;
            self.hour_tens -= 1;
        } else {
            self.hour_units -= 1;
        }
    }

    /// Adds one second, rippling the carry through minutes into hours.
    pub fn advance_one_second(&mut self) {
        self.second_units += 1;
        if self.second_units < 10 {
            return;
        }
        self.second_units = 0;

        self.second_tens += 1;
        if self.second_tens < 6 {
            return;
        }
        self.second_tens = 0;

        if self.carry_minute() {
            self.increment_hour();

            #[cfg(feature = "defmt")]
            defmt::trace!("hour rollover to {}", self.hour());
        }
    }

    /// Returns the combined hour.
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour_tens * 10 + self.hour_units
    }

    /// Returns the combined minute.
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute_tens * 10 + self.minute_units
    }

    /// Returns the combined second.
    #[inline]
    pub fn second(&self) -> u8 {
        self.second_tens * 10 + self.second_units
    }

    /// Returns the current hour format.
    #[inline]
    pub fn format(&self) -> HourFormat {
        self.format
    }

    /// Returns true when hours are shown 00-23.
    #[inline]
    pub fn is_24_hour(&self) -> bool {
        self.format == HourFormat::TwentyFourHour
    }

    /// Returns the digit shown at a display position.
    pub fn digit(&self, slot: DigitSlot) -> u8 {
        match slot {
            DigitSlot::SecondUnits => self.second_units,
            DigitSlot::SecondTens => self.second_tens,
            DigitSlot::MinuteUnits => self.minute_units,
            DigitSlot::MinuteTens => self.minute_tens,
            DigitSlot::HourUnits => self.hour_units % 10,
            DigitSlot::HourTens => self.hour_tens,
        }
    }

    /// Returns all six digits in scan order.
    pub fn digits(&self) -> [u8; DigitSlot::COUNT] {
        DigitSlot::SCAN_ORDER.map(|slot| self.digit(slot))
    }

    fn set_hour(&mut self, hour: u8) {
        self.hour_tens = hour / 10;
        self.hour_units = hour % 10;
    }

    /// Increments the minute pair and reports whether it wrapped to 00.
    fn carry_minute(&mut self) -> bool {
        self.minute_units += 1;
        if self.minute_units < 10 {
            return false;
        }
        self.minute_units = 0;

        self.minute_tens += 1;
        if self.minute_tens < 6 {
            return false;
        }
        self.minute_tens = 0;
        true
    }
}

fn first_hour(format: HourFormat) -> u8 {
    match format {
        HourFormat::TwentyFourHour => 0,
        HourFormat::TwelveHour => 1,
    }
}

fn last_hour(format: HourFormat) -> u8 {
    match format {
        HourFormat::TwentyFourHour => 23,
        HourFormat::TwelveHour => 12,
    }
}

impl core::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{}:{}{}:{}{}",
            self.hour_tens,
            self.hour_units,
            self.minute_tens,
            self.minute_units,
            self.second_tens,
            self.second_units
        )
    }
}
