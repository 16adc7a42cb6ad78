//! Core types shared by the clock, display and input modules.

/// How the hour pair is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    /// Hours 00 through 23.
    #[default]
    TwentyFourHour,

    /// Hours 01 through 12, without a meridiem indicator.
    TwelveHour,
}

impl HourFormat {
    /// Returns the other format.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            HourFormat::TwentyFourHour => HourFormat::TwelveHour,
            HourFormat::TwelveHour => HourFormat::TwentyFourHour,
        }
    }
}

/// One of the six digit positions of the display.
///
/// Variants are declared in scan order, rightmost digit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitSlot {
    SecondUnits,
    SecondTens,
    MinuteUnits,
    MinuteTens,
    HourUnits,
    HourTens,
}

impl DigitSlot {
    /// Number of digit positions.
    pub const COUNT: usize = 6;

    /// Order in which the multiplexer lights the digits.
    pub const SCAN_ORDER: [DigitSlot; Self::COUNT] = [
        DigitSlot::SecondUnits,
        DigitSlot::SecondTens,
        DigitSlot::MinuteUnits,
        DigitSlot::MinuteTens,
        DigitSlot::HourUnits,
        DigitSlot::HourTens,
    ];

    /// Position of this slot in [`DigitSlot::SCAN_ORDER`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A logical push-button.
///
/// Variants are declared in poll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    FormatToggle,
    MinuteUp,
    MinuteDown,
    HourUp,
    HourDown,
}

impl Button {
    /// Number of logical buttons.
    pub const COUNT: usize = 5;

    /// Order in which buttons are polled each loop iteration.
    pub const POLL_ORDER: [Button; Self::COUNT] = [
        Button::FormatToggle,
        Button::MinuteUp,
        Button::MinuteDown,
        Button::HourUp,
        Button::HourDown,
    ];
}

/// Time validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour outside the range allowed by the requested format.
    HourOutOfRange(u8),

    /// Minute above 59.
    MinuteOutOfRange(u8),

    /// Second above 59.
    SecondOutOfRange(u8),
}

impl core::fmt::Display for TimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeError::HourOutOfRange(hour) => {
                write!(f, "hour {} is out of range for the requested format", hour)
            }
            TimeError::MinuteOutOfRange(minute) => {
                write!(f, "minute {} is out of range (0-59)", minute)
            }
            TimeError::SecondOutOfRange(second) => {
                write!(f, "second {} is out of range (0-59)", second)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}
