//! Clock timing configuration.

use crate::clock::ClockTime;
use crate::tick::DEFAULT_TICKS_PER_SECOND;
use crate::types::{HourFormat, TimeError};

/// Settle time after lighting a digit, in milliseconds.
pub const SETTLE_DELAY_MS: u32 = 1;

/// Post-action delay for the format toggle button, in milliseconds.
pub const FORMAT_DEBOUNCE_MS: u32 = 50;

/// Post-action delay for the minute buttons, in milliseconds.
pub const MINUTE_DEBOUNCE_MS: u32 = 50;

/// Post-action delay for the hour buttons, in milliseconds.
pub const HOUR_DEBOUNCE_MS: u32 = 100;

/// Blocking delays applied after a button action fires.
///
/// These also set the repeat rate while a button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceTimings {
    pub format_ms: u32,
    pub minute_ms: u32,
    pub hour_ms: u32,
}

impl Default for DebounceTimings {
    fn default() -> Self {
        Self {
            format_ms: FORMAT_DEBOUNCE_MS,
            minute_ms: MINUTE_DEBOUNCE_MS,
            hour_ms: HOUR_DEBOUNCE_MS,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick threshold of zero.
    ZeroTickThreshold,

    /// Start time outside the valid range for its format.
    InvalidStartTime(TimeError),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickThreshold => {
                write!(f, "ticks per second must be at least 1")
            }
            ConfigError::InvalidStartTime(err) => {
                write!(f, "invalid start time: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl From<TimeError> for ConfigError {
    fn from(err: TimeError) -> Self {
        ConfigError::InvalidStartTime(err)
    }
}

/// Runtime parameters for a [`Watch`](crate::Watch).
///
/// `Default` gives the reference board's timings and a 00:00:00 start in 24h format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchConfig {
    /// Refresh calls per elapsed second.
    pub ticks_per_second: u32,

    /// Delay after lighting each digit.
    pub settle_delay_ms: u32,

    /// Post-action button delays.
    pub debounce: DebounceTimings,

    /// Time shown at power-up.
    pub start_time: ClockTime,
}

impl WatchConfig {
    /// Creates a configuration builder seeded with the defaults.
    pub fn builder() -> WatchConfigBuilder {
        WatchConfigBuilder::new()
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            settle_delay_ms: SETTLE_DELAY_MS,
            debounce: DebounceTimings::default(),
            start_time: ClockTime::new(),
        }
    }
}

/// Builder for [`WatchConfig`].
#[derive(Debug, Clone, Copy)]
pub struct WatchConfigBuilder {
    ticks_per_second: u32,
    settle_delay_ms: u32,
    debounce: DebounceTimings,
    start: (u8, u8, u8, HourFormat),
}

impl WatchConfigBuilder {
    /// Creates a builder with the default timings.
    pub fn new() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            settle_delay_ms: SETTLE_DELAY_MS,
            debounce: DebounceTimings::default(),
            start: (0, 0, 0, HourFormat::TwentyFourHour),
        }
    }

    /// Sets the refresh calls per elapsed second.
    pub fn ticks_per_second(mut self, ticks: u32) -> Self {
        self.ticks_per_second = ticks;
        self
    }

    /// Sets the delay after lighting each digit.
    pub fn settle_delay_ms(mut self, ms: u32) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Sets the post-action button delays.
    pub fn debounce(mut self, debounce: DebounceTimings) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets the time shown at power-up.
    pub fn start_time(mut self, hour: u8, minute: u8, second: u8, format: HourFormat) -> Self {
        self.start = (hour, minute, second, format);
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<WatchConfig, ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickThreshold);
        }

        let (hour, minute, second, format) = self.start;
        let start_time = ClockTime::from_hms(hour, minute, second, format)?;

        Ok(WatchConfig {
            ticks_per_second: self.ticks_per_second,
            settle_delay_ms: self.settle_delay_ms,
            debounce: self.debounce,
            start_time,
        })
    }
}

impl Default for WatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
