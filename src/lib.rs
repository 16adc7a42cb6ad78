#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ClockTime`**: Time of day as six BCD digits plus a 12h/24h format flag
//! - **`ClockAction`**: A single adjustment (minute/hour up or down, format toggle, one second)
//! - **`Multiplexer`**: Lights one display digit per refresh and counts refreshes into seconds
//! - **`InputController`**: Polls the five buttons in fixed order with post-action delays
//! - **`Watch`**: Owns the clock and hardware and runs the polling loop
//! - **`DisplayPort`**: Trait to implement for your segment and digit-select lines
//! - **`ButtonInput`**: Trait to implement for your push-buttons
//! - **`Delay`**: Trait to implement for your blocking millisecond delay
//!
//! Timekeeping is driven by the main loop itself: every refresh counts one tick
//! and a second elapses after `WatchConfig::ticks_per_second` ticks. The default
//! of 225 is calibrated for a 1 ms settle delay on the reference board.

pub mod clock;
pub mod command;
pub mod config;
pub mod display;
pub mod input;
pub mod segment;
pub mod tick;
pub mod time;
pub mod types;
pub mod watch;

pub use clock::ClockTime;
pub use command::ClockAction;
pub use config::{ConfigError, DebounceTimings, WatchConfig, WatchConfigBuilder};
pub use display::{DisplayPort, Multiplexer, Refresh};
pub use input::{ButtonInput, Fired, InputController};
pub use segment::{BLANK, SegmentPattern, decode};
pub use tick::{DEFAULT_TICKS_PER_SECOND, TickAccumulator};
pub use time::Delay;
pub use types::{Button, DigitSlot, HourFormat, TimeError};
pub use watch::{Step, Watch};
