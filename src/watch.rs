//! The clock application: input polling plus display scanning in one loop.

use crate::clock::ClockTime;
use crate::config::WatchConfig;
use crate::display::{DisplayPort, Multiplexer, Refresh};
use crate::input::{ButtonInput, Fired, InputController};
use crate::time::Delay;

/// Result of one main-loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Buttons that fired, in poll order.
    pub fired: Fired,

    /// The display refresh that followed.
    pub refresh: Refresh,
}

/// Owns the clock state and the hardware it runs on.
///
/// Each [`Watch::step`] polls the buttons in fixed order and then refreshes one
/// display digit. [`Watch::run`] repeats that forever.
///
/// # Type Parameters
/// * `P` - Display port implementation
/// * `B` - Button input implementation
/// * `D` - Blocking delay implementation
pub struct Watch<P: DisplayPort, B: ButtonInput, D: Delay> {
    clock: ClockTime,
    display: Multiplexer,
    input: InputController,
    port: P,
    buttons: B,
    delay: D,
}

impl<P: DisplayPort, B: ButtonInput, D: Delay> Watch<P, B, D> {
    /// Creates a watch showing `config.start_time` with the display blanked.
    pub fn new(config: WatchConfig, mut port: P, buttons: B, delay: D) -> Self {
        port.clear();

        #[cfg(feature = "defmt")]
        defmt::info!(
            "watch starting at {} ({} ticks/s)",
            config.start_time,
            config.ticks_per_second
        );

        Self {
            clock: config.start_time,
            display: Multiplexer::from_config(&config),
            input: InputController::from_config(&config),
            port,
            buttons,
            delay,
        }
    }

    /// Runs one iteration: poll all buttons, then refresh one digit.
    pub fn step(&mut self) -> Step {
        let fired = self
            .input
            .poll(&mut self.clock, &mut self.buttons, &mut self.delay);
        let refresh = self
            .display
            .refresh(&mut self.clock, &mut self.port, &mut self.delay);

        Step { fired, refresh }
    }

    /// Runs the main loop. Never returns.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Returns the current time.
    pub fn clock(&self) -> &ClockTime {
        &self.clock
    }

    /// Returns the current time for direct adjustment.
    pub fn clock_mut(&mut self) -> &mut ClockTime {
        &mut self.clock
    }

    /// Returns the display multiplexer.
    pub fn display(&self) -> &Multiplexer {
        &self.display
    }

    /// Returns the display port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Returns the button input.
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// Returns the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Consumes the watch and returns its hardware.
    pub fn release(self) -> (P, B, D) {
        (self.port, self.buttons, self.delay)
    }
}
