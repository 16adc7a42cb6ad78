use rtt_target::rprintln;
use stm32l0xx_hal::{
    delay::{Delay, DelayExt},
    gpio::{Floating, Input, Output, Pin, PushPull},
    pac,
    prelude::*,
    rcc::{Config, Rcc},
};

use stm32l0_demo::buttons::GpioButtons;
use stm32l0_demo::delay::HalDelay;
use stm32l0_demo::display_port::GpioDisplayPort;

/// Type alias for a segment or digit-select line
pub type OutputLine = Pin<Output<PushPull>>;

/// Type alias for a button line (external pull-ups)
pub type ButtonLine = Pin<Input<Floating>>;

/// Type alias for the display
pub type Display = GpioDisplayPort<OutputLine, OutputLine>;

/// Type alias for the buttons
pub type Buttons = GpioButtons<ButtonLine>;

/// Type alias for the busy-wait delay
pub type ClockDelay = HalDelay<Delay>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub display: Display,
    pub buttons: Buttons,
    pub delay: ClockDelay,
}

/// Initialize all hardware peripherals
///
/// This function handles all hardware initialization in one place:
/// - System clock configuration (HSI16)
/// - GPIO port clock enable
/// - Segment lines PB0-PB6 and digit-select lines as outputs
/// - Button lines as inputs
/// - SysTick busy-wait delay
///
/// # Returns
/// A `HardwareContext` containing all initialized peripherals ready for use
pub fn init_hardware() -> HardwareContext {
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = configure_clock(dp.RCC);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let segments = [
        gpiob.pb0.into_push_pull_output().downgrade(),
        gpiob.pb1.into_push_pull_output().downgrade(),
        gpiob.pb2.into_push_pull_output().downgrade(),
        gpiob.pb3.into_push_pull_output().downgrade(),
        gpiob.pb4.into_push_pull_output().downgrade(),
        gpiob.pb5.into_push_pull_output().downgrade(),
        gpiob.pb6.into_push_pull_output().downgrade(),
    ];
    rprintln!("Segment lines configured on PB0-PB6");

    // Scan order: second units, second tens, minute units, minute tens,
    // hour units, hour tens.
    let digits = [
        gpioc.pc5.into_push_pull_output().downgrade(),
        gpioc.pc6.into_push_pull_output().downgrade(),
        gpioc.pc8.into_push_pull_output().downgrade(),
        gpioc.pc9.into_push_pull_output().downgrade(),
        gpioc.pc7.into_push_pull_output().downgrade(),
        gpioc.pc4.into_push_pull_output().downgrade(),
    ];
    rprintln!("Digit-select lines configured on PC5, PC6, PC8, PC9, PC7, PC4");

    // Poll order: format toggle, minute up, minute down, hour up, hour down.
    let buttons = [
        gpioa.pa10.into_floating_input().downgrade(),
        gpioa.pa0.into_floating_input().downgrade(),
        gpioc.pc3.into_floating_input().downgrade(),
        gpioc.pc10.into_floating_input().downgrade(),
        gpioc.pc12.into_floating_input().downgrade(),
    ];
    rprintln!("Buttons configured on PA10, PA0, PC3, PC10, PC12");

    let delay = cp.SYST.delay(rcc.clocks);
    rprintln!("SysTick delay configured");

    HardwareContext {
        display: GpioDisplayPort::new(segments, digits),
        buttons: GpioButtons::new(buttons),
        delay: HalDelay::new(delay),
    }
}

/// Configure the system clock from the 16 MHz internal oscillator
///
/// # Returns
/// The configured RCC (Reset and Clock Control) peripheral
fn configure_clock(rcc: pac::RCC) -> Rcc {
    let rcc = rcc.freeze(Config::hsi16());

    rprintln!("System clock configured: {} Hz", rcc.clocks.sys_clk().0);

    rcc
}
