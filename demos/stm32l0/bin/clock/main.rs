#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use bcd_clock::{Watch, WatchConfig};

mod hardware_setup;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== BCD Clock ===");
    rprintln!("Starting initialization...");

    // Initialize all hardware
    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    let config = WatchConfig::default();
    rprintln!(
        "Start time {}, {} refreshes per second",
        config.start_time,
        config.ticks_per_second
    );

    let mut watch = Watch::new(config, hw.display, hw.buttons, hw.delay);

    rprintln!("=== System Ready ===");
    rprintln!("Buttons:");
    rprintln!("  PA10  toggle 12h/24h");
    rprintln!("  PA0   minute up");
    rprintln!("  PC3   minute down");
    rprintln!("  PC10  hour up");
    rprintln!("  PC12  hour down");

    // Run the main loop (never returns)
    watch.run()
}
