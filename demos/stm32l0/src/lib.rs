#![no_std]

pub mod buttons;
pub mod delay;
pub mod display_port;
