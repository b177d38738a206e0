//! Peripheral initialisation and the pin/ADC drivers built on it.

pub mod gpio;
pub mod hw_init;
