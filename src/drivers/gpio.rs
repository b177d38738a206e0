//! `embedded-hal` pin and ADC drivers over the raw [`hw_init`] accessors.
//!
//! These let the generic [`GpioAdapter`](crate::adapters::hardware::GpioAdapter)
//! run on the pins configured by `hw_init::init_peripherals`.  On host
//! builds they read and write the simulated levels instead.

use core::convert::Infallible;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};

use crate::adapters::hardware::AnalogSource;
use crate::app::ports::{DigitalInput, DigitalOutput};
use crate::drivers::hw_init;
use crate::error::SensorError;
use crate::pins;
use crate::sensors::level_to_bool;

/// A pulled-up GPIO input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysInputPin {
    gpio: i32,
}

impl SysInputPin {
    pub const fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// The board pin wired to `input`.
    pub const fn for_input(input: DigitalInput) -> Self {
        Self::new(pins::input_gpio(input))
    }
}

impl ErrorType for SysInputPin {
    type Error = Infallible;
}

impl InputPin for SysInputPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(level_to_bool(hw_init::gpio_read(self.gpio)))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

/// Write failure carrying the raw `esp_err_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioWriteError(pub i32);

impl digital::Error for GpioWriteError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A push-pull GPIO output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysOutputPin {
    gpio: i32,
}

impl SysOutputPin {
    pub const fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// The board pin wired to `output`.
    pub const fn for_output(output: DigitalOutput) -> Self {
        Self::new(pins::output_gpio(output))
    }
}

impl ErrorType for SysOutputPin {
    type Error = GpioWriteError;
}

impl OutputPin for SysOutputPin {
    fn set_low(&mut self) -> Result<(), GpioWriteError> {
        hw_init::gpio_write(self.gpio, false).map_err(GpioWriteError)
    }

    fn set_high(&mut self) -> Result<(), GpioWriteError> {
        hw_init::gpio_write(self.gpio, true).map_err(GpioWriteError)
    }
}

/// Photoresistor divider on ADC1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightAdc {
    channel: u32,
}

impl LightAdc {
    pub const fn new(channel: u32) -> Self {
        Self { channel }
    }
}

impl Default for LightAdc {
    fn default() -> Self {
        Self::new(pins::LIGHT_ADC_CHANNEL)
    }
}

impl AnalogSource for LightAdc {
    fn read_u16(&mut self) -> Result<u16, SensorError> {
        hw_init::adc1_read_u16(self.channel)
    }
}
