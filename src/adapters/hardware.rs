//! Hardware adapter — bridges real peripherals to the [`DashboardIo`] port.
//!
//! Generic over the `embedded-hal` digital pin traits, so the same adapter
//! drives ESP-IDF pins on the device and in-memory pins in tests.  The ADC
//! has no `embedded-hal` 1.0 trait; it comes in through [`AnalogSource`].

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::app::ports::{DashboardIo, DigitalInput, DigitalOutput};
use crate::error::{ActuatorError, SensorError};

/// A single analog channel scaled to the full 16-bit range.
pub trait AnalogSource {
    fn read_u16(&mut self) -> Result<u16, SensorError>;
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    fn read_u16(&mut self) -> Result<u16, SensorError> {
        (**self).read_u16()
    }
}

/// Concrete adapter owning the light ADC channel and the four GPIOs.
pub struct GpioAdapter<A, H, B, D, O> {
    light: A,
    headlight: H,
    force_bright: B,
    force_dim: D,
    dimmer: O,
}

impl<A, H, B, D, O> GpioAdapter<A, H, B, D, O>
where
    A: AnalogSource,
    H: InputPin,
    B: InputPin,
    D: InputPin,
    O: OutputPin,
{
    pub fn new(light: A, headlight: H, force_bright: B, force_dim: D, dimmer: O) -> Self {
        Self {
            light,
            headlight,
            force_bright,
            force_dim,
            dimmer,
        }
    }

    /// Release the peripherals.
    pub fn release(self) -> (A, H, B, D, O) {
        (
            self.light,
            self.headlight,
            self.force_bright,
            self.force_dim,
            self.dimmer,
        )
    }
}

// ── DashboardIo implementation ────────────────────────────────

impl<A, H, B, D, O> DashboardIo for GpioAdapter<A, H, B, D, O>
where
    A: AnalogSource,
    H: InputPin,
    B: InputPin,
    D: InputPin,
    O: OutputPin,
{
    fn read_light(&mut self) -> Result<u16, SensorError> {
        self.light.read_u16()
    }

    fn read_input(&mut self, input: DigitalInput) -> Result<bool, SensorError> {
        let level = match input {
            DigitalInput::Headlight => self.headlight.is_high().map_err(|_| ()),
            DigitalInput::ForceBright => self.force_bright.is_high().map_err(|_| ()),
            DigitalInput::ForceDim => self.force_dim.is_high().map_err(|_| ()),
        };
        level.map_err(|()| SensorError::GpioReadFailed)
    }

    fn write_output(&mut self, output: DigitalOutput, high: bool) -> Result<(), ActuatorError> {
        match output {
            DigitalOutput::Dimmer => self
                .dimmer
                .set_state(PinState::from(high))
                .map_err(|_| ActuatorError::GpioWriteFailed),
        }
    }
}
