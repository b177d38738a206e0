//! GPIO / peripheral pin assignments for the Dashlight board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Channels are an enum so a lookup can never miss.

use crate::app::ports::{DigitalInput, DigitalOutput};

// ---------------------------------------------------------------------------
// Analog
// ---------------------------------------------------------------------------

/// Photoresistor divider.  ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const LIGHT_ADC_GPIO: i32 = 1;
/// ADC channel the light sensor is wired to.
pub const LIGHT_ADC_CHANNEL: u32 = 0;

// ---------------------------------------------------------------------------
// Digital inputs (all pulled up)
// ---------------------------------------------------------------------------

/// Headlight power sense.
pub const HEADLIGHT_GPIO: i32 = 0;
/// Force-bright override switch.
pub const FORCE_BRIGHT_GPIO: i32 = 2;
/// Force-dim override switch.
pub const FORCE_DIM_GPIO: i32 = 3;

// ---------------------------------------------------------------------------
// Digital outputs
// ---------------------------------------------------------------------------

/// Dimmer control line to the head unit.
pub const DIMMER_OUT_GPIO: i32 = 10;

/// GPIO number for a digital input channel.
pub const fn input_gpio(input: DigitalInput) -> i32 {
    match input {
        DigitalInput::Headlight => HEADLIGHT_GPIO,
        DigitalInput::ForceBright => FORCE_BRIGHT_GPIO,
        DigitalInput::ForceDim => FORCE_DIM_GPIO,
    }
}

/// GPIO number for a digital output channel.
pub const fn output_gpio(output: DigitalOutput) -> i32 {
    match output {
        DigitalOutput::Dimmer => DIMMER_OUT_GPIO,
    }
}
