//! System configuration parameters
//!
//! All tunable parameters for the Dashlight controller.  There is no
//! runtime provisioning: the firmware is built with [`DashlightConfig::DEFAULT`]
//! and validates it once at startup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Light average above which the display is dimmed.
///
/// The photoresistor divider is inverted: the reading rises as ambient
/// light falls.
pub const LIGHT_TRANSITION: u16 = 1000;

/// Control loop period (milliseconds).
pub const TICK_PERIOD_MS: u32 = 200;

/// Output pin levels for each dimmer state.
///
/// The dimmer input on the head unit is wired active-high, so `Bright`
/// drives the line low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimmerPolarity {
    /// Pin level written for [`DimmerOutput::Bright`](crate::control::decision::DimmerOutput::Bright).
    pub bright_level: bool,
    /// Pin level written for [`DimmerOutput::Dim`](crate::control::decision::DimmerOutput::Dim).
    pub dim_level: bool,
}

impl DimmerPolarity {
    pub const ACTIVE_HIGH: Self = Self {
        bright_level: false,
        dim_level: true,
    };
}

/// Core system configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashlightConfig {
    /// Smoothed light level above which the output goes to `Dim`.
    pub light_transition: u16,
    /// Control loop interval (milliseconds)
    pub tick_period_ms: u32,
    /// Emit a telemetry event every N ticks (1 = every tick).
    pub telemetry_interval_ticks: u32,
    /// Pin levels for the dimmer output.
    pub polarity: DimmerPolarity,
}

impl DashlightConfig {
    pub const DEFAULT: Self = Self {
        light_transition: LIGHT_TRANSITION,
        tick_period_ms: TICK_PERIOD_MS,
        telemetry_interval_ticks: 1,
        polarity: DimmerPolarity::ACTIVE_HIGH,
    };

    /// Reject configurations that would leave the output undefined or stall
    /// the loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.polarity.bright_level == self.polarity.dim_level {
            return Err(ConfigError::ValidationFailed(
                "bright and dim output levels must differ",
            ));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_period_ms must be > 0"));
        }
        if self.telemetry_interval_ticks == 0 {
            return Err(ConfigError::ValidationFailed(
                "telemetry_interval_ticks must be > 0",
            ));
        }
        Ok(())
    }
}

impl Default for DashlightConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
