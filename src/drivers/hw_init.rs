//! One-shot hardware peripheral initialization and raw register access.
//!
//! Configures the light ADC channel and the GPIO directions using raw
//! ESP-IDF sys calls.  Called once from `main()` before the control loop
//! starts.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real ADC oneshot reads and GPIO register access.
//! On host/test: levels live in static atomics so tests can inject them.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, AtomicU64, Ordering};

#[cfg(target_os = "espidf")]
use crate::app::ports::DigitalInput;
use crate::app::ports::DigitalOutput;
use crate::error::SensorError;
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

/// Stretch a 12-bit ADC sample over the full 16-bit range, replicating the
/// top bits into the low nibble so 0 and 4095 map to 0 and 65535.
pub const fn scale_12_to_16(raw: u16) -> u16 {
    let raw = if raw > 0x0FFF { 0x0FFF } else { raw };
    (raw << 4) | (raw >> 8)
}

/// Configure the ADC and GPIOs.  The dimmer line is parked at
/// `dimmer_idle_level` until the first tick writes it.
#[cfg(target_os = "espidf")]
pub fn init_peripherals(dimmer_idle_level: bool) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio_inputs()?;
        init_gpio_outputs(dimmer_idle_level)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(dimmer_idle_level: bool) -> Result<(), HwInitError> {
    sim_set_gpio(pins::output_gpio(DigitalOutput::Dimmer), dimmer_idle_level);
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// control-loop ADC read path.  `init_adc()` completes before the loop
/// starts, so there is no concurrent access.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };
    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), pins::LIGHT_ADC_CHANNEL, &chan_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    info!("hw_init: ADC1 configured (CH{}=light)", pins::LIGHT_ADC_CHANNEL);
    Ok(())
}

/// Oneshot read of an ADC1 channel, scaled to 16 bits.
#[cfg(target_os = "espidf")]
pub fn adc1_read_u16(channel: u32) -> Result<u16, SensorError> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded control-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return Err(SensorError::AdcReadFailed);
    }
    Ok(scale_12_to_16(raw.max(0) as u16))
}

#[cfg(not(target_os = "espidf"))]
static SIM_LIGHT_ADC: AtomicU16 = AtomicU16::new(0);

/// Inject the next simulated light reading (already 16-bit scaled).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_adc(raw: u16) {
    SIM_LIGHT_ADC.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read_u16(_channel: u32) -> Result<u16, SensorError> {
    Ok(SIM_LIGHT_ADC.load(Ordering::Relaxed))
}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    for input in DigitalInput::ALL {
        let pin = pins::input_gpio(input);
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
    }

    info!("hw_init: GPIO inputs configured (pull-up)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> i32 {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin.
    unsafe { gpio_get_level(pin) }
}

/// Simulated pin levels, one bit per GPIO.  Pulled-up inputs idle high.
#[cfg(not(target_os = "espidf"))]
static SIM_GPIO_LEVELS: AtomicU64 = AtomicU64::new(u64::MAX);

#[cfg(not(target_os = "espidf"))]
fn sim_mask(pin: i32) -> u64 {
    debug_assert!((0..64).contains(&pin), "GPIO {pin} outside the simulated bank");
    1u64.checked_shl(pin as u32).unwrap_or(0)
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gpio(pin: i32, high: bool) {
    let mask = sim_mask(pin);
    if high {
        SIM_GPIO_LEVELS.fetch_or(mask, Ordering::Relaxed);
    } else {
        SIM_GPIO_LEVELS.fetch_and(!mask, Ordering::Relaxed);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> i32 {
    i32::from(SIM_GPIO_LEVELS.load(Ordering::Relaxed) & sim_mask(pin) != 0)
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs(dimmer_idle_level: bool) -> Result<(), HwInitError> {
    let dimmer = pins::output_gpio(DigitalOutput::Dimmer);
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << dimmer,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    let ret = unsafe { gpio_set_level(dimmer, u32::from(dimmer_idle_level)) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), i32> {
    // SAFETY: gpio_set_level writes to an already-configured output pin.
    let ret = unsafe { gpio_set_level(pin, u32::from(high)) };
    if ret != ESP_OK as i32 { Err(ret) } else { Ok(()) }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), i32> {
    sim_set_gpio(pin, high);
    Ok(())
}
