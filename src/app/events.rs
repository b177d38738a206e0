//! Outbound application events.
//!
//! The [`DashLight`](super::service::DashLight) controller emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use serde::Serialize;

use crate::config::DashlightConfig;
use crate::control::arbiter::OverrideState;
use crate::control::decision::DimmerOutput;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The controller has been constructed and validated.
    Started(DashlightConfig),

    /// Per-tick diagnostic snapshot.
    Telemetry(TickReport),

    /// The dimmer output changed (`from` is `None` on the first tick).
    OutputChanged {
        from: Option<DimmerOutput>,
        to: DimmerOutput,
    },

    /// The loop was asked to stop.
    Stopped { ticks: u64 },
}

/// Everything the controller saw and decided during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickReport {
    /// 1-based tick counter.
    pub tick: u64,
    /// Raw light reading taken this tick.
    pub light: u16,
    /// Lowest reading seen since boot.
    pub light_min: u16,
    /// Highest reading seen since boot.
    pub light_max: u16,
    /// Rolling average after recording `light`.
    pub average: f32,
    /// Headlight power sense (advisory, not used by the decision).
    pub headlight: bool,
    pub force_bright: bool,
    pub force_dim: bool,
    pub override_state: OverrideState,
    pub output: DimmerOutput,
}
