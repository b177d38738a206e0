//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (ESP-IDF logger on the device, UART / USB-CDC).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | #{} | light={} ({} - {}) avg={:.1} | dim={} bri={} hl={} | \
                     override={:?} -> {:?}",
                    t.tick,
                    t.light,
                    t.light_min,
                    t.light_max,
                    t.average,
                    t.force_dim,
                    t.force_bright,
                    t.headlight,
                    t.override_state,
                    t.output,
                );
            }
            AppEvent::OutputChanged { from, to } => match from {
                Some(from) => info!("OUTPUT | {:?} -> {:?}", from, to),
                None => info!("OUTPUT | initial {:?}", to),
            },
            AppEvent::Started(config) => {
                info!(
                    "START | transition={} tick={}ms bright_level={} dim_level={}",
                    config.light_transition,
                    config.tick_period_ms,
                    config.polarity.bright_level,
                    config.polarity.dim_level,
                );
            }
            AppEvent::Stopped { ticks } => {
                info!("STOP | after {} ticks", ticks);
            }
        }
    }
}
