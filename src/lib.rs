//! Dashlight firmware library.
//!
//! Decides whether a dashboard display should be dimmed or kept bright from
//! an ambient light sensor and two manual override switches.  The pure-logic
//! modules are exposed for integration testing; ESP-IDF-specific code is
//! guarded by `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
