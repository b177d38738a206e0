//! Control algorithms: smoothing, override arbitration, and the output
//! decision.  Everything here is hardware-free.

pub mod arbiter;
pub mod decision;
pub mod smoothing;
