//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                         |
//! |------------|--------------|-------------------------------------|
//! | `hardware` | DashboardIo  | any `embedded-hal` pins + ADC       |
//! | `log_sink` | EventSink    | `log` facade / serial console       |
//! | `time`     | DelayNs      | `std::thread::sleep` (host)         |

pub mod hardware;
pub mod log_sink;
pub mod time;
