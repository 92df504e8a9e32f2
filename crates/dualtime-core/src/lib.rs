//! Core of the dualtime watchface.
//!
//! This crate owns everything that is not drawing: the wall-clock and battery
//! types, the text formatters, the display state those formatters write into,
//! the event bus that feeds it, and the host-side tick and battery services.
//! Rendering lives in `dualtime-ui`.

pub mod battery;
pub mod bus;
pub mod clock;
pub mod display;
pub mod event;
pub mod format;
pub mod logging;
pub mod sysfs;
pub mod time;
