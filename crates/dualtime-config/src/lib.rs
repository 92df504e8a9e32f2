//! Configuration types and loaders for dualtime.
//!
//! This crate owns the on-disk `config.toml` schema and turns it into the
//! services the app loop runs with.

pub mod watch;

pub use watch::{BatteryConfig, BatterySourceKind, ClockConfig, TickUnitSetting, WatchConfig};
