//! Battery snapshots and the host-side battery service.
//!
//! A [`BatterySource`] knows how to read the hardware; a [`BatteryMonitor`]
//! wraps one with the "peek once at startup, then notify on change" contract
//! the watchface expects.

use std::time::{Duration, Instant};

use anyhow::Result;

/// A point-in-time battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryState {
    /// Charge level, nominally 0–100.
    pub charge_percent: u8,
    /// Whether a charger is connected and charging.
    pub is_charging: bool,
}

/// Something that can read the current battery state.
pub trait BatterySource {
    /// Short name used in log lines (e.g. `"sysfs"`, `"fixed"`).
    fn name(&self) -> &str;

    /// Read a fresh snapshot from the underlying device.
    fn read(&mut self) -> Result<BatteryState>;
}

/// A battery that always reports the same state.
///
/// Used on machines without a battery and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedBattery(pub BatteryState);

impl FixedBattery {
    pub fn new(charge_percent: u8, is_charging: bool) -> Self {
        Self(BatteryState {
            charge_percent,
            is_charging,
        })
    }
}

impl BatterySource for FixedBattery {
    fn name(&self) -> &str {
        "fixed"
    }

    fn read(&mut self) -> Result<BatteryState> {
        Ok(self.0)
    }
}

impl<S: BatterySource + ?Sized> BatterySource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&mut self) -> Result<BatteryState> {
        (**self).read()
    }
}

/// Interval-gated battery change detector.
///
/// Call [`poll`](Self::poll) on every loop iteration; the source is only read
/// once per interval, and a state is returned only when it differs from the
/// last one seen.
pub struct BatteryMonitor<S> {
    source: S,
    interval: Duration,
    last_read: Option<Instant>,
    state: BatteryState,
}

impl<S: BatterySource> BatteryMonitor<S> {
    /// Take the startup snapshot and build a monitor around `source`.
    pub fn new(mut source: S, interval: Duration) -> Result<Self> {
        let state = source.read()?;
        tracing::info!(
            source = source.name(),
            percent = state.charge_percent,
            charging = state.is_charging,
            "battery monitor started"
        );
        Ok(Self {
            source,
            interval,
            last_read: Some(Instant::now()),
            state,
        })
    }

    /// Return the last known state without touching the device.
    pub fn peek(&self) -> BatteryState {
        self.state
    }

    /// Re-read the source if the interval has elapsed.
    ///
    /// Returns the new state if it changed. Read failures are logged and the
    /// previous state is kept.
    pub fn poll(&mut self, now: Instant) -> Option<BatteryState> {
        let due = match self.last_read {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= self.interval),
        };
        if !due {
            return None;
        }
        self.last_read = Some(now);

        let state = match self.source.read() {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(source = self.source.name(), error = %err, "battery read failed");
                return None;
            }
        };

        if state == self.state {
            return None;
        }

        tracing::debug!(
            percent = state.charge_percent,
            charging = state.is_charging,
            "battery state changed"
        );
        self.state = state;
        Some(state)
    }
}
