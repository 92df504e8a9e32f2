//! Wall-clock sampling and the tick timer service.

use std::cell::Cell;

use crate::time::WallClockTime;

/// A source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> WallClockTime;
}

/// The system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> WallClockTime {
        WallClockTime::from_timelike(&chrono::Local::now())
    }
}

/// A clock that reports whatever time it was last set to.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    time: Cell<WallClockTime>,
}

impl FixedClock {
    pub fn new(time: WallClockTime) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    pub fn set(&self, time: WallClockTime) {
        self.time.set(time);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> WallClockTime {
        self.time.get()
    }
}

/// Granularity a [`TickTimer`] is subscribed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickUnit {
    #[default]
    Second,
    Minute,
    Hour,
}

impl TickUnit {
    /// The part of a time that must change for a tick to fire.
    fn key(self, t: WallClockTime) -> (u8, u8, u8) {
        match self {
            TickUnit::Second => (t.hour(), t.minute(), t.second()),
            TickUnit::Minute => (t.hour(), t.minute(), 0),
            TickUnit::Hour => (t.hour(), 0, 0),
        }
    }
}

/// Turns a stream of clock samples into ticks at a fixed granularity.
///
/// The loop samples the clock far more often than once per unit; `poll`
/// fires on the first sample and then once each time the subscribed unit
/// (or anything coarser) rolls over.
#[derive(Debug, Clone)]
pub struct TickTimer {
    unit: TickUnit,
    last: Option<(u8, u8, u8)>,
}

impl TickTimer {
    pub fn new(unit: TickUnit) -> Self {
        Self { unit, last: None }
    }

    pub fn unit(&self) -> TickUnit {
        self.unit
    }

    /// Return `true` if `now` starts a new tick.
    pub fn poll(&mut self, now: WallClockTime) -> bool {
        let key = self.unit.key(now);
        if self.last == Some(key) {
            return false;
        }
        self.last = Some(key);
        true
    }
}
