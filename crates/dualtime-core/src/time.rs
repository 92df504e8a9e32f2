use std::fmt;

use anyhow::{bail, Result};
use chrono::Timelike;

/// A local wall-clock instant with second resolution.
///
/// Fields are always in range: hour 0–23, minute 0–59, second 0–59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallClockTime {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a time from its fields, rejecting out-of-range values.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 {
            bail!("hour out of range: {}", hour);
        }
        if minute > 59 {
            bail!("minute out of range: {}", minute);
        }
        if second > 59 {
            bail!("second out of range: {}", second);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Sample the fields of any `chrono` time value.
    ///
    /// Leap seconds are folded into second 59.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second().min(59) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn from_hms_accepts_bounds() {
        let t = WallClockTime::from_hms(23, 59, 59).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (23, 59, 59));
        assert_eq!(WallClockTime::from_hms(0, 0, 0).unwrap(), WallClockTime::MIDNIGHT);
    }

    #[test]
    fn from_hms_rejects_out_of_range() {
        let err = WallClockTime::from_hms(24, 0, 0).unwrap_err();
        assert!(err.to_string().contains("hour out of range"));
        assert!(WallClockTime::from_hms(0, 60, 0).is_err());
        assert!(WallClockTime::from_hms(0, 0, 60).is_err());
    }

    #[test]
    fn from_timelike_copies_fields() {
        let naive = NaiveTime::from_hms_opt(13, 7, 42).unwrap();
        let t = WallClockTime::from_timelike(&naive);
        assert_eq!(t, WallClockTime::from_hms(13, 7, 42).unwrap());
    }

    #[test]
    fn from_timelike_folds_leap_second() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        let t = WallClockTime::from_timelike(&leap);
        assert_eq!(t.second(), 59);
    }

    #[test]
    fn display_is_zero_padded() {
        let t = WallClockTime::from_hms(9, 5, 3).unwrap();
        assert_eq!(t.to_string(), "09:05:03");
    }
}
