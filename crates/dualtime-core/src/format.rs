//! Text formatting for the watchface slots.
//!
//! All functions are pure and easy to test in isolation.

use crate::battery::BatteryState;
use crate::time::WallClockTime;

/// Text shown in the battery slot while the charger is connected.
pub const CHARGING_TEXT: &str = "charging...";

/// Format a wall-clock time as `(time12, time24)`.
///
/// Both are zero-padded `"HH:MM"`. The 12-hour form maps hour 0 to 12 and
/// carries no AM/PM marker, so midnight and noon both read `"12:00"`.
pub fn format_time(now: WallClockTime) -> (String, String) {
    let hour12 = match now.hour() {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let time12 = format!("{:02}:{:02}", hour12, now.minute());
    let time24 = format!("{:02}:{:02}", now.hour(), now.minute());
    (time12, time24)
}

/// Format a battery snapshot for the battery slot.
///
/// Returns [`CHARGING_TEXT`] while charging, otherwise the unpadded percentage
/// followed by `%` (`"5%"`, `"100%"`).
pub fn format_battery(state: BatteryState) -> String {
    if state.is_charging {
        CHARGING_TEXT.to_string()
    } else {
        format!("{}%", state.charge_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u8, m: u8, s: u8) -> WallClockTime {
        WallClockTime::from_hms(h, m, s).unwrap()
    }

    fn on_battery(percent: u8) -> BatteryState {
        BatteryState {
            charge_percent: percent,
            is_charging: false,
        }
    }

    #[test]
    fn format_time_morning() {
        assert_eq!(
            format_time(at(9, 5, 30)),
            ("09:05".to_string(), "09:05".to_string())
        );
    }

    #[test]
    fn format_time_afternoon_wraps_12h() {
        assert_eq!(
            format_time(at(13, 0, 0)),
            ("01:00".to_string(), "13:00".to_string())
        );
    }

    #[test]
    fn format_time_midnight_reads_twelve() {
        let (time12, time24) = format_time(at(0, 0, 0));
        assert_eq!(time12, "12:00");
        assert_eq!(time24, "00:00");
    }

    #[test]
    fn format_time_noon_reads_twelve() {
        let (time12, time24) = format_time(at(12, 0, 0));
        assert_eq!(time12, "12:00");
        assert_eq!(time24, "12:00");
    }

    #[test]
    fn format_time_every_hour_and_minute() {
        for h in 0..24u8 {
            for m in 0..60u8 {
                let (time12, time24) = format_time(at(h, m, 0));
                let expected12 = if h == 0 {
                    12
                } else if h > 12 {
                    h - 12
                } else {
                    h
                };
                assert_eq!(time24, format!("{:02}:{:02}", h, m));
                assert_eq!(time12, format!("{:02}:{:02}", expected12, m));
                assert_eq!(time12.len(), 5);
            }
        }
    }

    #[test]
    fn format_time_ignores_seconds() {
        assert_eq!(format_time(at(22, 41, 0)), format_time(at(22, 41, 59)));
    }

    #[test]
    fn format_battery_single_digit() {
        assert_eq!(format_battery(on_battery(7)), "7%");
    }

    #[test]
    fn format_battery_zero() {
        assert_eq!(format_battery(on_battery(0)), "0%");
    }

    #[test]
    fn format_battery_full() {
        assert_eq!(format_battery(on_battery(100)), "100%");
    }

    #[test]
    fn format_battery_full_range_unpadded() {
        for p in 0..=100u8 {
            assert_eq!(format_battery(on_battery(p)), format!("{}%", p));
        }
    }

    #[test]
    fn format_battery_charging_ignores_percent() {
        for p in [0u8, 45, 100, 200, u8::MAX] {
            let state = BatteryState {
                charge_percent: p,
                is_charging: true,
            };
            assert_eq!(format_battery(state), "charging...");
        }
    }

    #[test]
    fn formatters_are_idempotent() {
        let t = at(17, 30, 12);
        assert_eq!(format_time(t), format_time(t));
        let b = on_battery(64);
        assert_eq!(format_battery(b), format_battery(b));
    }
}
