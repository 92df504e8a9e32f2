use crate::battery::BatteryState;
use crate::event::Event;
use crate::format::{format_battery, format_time};
use crate::time::WallClockTime;

/// Placeholder shown in both time slots before the first tick.
pub const TIME_PLACEHOLDER: &str = "00:00";

/// Placeholder shown in the battery slot before the first battery event.
///
/// Wider than anything [`format_battery`] produces for a discharging battery
/// below 100%.
pub const BATTERY_PLACEHOLDER: &str = "000%";

/// The text currently shown in each watchface slot.
///
/// Owned by the app loop and mutated only through the two handlers, each of
/// which touches its own fields and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    time12: String,
    time24: String,
    battery_text: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Create the startup state with placeholder text in every slot.
    pub fn new() -> Self {
        Self {
            time12: TIME_PLACEHOLDER.to_string(),
            time24: TIME_PLACEHOLDER.to_string(),
            battery_text: BATTERY_PLACEHOLDER.to_string(),
        }
    }

    pub fn time12(&self) -> &str {
        &self.time12
    }

    pub fn time24(&self) -> &str {
        &self.time24
    }

    pub fn battery_text(&self) -> &str {
        &self.battery_text
    }

    /// Tick handler: reformat both time slots.
    pub fn on_tick(&mut self, now: WallClockTime) {
        let (time12, time24) = format_time(now);
        self.time12 = time12;
        self.time24 = time24;
    }

    /// Battery handler: reformat the battery slot.
    pub fn on_battery_change(&mut self, state: BatteryState) {
        self.battery_text = format_battery(state);
    }

    /// Route a bus event to the matching handler.
    ///
    /// Returns `true` if the event was a display update. Input, resize and
    /// quit events are left to the app.
    pub fn handle_event(&mut self, ev: &Event) -> bool {
        match ev {
            Event::Tick { time } => {
                self.on_tick(*time);
                tracing::trace!(time = %time, time12 = %self.time12, "tick");
                true
            }
            Event::Battery(state) => {
                self.on_battery_change(*state);
                tracing::debug!(text = %self.battery_text, "battery slot updated");
                true
            }
            Event::Key(_) | Event::Resize { .. } | Event::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u8, m: u8, s: u8) -> WallClockTime {
        WallClockTime::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn startup_shows_placeholders() {
        let state = DisplayState::new();
        assert_eq!(state.time12(), "00:00");
        assert_eq!(state.time24(), "00:00");
        assert_eq!(state.battery_text(), "000%");
        assert_eq!(DisplayState::default(), state);
    }

    #[test]
    fn tick_in_the_morning() {
        let mut state = DisplayState::new();
        state.on_tick(at(9, 5, 30));
        assert_eq!(state.time12(), "09:05");
        assert_eq!(state.time24(), "09:05");
    }

    #[test]
    fn tick_after_noon() {
        let mut state = DisplayState::new();
        state.on_tick(at(13, 0, 0));
        assert_eq!(state.time12(), "01:00");
        assert_eq!(state.time24(), "13:00");
    }

    #[test]
    fn battery_discharging() {
        let mut state = DisplayState::new();
        state.on_battery_change(BatteryState {
            charge_percent: 7,
            is_charging: false,
        });
        assert_eq!(state.battery_text(), "7%");
    }

    #[test]
    fn battery_charging() {
        let mut state = DisplayState::new();
        state.on_battery_change(BatteryState {
            charge_percent: 45,
            is_charging: true,
        });
        assert_eq!(state.battery_text(), "charging...");
    }

    #[test]
    fn tick_leaves_battery_untouched() {
        let mut state = DisplayState::new();
        state.on_tick(at(18, 45, 0));
        assert_eq!(state.battery_text(), BATTERY_PLACEHOLDER);
    }

    #[test]
    fn battery_leaves_time_untouched() {
        let mut state = DisplayState::new();
        state.on_tick(at(18, 45, 0));
        state.on_battery_change(BatteryState {
            charge_percent: 100,
            is_charging: false,
        });
        assert_eq!(state.time12(), "06:45");
        assert_eq!(state.time24(), "18:45");
        assert_eq!(state.battery_text(), "100%");
    }

    #[test]
    fn latest_event_wins() {
        let mut state = DisplayState::new();
        state.on_tick(at(1, 0, 0));
        state.on_tick(at(2, 30, 0));
        assert_eq!(state.time24(), "02:30");
    }

    #[test]
    fn handle_event_routes_updates() {
        let mut state = DisplayState::new();
        assert!(state.handle_event(&Event::Tick { time: at(23, 5, 0) }));
        assert!(state.handle_event(&Event::Battery(BatteryState {
            charge_percent: 55,
            is_charging: false,
        })));
        assert_eq!(state.time12(), "11:05");
        assert_eq!(state.time24(), "23:05");
        assert_eq!(state.battery_text(), "55%");
    }

    #[test]
    fn handle_event_ignores_non_display_events() {
        let mut state = DisplayState::new();
        assert!(!state.handle_event(&Event::Resize { cols: 80, rows: 24 }));
        assert!(!state.handle_event(&Event::Quit));
        assert_eq!(state, DisplayState::new());
    }
}
