use crate::battery::BatteryState;
use crate::time::WallClockTime;

#[derive(Debug, Clone)]
pub enum Event {
    /// The tick timer fired for the sampled wall-clock time.
    Tick { time: WallClockTime },
    /// The battery service reported a new state (or the startup snapshot).
    Battery(BatteryState),
    Key(crossterm::event::KeyEvent),
    Resize { cols: u16, rows: u16 },
    Quit,
}
