use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use dualtime_config::WatchConfig;
use dualtime_core::{
    battery::{BatteryMonitor, BatterySource},
    bus::EventBus,
    clock::{Clock, TickTimer},
    display::DisplayState,
    event::Event,
};

/// The running watchface: display state plus the services feeding it.
pub struct App<C> {
    pub display: DisplayState,
    pub bus: EventBus,
    clock: C,
    ticks: TickTimer,
    battery: BatteryMonitor<Box<dyn BatterySource>>,
}

impl<C: Clock> App<C> {
    /// Wire up the tick timer and battery monitor described by `config`.
    pub fn new(config: &WatchConfig, clock: C) -> Result<Self> {
        let source = config.battery.open_source()?;
        Self::with_source(config, clock, source)
    }

    pub fn with_source(
        config: &WatchConfig,
        clock: C,
        source: Box<dyn BatterySource>,
    ) -> Result<Self> {
        let battery = BatteryMonitor::new(source, config.battery.poll_interval())?;
        let ticks = TickTimer::new(config.clock.tick_unit.into());
        tracing::info!(tick_unit = ?ticks.unit(), "watchface services ready");

        Ok(Self {
            display: DisplayState::new(),
            bus: EventBus::new(),
            clock,
            ticks,
            battery,
        })
    }

    /// Queue the eager startup updates: the battery snapshot, then the time.
    pub fn start(&mut self) {
        self.bus.publish(Event::Battery(self.battery.peek()));
        let now = self.clock.now();
        if self.ticks.poll(now) {
            self.bus.publish(Event::Tick { time: now });
        }
    }

    /// Sample the clock and battery, publishing whatever changed.
    pub fn pump_services(&mut self, now: Instant) {
        let time = self.clock.now();
        if self.ticks.poll(time) {
            self.bus.publish(Event::Tick { time });
        }
        if let Some(state) = self.battery.poll(now) {
            self.bus.publish(Event::Battery(state));
        }
    }

    /// Translate a key press into a bus event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let quit = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        };
        if quit {
            self.bus.publish(Event::Quit);
        } else {
            self.bus.publish(Event::Key(key));
        }
    }

    /// Drain the bus and run every event to completion.
    ///
    /// Returns `true` once a quit event has been seen; events queued behind
    /// it are dropped.
    pub fn dispatch(&mut self) -> bool {
        for ev in self.bus.drain() {
            match &ev {
                Event::Quit => {
                    tracing::info!("quit requested");
                    return true;
                }
                Event::Resize { cols, rows } => {
                    tracing::debug!(cols, rows, "terminal resized");
                }
                Event::Key(key) => {
                    tracing::trace!(code = ?key.code, "unbound key");
                }
                Event::Tick { .. } | Event::Battery(_) => {}
            }
            self.display.handle_event(&ev);
        }
        false
    }
}
