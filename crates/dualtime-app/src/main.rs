mod app;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dualtime_config::WatchConfig;
use dualtime_core::{clock::LocalClock, event::Event, logging};
use dualtime_ui::face::render_watchface;

use crate::app::App;

/// How long to wait for input before sampling the clock again.
///
/// Well under a second so the seconds rollover is never missed by much.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let log_dir = logging::init()?;
    tracing::info!(log_dir = %log_dir.display(), "dualtime starting up");

    let config = WatchConfig::load()?;
    let mut app = App::new(&config, LocalClock)?;

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(terminal)?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "watchface stopped with an error");
    }
    tracing::info!("dualtime shut down");
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<LocalClock>) -> Result<()> {
    app.start();

    loop {
        // ── Drain → Dispatch ──
        if app.dispatch() {
            return Ok(());
        }

        // ── Render ──
        terminal.draw(|f| {
            let area = f.area();
            render_watchface(f, area, &app.display);
        })?;

        // ── Poll → Publish ──
        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                CEvent::Resize(cols, rows) => app.bus.publish(Event::Resize { cols, rows }),
                _ => {}
            }
        }

        app.pump_services(Instant::now());
    }
}
