//! Watchface rendering.
//!
//! Draws the red/green background split, the battery text and both times.
//! Times use the large block font when their slot is big enough and fall
//! back to a single bold line otherwise.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use dualtime_core::display::DisplayState;

use crate::bigtext::{self, BigText};
use crate::layout::face_layout;

pub const TOP_BACKGROUND: Color = Color::Red;
pub const BOTTOM_BACKGROUND: Color = Color::Green;
pub const TIME12_COLOR: Color = Color::Green;
pub const TIME24_COLOR: Color = Color::Red;
pub const BATTERY_COLOR: Color = Color::Green;

/// Render the whole watchface for `state` into `area`.
pub fn render_watchface(f: &mut Frame, area: Rect, state: &DisplayState) {
    let rects = face_layout(area);

    f.render_widget(
        Block::default().style(Style::default().bg(TOP_BACKGROUND)),
        rects.top,
    );
    f.render_widget(
        Block::default().style(Style::default().bg(BOTTOM_BACKGROUND)),
        rects.bottom,
    );

    render_time(f, rects.time12, state.time12(), TIME12_COLOR);
    render_time(f, rects.time24, state.time24(), TIME24_COLOR);

    // Drawn last so it stays on top in very short terminals.
    let battery = Paragraph::new(Line::from(state.battery_text()))
        .style(
            Style::default()
                .fg(BATTERY_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(battery, rects.battery);
}

fn render_time(f: &mut Frame, area: Rect, text: &str, color: Color) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if bigtext::fits(text, area) {
        f.render_widget(BigText::new(text).style(style), area);
    } else {
        let line = Paragraph::new(Line::from(text))
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualtime_core::battery::BatteryState;
    use dualtime_core::time::WallClockTime;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    /// Helper to render into a test terminal and return the buffer.
    fn render_to_buffer(width: u16, height: u16, state: &DisplayState) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_watchface(f, area, state);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content()
            .iter()
            .map(|c| c.symbol().to_string())
            .collect()
    }

    #[test]
    fn placeholders_in_small_terminal() {
        let buf = render_to_buffer(20, 8, &DisplayState::new());
        let text = buffer_text(&buf);
        assert!(text.contains("000%"));
        assert_eq!(text.matches("00:00").count(), 2);
    }

    #[test]
    fn background_is_split_in_two() {
        let buf = render_to_buffer(20, 10, &DisplayState::new());
        assert_eq!(buf.cell((19, 4)).unwrap().bg, TOP_BACKGROUND);
        assert_eq!(buf.cell((19, 5)).unwrap().bg, BOTTOM_BACKGROUND);
        assert_eq!(buf.cell((0, 9)).unwrap().bg, BOTTOM_BACKGROUND);
    }

    #[test]
    fn battery_on_first_row_in_green() {
        let mut state = DisplayState::new();
        state.on_battery_change(BatteryState {
            charge_percent: 7,
            is_charging: false,
        });
        let buf = render_to_buffer(20, 10, &state);
        let first_row: String = (0..20)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(first_row.trim(), "7%");
        let x = first_row.find('7').unwrap() as u16;
        assert_eq!(buf.cell((x, 0)).unwrap().fg, BATTERY_COLOR);
        assert_eq!(buf.cell((x, 0)).unwrap().bg, TOP_BACKGROUND);
    }

    #[test]
    fn plain_times_after_tick() {
        let mut state = DisplayState::new();
        state.on_tick(WallClockTime::from_hms(13, 0, 0).unwrap());
        let text = buffer_text(&render_to_buffer(20, 8, &state));
        assert!(text.contains("01:00"));
        assert!(text.contains("13:00"));
    }

    #[test]
    fn large_terminal_uses_block_digits() {
        let buf = render_to_buffer(40, 24, &DisplayState::new());
        let text = buffer_text(&buf);
        assert!(text.contains('█'));
        assert!(!text.contains("00:00"));
        assert!(text.contains("000%"));
    }

    #[test]
    fn block_digits_use_slot_colors() {
        let buf = render_to_buffer(40, 24, &DisplayState::new());
        let fg_of_blocks = |rows: std::ops::Range<u16>| {
            rows.flat_map(|y| (0..40u16).map(move |x| (x, y)))
                .filter_map(|pos| buf.cell(pos))
                .filter(|c| c.symbol() == "█")
                .map(|c| c.fg)
                .collect::<Vec<_>>()
        };
        let top = fg_of_blocks(0..12);
        let bottom = fg_of_blocks(12..24);
        assert!(!top.is_empty() && top.iter().all(|&c| c == TIME12_COLOR));
        assert!(!bottom.is_empty() && bottom.iter().all(|&c| c == TIME24_COLOR));
    }

    #[test]
    fn charging_text_fits_narrow_terminal() {
        let mut state = DisplayState::new();
        state.on_battery_change(BatteryState {
            charge_percent: 45,
            is_charging: true,
        });
        let text = buffer_text(&render_to_buffer(20, 8, &state));
        assert!(text.contains("charging..."));
    }

    #[test]
    fn no_panic_with_tiny_area() {
        let state = DisplayState::new();
        let _ = render_to_buffer(1, 1, &state);
        let _ = render_to_buffer(3, 2, &state);
    }
}
