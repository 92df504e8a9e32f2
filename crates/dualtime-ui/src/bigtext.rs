use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Rows in every glyph.
pub const GLYPH_HEIGHT: u16 = 5;

/// Columns left blank between glyphs.
const GLYPH_SPACING: u16 = 1;

/// Character used for lit glyph pixels.
const FILL: char = '█';

const DIGITS: [[&str; 5]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    ["  #", "  #", "  #", "  #", "  #"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

const COLON: [&str; 5] = [" ", "#", " ", "#", " "];
const BLANK: [&str; 5] = ["   ", "   ", "   ", "   ", "   "];

fn glyph(c: char) -> &'static [&'static str; 5] {
    match c {
        '0'..='9' => &DIGITS[c as usize - '0' as usize],
        ':' => &COLON,
        _ => &BLANK,
    }
}

/// Width in cells of `text` when drawn with [`BigText`].
pub fn text_width(text: &str) -> u16 {
    let glyphs: u16 = text.chars().map(|c| glyph(c)[0].len() as u16).sum();
    let gaps = (text.chars().count() as u16).saturating_sub(1) * GLYPH_SPACING;
    glyphs + gaps
}

/// Whether `text` fits into `area` at full size.
pub fn fits(text: &str, area: Rect) -> bool {
    area.height >= GLYPH_HEIGHT && area.width >= text_width(text)
}

/// A horizontally centered line of large block digits.
///
/// Only digits and `:` have glyphs; anything else is drawn blank. The widget
/// draws nothing if the text does not fit; check [`fits`] first.
pub struct BigText<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> BigText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for BigText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !fits(self.text, area) {
            return;
        }

        let mut x = area.x + (area.width - text_width(self.text)) / 2;
        for c in self.text.chars() {
            let rows = glyph(c);
            for (dy, row) in rows.iter().enumerate() {
                for (dx, px) in row.chars().enumerate() {
                    if px != '#' {
                        continue;
                    }
                    let pos = (x + dx as u16, area.y + dy as u16);
                    if let Some(cell) = buf.cell_mut(pos) {
                        cell.set_char(FILL);
                        cell.set_style(self.style);
                    }
                }
            }
            x += rows[0].len() as u16 + GLYPH_SPACING;
        }
    }
}
