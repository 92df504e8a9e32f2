use ratatui::layout::Rect;

/// Screen regions of the watchface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRects {
    /// Upper background half.
    pub top: Rect,
    /// Lower background half.
    pub bottom: Rect,
    /// Battery text, first row of the upper half.
    pub battery: Rect,
    /// 12-hour time, inside the upper half.
    pub time12: Rect,
    /// 24-hour time, inside the lower half at the same offset.
    pub time24: Rect,
}

/// Split `area` into two background halves and place the three text slots.
///
/// Both times sit a tenth of the screen height below the top of their half,
/// but never on the battery row.
pub fn face_layout(area: Rect) -> FaceRects {
    let half = area.height / 2;
    let top = Rect::new(area.x, area.y, area.width, half);
    let bottom = Rect::new(area.x, area.y + half, area.width, area.height - half);

    let battery = Rect::new(area.x, area.y, area.width, area.height.min(1));

    let offset = (area.height / 10).max(1);
    let time12 = slot_below(top, offset);
    let time24 = slot_below(bottom, offset);

    FaceRects {
        top,
        bottom,
        battery,
        time12,
        time24,
    }
}

/// The part of `half` starting `offset` rows down, empty if there is none.
fn slot_below(half: Rect, offset: u16) -> Rect {
    let offset = offset.min(half.height);
    Rect::new(half.x, half.y + offset, half.width, half.height - offset)
}
