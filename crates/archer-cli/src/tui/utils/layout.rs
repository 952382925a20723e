//! Layout helpers

use ratatui::layout::Rect;

/// A rect of at most `max_width` x `max_height`, centered in `area`,
/// keeping `margin` cells clear on each side when there is room.
pub fn centered_rect(area: Rect, max_width: u16, max_height: u16, margin: u16) -> Rect {
    let avail_w = area.width.saturating_sub(margin * 2).max(area.width.min(1));
    let avail_h = area.height.saturating_sub(margin * 2).max(area.height.min(1));
    let width = max_width.min(avail_w);
    let height = max_height.min(avail_h);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
