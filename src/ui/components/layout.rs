use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the fixtures screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub leagues: Rect,
    pub listing: Rect,
    pub footer: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: rows[0],
            leagues: rows[1],
            listing: rows[2],
            footer: rows[3],
        }
    }
}

/// Footer split into the download button (sized to its label) and the hint.
pub fn footer_columns(area: Rect, button_width: u16) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(button_width), Constraint::Min(1)])
        .split(area);
    (cols[0], cols[1])
}

/// A `width` x `height` box centered in `area`, shrunk to fit if needed.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
