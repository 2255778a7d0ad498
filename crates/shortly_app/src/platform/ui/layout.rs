use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical arrangement of the main screen, top to bottom.
pub struct ScreenAreas {
    pub title: Rect,
    pub input: Rect,
    pub status: Rect,
    pub result: Rect,
    pub history: Rect,
    pub hints: Rect,
}

pub fn split(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title and tagline
            Constraint::Length(3), // URL input box
            Constraint::Length(1), // Status line: spinner or error
            Constraint::Length(2), // Shortened result
            Constraint::Min(3),    // History list takes the remaining space
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        input: chunks[1],
        status: chunks[2],
        result: chunks[3],
        history: chunks[4],
        hints: chunks[5],
    }
}
