use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::header::HEADER_HEIGHT;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Title banner, category tabs and random button
    pub header_area: Rect,
    /// Card grid
    pub gallery_area: Rect,
    /// Motto line under the grid
    pub footer_area: Rect,
    /// Hotkey legend (one line)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Banner + tabs
            Constraint::Min(3),                // Cards
            Constraint::Length(1),             // Footer motto
            Constraint::Length(1),             // Legend
        ])
        .split(terminal_size);

    // Keep a one-cell margin on both sides of the grid
    let gallery_area = Rect {
        x: chunks[1].x + 1,
        width: chunks[1].width.saturating_sub(2),
        y: chunks[1].y + 1,
        height: chunks[1].height.saturating_sub(1),
    };

    LayoutInfo {
        header_area: chunks[0],
        gallery_area,
        footer_area: chunks[2],
        legend_area: chunks[3],
    }
}
