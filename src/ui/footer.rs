use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme;

pub const MOTTO_LEFT: &str = "好好学习";
pub const MOTTO_RIGHT: &str = "天天向上";

/// Render the motto line under the card grid
pub fn render_footer(f: &mut Frame, area: Rect) {
    let muted = Style::default().fg(theme::MUTED);
    let line = Line::from(vec![
        Span::styled(MOTTO_LEFT, muted),
        Span::styled(" · ", muted),
        Span::styled(MOTTO_RIGHT, muted),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
