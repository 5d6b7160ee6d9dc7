use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::theme;
use crate::logic::format::{display_width, wrap_text};

/// Widest a toast may get, in columns
const MAX_TOAST_WIDTH: usize = 72;

/// Errors are messages starting with "Error:"
fn is_error(message: &str) -> bool {
    message.starts_with("Error:")
}

/// Render a toast notification above the legend line
///
/// Long messages (file paths) wrap instead of being cut off.
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let max_text = MAX_TOAST_WIDTH.min(area.width.saturating_sub(6) as usize).max(1);
    let lines = wrap_text(message, max_text);
    let text_width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);

    let width = ((text_width + 6) as u16).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let (icon, color) = if is_error(message) {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let body: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            let lead = if idx == 0 { icon } else { "  " };
            Line::from(vec![
                Span::styled(lead, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(line),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().fg(theme::INK).bg(theme::PAPER));

    f.render_widget(Clear, toast_area);
    f.render_widget(
        Paragraph::new(body).block(block).alignment(Alignment::Center),
        toast_area,
    );
}
