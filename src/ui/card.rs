//! Card renderer
//!
//! Draws one quotation as a bordered card: a button row (share, copy), the
//! wrapped quotation text, a rule, then source and optional year. Button
//! areas are recorded for mouse hit testing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::theme;
use crate::logic::format::{display_width, wrap_text};
use crate::model::HitAreas;
use crate::quotes::Quote;

const SHARE_LABEL: &str = "⇪ 分享";
const COPY_LABEL: &str = "⧉ 复制";
const COPIED_LABEL: &str = "✓ 已复制";

/// Height a card needs for `quote` at outer width `width`
pub fn card_height(quote: &Quote, width: u16) -> u16 {
    let inner = width.saturating_sub(4) as usize;
    let text_lines = wrap_text(&quote.text, inner).len().max(1);
    let source_lines = wrap_text(&quote.source, source_width(quote, inner)).len().max(1);
    // borders + button row + text + rule + source
    (2 + 1 + text_lines + 1 + source_lines) as u16
}

fn source_width(quote: &Quote, inner: usize) -> usize {
    let year_width = quote.year.as_deref().map(display_width).unwrap_or(0);
    if year_width > 0 {
        inner.saturating_sub(year_width + 1).max(1)
    } else {
        inner.max(1)
    }
}

/// Render a quotation card
///
/// `copied` switches the copy button to its acknowledgment label.
pub fn render_card(
    f: &mut Frame,
    area: Rect,
    quote: &Quote,
    selected: bool,
    copied: bool,
    hit_areas: &mut HitAreas,
) {
    if area.width < 6 || area.height < 4 {
        return;
    }

    let border_style = if selected {
        Style::default().fg(theme::CHINA_RED).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::MUTED)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Button row: quote mark on the left, share + copy on the right
    let copy_label = if copied { COPIED_LABEL } else { COPY_LABEL };
    let copy_width = display_width(copy_label) as u16;
    let share_width = display_width(SHARE_LABEL) as u16;
    let buttons_width = share_width + 2 + copy_width;

    f.render_widget(
        Paragraph::new(Span::styled("“", Style::default().fg(theme::CHINA_RED))),
        Rect { height: 1, ..inner },
    );

    if inner.width > buttons_width + 2 {
        let share_area = Rect {
            x: inner.right() - buttons_width,
            y: inner.y,
            width: share_width,
            height: 1,
        };
        let copy_area = Rect {
            x: share_area.right() + 2,
            y: inner.y,
            width: copy_width,
            height: 1,
        };

        let button_style = if selected {
            Style::default().fg(theme::CHINA_RED)
        } else {
            Style::default().fg(theme::MUTED)
        };
        let copy_style = if copied {
            Style::default().fg(ratatui::style::Color::Green).add_modifier(Modifier::BOLD)
        } else {
            button_style
        };

        f.render_widget(Paragraph::new(Span::styled(SHARE_LABEL, button_style)), share_area);
        f.render_widget(Paragraph::new(Span::styled(copy_label, copy_style)), copy_area);
        hit_areas.share_buttons.push((quote.id, share_area));
        hit_areas.copy_buttons.push((quote.id, copy_area));
    }

    // Body text
    let text_lines: Vec<Line> = wrap_text(&quote.text, inner.width as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().add_modifier(Modifier::BOLD))))
        .collect();
    let source_lines = wrap_text(&quote.source, source_width(quote, inner.width as usize));

    let footer_height = (source_lines.len() as u16 + 1).min(inner.height.saturating_sub(1));
    let text_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1 + footer_height),
        ..inner
    };
    f.render_widget(Paragraph::new(text_lines), text_area);

    if footer_height == 0 {
        return;
    }

    // Footer: rule, then source (red) with year right-aligned (muted)
    let footer = Rect {
        y: inner.bottom() - footer_height,
        height: footer_height,
        ..inner
    };
    let rule = "─".repeat(inner.width as usize);
    f.render_widget(
        Paragraph::new(Span::styled(rule, Style::default().fg(theme::MUTED))),
        Rect { height: 1, ..footer },
    );

    let mut lines: Vec<Line> = Vec::with_capacity(source_lines.len());
    for (idx, source) in source_lines.into_iter().enumerate() {
        let mut spans = vec![Span::styled(source.clone(), Style::default().fg(theme::CHINA_RED))];
        if idx == 0 {
            if let Some(year) = &quote.year {
                let pad = (inner.width as usize)
                    .saturating_sub(display_width(&source) + display_width(year));
                spans.push(Span::raw(" ".repeat(pad)));
                spans.push(Span::styled(year.clone(), Style::default().fg(theme::MUTED)));
            }
        }
        lines.push(Line::from(spans));
    }
    f.render_widget(
        Paragraph::new(lines),
        Rect {
            y: footer.y + 1,
            height: footer.height.saturating_sub(1),
            ..footer
        },
    );
}
