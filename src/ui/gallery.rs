//! Card gallery
//!
//! Lays the visible quotations out as a grid of equal-height cards, keeps the
//! selected card scrolled into view, and shows an explicit empty state when
//! the filter matches nothing.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

use super::{card, theme};
use crate::logic;
use crate::model::Model;

/// Message shown when the active filter matches no quotation
pub const EMPTY_STATE_TEXT: &str = "暂无相关语录";

/// Gap between card columns
const COLUMN_GAP: u16 = 2;

/// Render the card grid into `area`
pub fn render_gallery(f: &mut Frame, area: Rect, model: &mut Model, now: Instant) {
    let columns = logic::grid::grid_columns(area.width);
    model.ui.grid_columns = columns;

    let visible = model.gallery.visible();
    if visible.is_empty() {
        render_empty_state(f, area);
        model.ui.grid_visible_rows = 1;
        return;
    }

    let gaps = COLUMN_GAP * (columns as u16 - 1);
    let card_width = area.width.saturating_sub(gaps) / columns as u16;
    if card_width == 0 || area.height == 0 {
        return;
    }

    // Equal-height rows, sized for the tallest visible card
    let row_height = visible
        .iter()
        .map(|q| card::card_height(q, card_width))
        .max()
        .unwrap_or(6)
        .min(area.height);

    let total_rows = visible.len().div_ceil(columns);
    let visible_rows = ((area.height / row_height.max(1)) as usize).max(1);
    let selected = model.gallery.selected.min(visible.len() - 1);
    let selected_row = selected / columns;
    let scroll_row = logic::grid::scroll_to_row(selected_row, visible_rows, model.gallery.scroll_row)
        .min(total_rows.saturating_sub(visible_rows));

    let mut placed = Vec::new();
    for (idx, quote) in visible.iter().enumerate() {
        let row = idx / columns;
        if row < scroll_row || row >= scroll_row + visible_rows {
            continue;
        }
        let col = (idx % columns) as u16;
        let rect = Rect {
            x: area.x + col * (card_width + COLUMN_GAP),
            y: area.y + (row - scroll_row) as u16 * row_height,
            width: card_width,
            height: row_height,
        };
        placed.push((idx, (*quote).clone(), rect));
    }

    model.gallery.selected = selected;
    model.gallery.scroll_row = scroll_row;
    model.ui.grid_visible_rows = visible_rows;

    for (idx, quote, rect) in placed {
        let copied = model.copy_acks.is_copied(quote.id, now);
        card::render_card(f, rect, &quote, idx == selected, copied, &mut model.ui.hit_areas);
        model.ui.hit_areas.cards.push((idx, rect));
    }

    // Scroll hint when rows are hidden below
    if scroll_row + visible_rows < total_rows && area.height > 0 {
        let hint = format!("↓ {} more", total_rows - scroll_row - visible_rows);
        let hint_area = Rect {
            x: area.x,
            y: area.bottom() - 1,
            width: area.width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(theme::MUTED)))
                .alignment(Alignment::Right),
            hint_area,
        );
    }
}

/// Render the empty-state indicator centered in `area`
pub fn render_empty_state(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "📖",
            Style::default().fg(theme::MUTED).add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(EMPTY_STATE_TEXT, Style::default().fg(theme::MUTED))),
    ];

    let height = (lines.len() as u16).min(area.height);
    let block_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height,
    };
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), block_area);
}
