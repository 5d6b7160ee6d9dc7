//! Header: title banner, category tabs and the random-pick button

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;
use crate::logic::format::display_width;
use crate::model::Model;
use crate::quotes::CategoryFilter;

/// Height of the header in rows
pub const HEADER_HEIGHT: u16 = 5;

const TITLE: &str = "★ 毛泽东语录 ★";
const SUBTITLE: &str = "MAO ZEDONG QUOTES";
const RANDOM_LABEL: &str = " ⟳ 随机一条 ";

/// Render the header and record tab/button hit areas
pub fn render_header(f: &mut Frame, area: Rect, model: &mut Model, tab_counts: &[usize; 6]) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme::CHINA_RED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let banner_style = Style::default()
        .fg(theme::REVOLUTION_GOLD)
        .bg(theme::CHINA_RED)
        .add_modifier(Modifier::BOLD);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(TITLE, banner_style)),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(theme::REVOLUTION_GOLD).bg(theme::CHINA_RED))),
    ])
    .style(Style::default().bg(theme::CHINA_RED))
    .alignment(Alignment::Center);
    f.render_widget(banner, Rect { height: inner.height.min(2), ..inner });

    if inner.height < 4 {
        return;
    }

    // Tabs row (leave one blank row under the banner)
    let row = Rect {
        y: inner.y + 3,
        height: 1,
        ..inner
    };

    let mut x = row.x + 1;
    for (idx, tab) in CategoryFilter::TABS.iter().enumerate() {
        let label = format!(" {} {} ", tab.label(), tab_counts[idx]);
        let width = display_width(&label) as u16;
        if x + width > row.right() {
            break;
        }
        let style = if *tab == model.gallery.filter {
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(theme::CHINA_RED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::MUTED)
        };
        let tab_area = Rect {
            x,
            y: row.y,
            width,
            height: 1,
        };
        f.render_widget(Paragraph::new(Span::styled(label, style)), tab_area);
        model.ui.hit_areas.tabs.push((*tab, tab_area));
        x += width + 1;
    }

    let random_width = display_width(RANDOM_LABEL) as u16;
    if row.width > random_width + 1 && x + random_width < row.right() {
        let button = Rect {
            x: row.right() - random_width - 1,
            y: row.y,
            width: random_width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                RANDOM_LABEL,
                Style::default()
                    .fg(theme::CHINA_RED)
                    .bg(theme::REVOLUTION_GOLD)
                    .add_modifier(Modifier::BOLD),
            )),
            button,
        );
        model.ui.hit_areas.random_button = Some(button);
    }
}
