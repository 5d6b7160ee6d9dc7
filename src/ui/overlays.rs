//! Modal overlays: random pick, share card, keyboard help
//!
//! Every overlay dims the frame behind it and records its content box so a
//! click outside can close it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

use super::{card, theme};
use crate::export::RenderTarget;
use crate::logic::format::{display_width, wrap_text};
use crate::logic::overlay::centered_rect;
use crate::model::Model;
use crate::quotes::Quote;

/// Share card size in cells (roughly a 2:3 playing card)
pub const SHARE_CARD_WIDTH: u16 = 36;
pub const SHARE_CARD_MIN_HEIGHT: u16 = 18;

const RANDOM_WIDTH: u16 = 60;
const CLOSE_LABEL: &str = " 关闭 Close ";
const DOWNLOAD_LABEL: &str = " ⤓ 保存图片 ";
const CLOSE_ICON: &str = " ✕ ";
const SHARE_HINT: &str = "- 截图保存分享 -";

/// Dim everything drawn so far
fn dim_backdrop(f: &mut Frame, area: Rect) {
    f.buffer_mut().set_style(
        area,
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    );
}

/// Render the random-pick overlay: one card plus a close button
pub fn render_random_overlay(f: &mut Frame, area: Rect, model: &mut Model, quote: &Quote, now: Instant) {
    dim_backdrop(f, area);

    let width = RANDOM_WIDTH.min(area.width);
    let card_height = card::card_height(quote, width);
    let content = centered_rect(area, width, card_height + 2);
    model.ui.hit_areas.random_overlay = Some(content);

    let card_area = Rect {
        height: content.height.saturating_sub(2),
        ..content
    };
    f.render_widget(Clear, content);
    let copied = model.copy_acks.is_copied(quote.id, now);
    card::render_card(f, card_area, quote, true, copied, &mut model.ui.hit_areas);

    if content.height >= 2 {
        let close_width = display_width(CLOSE_LABEL) as u16;
        let close = Rect {
            x: content.x + content.width.saturating_sub(close_width) / 2,
            y: content.bottom() - 1,
            width: close_width.min(content.width),
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                CLOSE_LABEL,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )),
            close,
        );
        model.ui.hit_areas.close_random_button = Some(close);
    }
}

/// Render the share overlay and capture the drawn card as the export target
///
/// When the terminal is too small for the card, nothing is captured and
/// `share_target` is left empty.
pub fn render_share_overlay(f: &mut Frame, area: Rect, model: &mut Model, quote: &Quote) {
    dim_backdrop(f, area);

    let card_height = share_card_height(quote).max(SHARE_CARD_MIN_HEIGHT);
    // toolbar + card + blank + hint (+ status)
    let content = centered_rect(area, SHARE_CARD_WIDTH + 2, card_height + 4);
    model.ui.hit_areas.share_overlay = Some(content);
    f.render_widget(Clear, content);

    // Toolbar: download + close, right-aligned
    let close_width = display_width(CLOSE_ICON) as u16;
    let download_width = display_width(DOWNLOAD_LABEL) as u16;
    if content.width >= close_width + download_width + 1 && content.height > 0 {
        let close = Rect {
            x: content.right() - close_width,
            y: content.y,
            width: close_width,
            height: 1,
        };
        let download = Rect {
            x: close.x - 1 - download_width,
            y: content.y,
            width: download_width,
            height: 1,
        };
        let toolbar_style = Style::default().fg(Color::White).bg(Color::DarkGray);
        f.render_widget(Paragraph::new(Span::styled(DOWNLOAD_LABEL, toolbar_style)), download);
        f.render_widget(Paragraph::new(Span::styled(CLOSE_ICON, toolbar_style)), close);
        model.ui.hit_areas.download_button = Some(download);
        model.ui.hit_areas.close_share_button = Some(close);
    }

    let card_area = Rect {
        x: content.x + 1,
        y: content.y + 1,
        width: SHARE_CARD_WIDTH,
        height: card_height,
    };

    let fits = card_area.right() <= area.right()
        && card_area.bottom() <= area.bottom()
        && content.width >= SHARE_CARD_WIDTH + 2;
    if !fits {
        model.ui.share_target = None;
        let msg = Paragraph::new("Terminal too small for share card")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(
            msg,
            Rect {
                y: content.y + content.height / 2,
                height: 1,
                ..content
            },
        );
        return;
    }

    render_share_card(f, card_area, quote);
    model.ui.share_target = RenderTarget::capture(f.buffer_mut(), card_area);

    let hint = if model.ui.exports_in_flight > 0 {
        "保存中… Saving".to_string()
    } else {
        SHARE_HINT.to_string()
    };
    let hint_area = Rect {
        y: card_area.bottom() + 1,
        height: 1,
        ..content
    };
    if hint_area.bottom() <= area.bottom() {
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(theme::MUTED)))
                .alignment(Alignment::Center),
            hint_area,
        );
    }
}

/// Rows needed by the share card body for `quote`
pub fn share_card_height(quote: &Quote) -> u16 {
    let inner = (SHARE_CARD_WIDTH - 8) as usize;
    let text = wrap_text(&format!("“{}”", quote.text), inner).len() as u16;
    let source = wrap_text(&quote.source, inner).len() as u16;
    let year = u16::from(quote.year.is_some());
    // borders(4) + corners(2) + avatar(2) + text + gap + rule + source + year
    4 + 2 + 2 + text + 1 + 1 + source + year
}

/// Draw the playing-card styled share card
pub fn render_share_card(f: &mut Frame, area: Rect, quote: &Quote) {
    let paper = Style::default().bg(theme::PAPER).fg(theme::INK);
    let red = Style::default().bg(theme::PAPER).fg(theme::CHINA_RED);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().bg(theme::PAPER).fg(theme::MUTED))
        .style(paper);
    let inner_frame = outer.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(outer, area);

    let inner_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().bg(theme::PAPER).fg(theme::RED_FAINT))
        .style(paper);
    let body = inner_block.inner(inner_frame);
    f.render_widget(inner_block, inner_frame);

    if body.width < 4 || body.height < 4 {
        return;
    }

    // Corner indices
    let corner = Style::default()
        .bg(theme::PAPER)
        .fg(theme::CHINA_RED)
        .add_modifier(Modifier::BOLD);
    f.render_widget(
        Paragraph::new(vec![Line::from(Span::styled("M", corner)), Line::from(Span::styled("★", corner))]),
        Rect { width: 1, height: 2, ..body },
    );
    f.render_widget(
        Paragraph::new(vec![Line::from(Span::styled("★", corner)), Line::from(Span::styled("M", corner))]),
        Rect {
            x: body.right() - 1,
            y: body.bottom() - 2,
            width: 1,
            height: 2,
        },
    );

    let text_width = body.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        " 毛语 ",
        Style::default()
            .bg(theme::PAPER)
            .fg(theme::CHINA_RED)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    )));
    lines.push(Line::from(""));
    for line in wrap_text(&format!("“{}”", quote.text), text_width) {
        lines.push(Line::from(Span::styled(
            line,
            paper.add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("────", red)));
    for line in wrap_text(&quote.source, text_width) {
        lines.push(Line::from(Span::styled(line, red)));
    }
    if let Some(year) = &quote.year {
        lines.push(Line::from(Span::styled(year.clone(), Style::default().bg(theme::PAPER).fg(theme::MUTED))));
    }

    let content_height = (lines.len() as u16).min(body.height.saturating_sub(2));
    let content_area = Rect {
        x: body.x + 2,
        y: body.y + 1 + body.height.saturating_sub(2).saturating_sub(content_height) / 2,
        width: body.width.saturating_sub(4),
        height: content_height,
    };
    f.render_widget(
        Paragraph::new(lines).style(paper).alignment(Alignment::Center),
        content_area,
    );
}

/// Render the keyboard help overlay
pub fn render_help(f: &mut Frame, area: Rect, vim_mode: bool) {
    dim_backdrop(f, area);

    let nav = if vim_mode { "hjkl / ←↑↓→" } else { "←↑↓→" };
    let rows: Vec<(&str, &str)> = vec![
        (nav, "Move between cards"),
        ("Home / End", "First / last card"),
        ("PgUp / PgDn", "Scroll one screen of cards"),
        ("Tab / Shift-Tab", "Next / previous category"),
        ("0-5", "Jump to category (0 = 全部)"),
        ("r", "Random quotation"),
        ("c", "Copy selected quotation"),
        ("s / Enter", "Share selected quotation"),
        ("d", "Download share card (share overlay)"),
        ("Esc", "Close overlay"),
        ("Mouse", "Click tabs, cards and buttons"),
        ("q", "Quit"),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();

    let help_area = centered_rect(area, 56, lines.len() as u16 + 2);
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keys (? to close)")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, help_area);
    f.render_widget(help, help_area);
}
