use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Which set of hotkeys applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendContext {
    Gallery,
    RandomOverlay,
    ShareOverlay,
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, context: LegendContext) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let mut hotkey_spans = vec![];

    match context {
        LegendContext::Gallery => {
            if vim_mode {
                hotkey_spans.extend(vec![key("hjkl"), Span::raw(":Nav  ")]);
            } else {
                hotkey_spans.extend(vec![key("←↑↓→"), Span::raw(":Nav  ")]);
            }
            hotkey_spans.extend(vec![
                key("Tab"),
                Span::raw(":Category  "),
                key("r"),
                Span::raw(":Random  "),
                key("c"),
                Span::raw(":Copy  "),
                key("s"),
                Span::raw(":Share  "),
            ]);
        }
        LegendContext::RandomOverlay => {
            hotkey_spans.extend(vec![
                key("r"),
                Span::raw(":Another  "),
                key("c"),
                Span::raw(":Copy  "),
                key("s"),
                Span::raw(":Share  "),
                key("Esc"),
                Span::raw(":Close  "),
            ]);
        }
        LegendContext::ShareOverlay => {
            hotkey_spans.extend(vec![
                key("d"),
                Span::raw(":Save PNG  "),
                key("Esc"),
                Span::raw(":Close  "),
            ]);
        }
    }

    // Help and quit - always available
    hotkey_spans.extend(vec![key("?"), Span::raw(":Help  "), key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Render the one-line hotkey legend with a status note on the right
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, context: LegendContext, status: &str) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, context)))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);

    let status_width = crate::logic::format::display_width(status) as u16;
    if status_width > 0 && status_width < area.width {
        let status_area = Rect {
            x: area.right() - status_width,
            width: status_width,
            ..area
        };
        f.render_widget(
            Paragraph::new(Span::styled(status.to_string(), Style::default().fg(Color::DarkGray))),
            status_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_gallery_legend_nav_keys() {
        assert!(text(&build_hotkey_spans(false, LegendContext::Gallery)).contains("←↑↓→:Nav"));
        assert!(text(&build_hotkey_spans(true, LegendContext::Gallery)).contains("hjkl:Nav"));
    }

    #[test]
    fn test_share_legend_has_download() {
        let legend = text(&build_hotkey_spans(false, LegendContext::ShareOverlay));
        assert!(legend.contains("d:Save PNG"));
        assert!(!legend.contains("Random"));
    }

    #[test]
    fn test_quit_always_present() {
        for ctx in [LegendContext::Gallery, LegendContext::RandomOverlay, LegendContext::ShareOverlay] {
            assert!(text(&build_hotkey_spans(false, ctx)).ends_with("q:Quit"));
        }
    }
}
