use ratatui::Frame;
use std::time::Instant;

use super::{footer, gallery, header, layout, legend, overlays, toast};
use crate::logic::filter::count_by_tab;
use crate::model::Model;

/// Main render function - orchestrates all UI rendering
///
/// Hit areas are rebuilt from scratch every frame; mouse handling reads
/// whatever the last frame recorded.
pub fn render(f: &mut Frame, model: &mut Model, now: Instant) {
    let size = f.area();
    model.ui.hit_areas.clear();

    let layout_info = layout::calculate_layout(size);

    let tab_counts = count_by_tab(model.gallery.quotes.as_slice());
    header::render_header(f, layout_info.header_area, model, &tab_counts);
    gallery::render_gallery(f, layout_info.gallery_area, model, now);
    footer::render_footer(f, layout_info.footer_area);

    let context = if model.gallery.share_pick.is_some() {
        legend::LegendContext::ShareOverlay
    } else if model.gallery.random_pick.is_some() {
        legend::LegendContext::RandomOverlay
    } else {
        legend::LegendContext::Gallery
    };
    let status = format!(
        "{} {} ",
        model.gallery.filter.label(),
        tab_counts[model.gallery.filter.tab_index()]
    );
    legend::render_legend(f, layout_info.legend_area, model.ui.vim_mode, context, &status);

    // Overlays stack: random below share, help on top
    if let Some(quote) = model.gallery.random_quote().cloned() {
        overlays::render_random_overlay(f, size, model, &quote, now);
    }

    match model.gallery.share_quote().cloned() {
        Some(quote) => overlays::render_share_overlay(f, size, model, &quote),
        None => model.ui.share_target = None,
    }

    if model.ui.show_help {
        overlays::render_help(f, size, model.ui.vim_mode);
    }

    // Render toast notification if active (on top of everything)
    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::{Category, CategoryFilter, Quote, QuoteSet};
    use ratatui::{backend::TestBackend, Terminal};

    fn model() -> Model {
        let quotes = QuoteSet::new(vec![
            Quote {
                id: 1,
                text: "A".to_string(),
                source: "S1".to_string(),
                category: Category::Work,
                year: None,
            },
            Quote {
                id: 2,
                text: "B".to_string(),
                source: "S2".to_string(),
                category: Category::Study,
                year: Some("1938".to_string()),
            },
        ])
        .unwrap();
        Model::new(quotes, false)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_share_overlay_captures_target() {
        let mut model = model();
        assert!(model.gallery.request_share(2));

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, &mut model, Instant::now())).unwrap();

        let target = model.ui.share_target.as_ref().expect("card captured");
        let text = target.text_lines().join("\n");
        assert!(text.contains("S2"));
        assert!(model.ui.hit_areas.download_button.is_some());
    }

    #[test]
    fn test_closing_share_drops_target() {
        let mut model = model();
        model.gallery.request_share(1);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, &mut model, Instant::now())).unwrap();
        assert!(model.ui.share_target.is_some());

        model.gallery.close_share();
        terminal.draw(|f| render(f, &mut model, Instant::now())).unwrap();
        assert!(model.ui.share_target.is_none());
    }

    #[test]
    fn test_tiny_terminal_has_no_target() {
        let mut model = model();
        model.gallery.request_share(1);
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        terminal.draw(|f| render(f, &mut model, Instant::now())).unwrap();
        assert!(model.ui.share_target.is_none());
    }

    #[test]
    fn test_tabs_recorded() {
        let mut model = model();
        model.gallery.set_category(CategoryFilter::Only(Category::Study));
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, &mut model, Instant::now())).unwrap();

        assert_eq!(model.ui.hit_areas.tabs.len(), 6);
        assert_eq!(model.ui.hit_areas.cards.len(), 1);
        assert!(screen(&terminal).contains("S2"));
    }

    #[test]
    fn test_footer_motto_on_screen() {
        let mut model = model();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &mut model, Instant::now())).unwrap();

        let row: String = (0..80)
            .map(|x| terminal.backend().buffer()[(x, 22)].symbol().to_string())
            .filter(|s| s != " ")
            .collect();
        assert_eq!(row, "好好学习·天天向上");
    }
}
