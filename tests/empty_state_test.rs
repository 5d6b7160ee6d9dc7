//! Empty filtered result shows an explicit indicator
//!
//! A category with no quotations must render 暂无相关语录 instead of a blank
//! grid.

use std::time::Instant;

use ratatui::{backend::TestBackend, Terminal};

use quotui::model::Model;
use quotui::quotes::{Category, CategoryFilter, Quote, QuoteSet};
use quotui::ui::{self, gallery::EMPTY_STATE_TEXT};

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn work_only() -> QuoteSet {
    QuoteSet::new(vec![Quote {
        id: 1,
        text: "A".to_string(),
        source: "S1".to_string(),
        category: Category::Work,
        year: None,
    }])
    .unwrap()
}

/// Wide chars are followed by a blank cell in the buffer; drop those
fn squash(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

#[test]
fn test_empty_category_renders_indicator() {
    let mut model = Model::new(work_only(), false);
    model.gallery.set_category(CategoryFilter::Only(Category::Youth));

    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|f| ui::render(f, &mut model, Instant::now()))
        .unwrap();

    let screen = squash(&screen_text(&terminal));
    assert!(screen.contains(EMPTY_STATE_TEXT), "empty state missing:\n{}", screen);
    assert!(model.ui.hit_areas.cards.is_empty());
}

#[test]
fn test_non_empty_category_has_no_indicator() {
    let mut model = Model::new(work_only(), false);
    model.gallery.set_category(CategoryFilter::Only(Category::Work));

    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|f| ui::render(f, &mut model, Instant::now()))
        .unwrap();

    let screen = squash(&screen_text(&terminal));
    assert!(!screen.contains(EMPTY_STATE_TEXT));
    assert_eq!(model.ui.hit_areas.cards.len(), 1);
}
