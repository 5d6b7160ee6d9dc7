//! Copy acknowledgment timing
//!
//! A second copy inside the 2s window keeps the ✓ visible but does not move
//! its deadline; 2s after the first copy it reverts exactly once.

use std::time::{Duration, Instant};

use ratatui::{backend::TestBackend, Terminal};

use quotui::model::Model;
use quotui::quotes::QuoteSet;
use quotui::ui;

fn draw_contains(model: &mut Model, now: Instant, needle: &str) -> bool {
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    terminal.draw(|f| ui::render(f, model, now)).unwrap();
    let buffer = terminal.backend().buffer();
    let text: String = buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .filter(|s| *s != " ")
        .collect();
    text.contains(needle)
}

#[test]
fn test_ack_shows_on_card_and_reverts_once() {
    let mut model = Model::new(QuoteSet::builtin().unwrap(), false);
    let id = model.gallery.selected_quote().unwrap().id;

    let t0 = Instant::now();
    assert!(!draw_contains(&mut model, t0, "已复制"));

    model.copy_acks.mark(id, t0);
    assert!(draw_contains(&mut model, t0 + Duration::from_millis(500), "已复制"));

    // Re-copy at 1.5s: still showing right after it
    let t1 = t0 + Duration::from_millis(1500);
    model.copy_acks.mark(id, t1);
    assert!(model.copy_acks.expire(t1).is_empty());
    assert!(draw_contains(&mut model, t1, "已复制"));

    // Gone 2s after the first copy, not the second
    let t2 = t0 + Duration::from_millis(2500);
    assert!(!draw_contains(&mut model, t2, "已复制"));
    assert_eq!(model.copy_acks.expire(t2), vec![id]);
    assert!(model.copy_acks.expire(t2).is_empty());
}
