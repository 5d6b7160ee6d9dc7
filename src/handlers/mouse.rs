//! Mouse Input Handler
//!
//! Clicks are resolved against the hit areas recorded by the last frame.
//! Overlays are modal: while one is open, only its own buttons respond and a
//! click on the backdrop closes it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use quotui::logic::grid::GridMove;
use quotui::logic::overlay::{click_closes_overlay, contains};
use quotui::quotes::QuoteId;

use crate::App;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, mouse.column, mouse.row),
        MouseEventKind::ScrollDown if !app.model.has_modal() => app.move_selection(GridMove::Down),
        MouseEventKind::ScrollUp if !app.model.has_modal() => app.move_selection(GridMove::Up),
        _ => {}
    }
}

fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|r| contains(r, column, row))
}

/// Topmost button under the cursor (later entries are drawn on top)
fn button_at(buttons: &[(QuoteId, Rect)], column: u16, row: u16, within: Option<Rect>) -> Option<QuoteId> {
    buttons
        .iter()
        .rev()
        .filter(|(_, r)| within.map_or(true, |w| contains(w, r.x, r.y)))
        .find(|(_, r)| contains(*r, column, row))
        .map(|(id, _)| *id)
}

fn handle_click(app: &mut App, column: u16, row: u16) {
    let hits = app.model.ui.hit_areas.clone();

    if app.model.ui.show_help {
        app.model.ui.show_help = false;
        return;
    }

    if let Some(content) = hits.share_overlay {
        if hit(hits.download_button, column, row) {
            app.download_share_card();
        } else if hit(hits.close_share_button, column, row) || click_closes_overlay(content, column, row) {
            app.model.close_share();
        }
        return;
    }

    if let Some(content) = hits.random_overlay {
        if hit(hits.close_random_button, column, row) || click_closes_overlay(content, column, row) {
            app.model.gallery.close_random();
        } else if let Some(id) = button_at(&hits.copy_buttons, column, row, Some(content)) {
            app.copy_quote(id);
        } else if let Some(id) = button_at(&hits.share_buttons, column, row, Some(content)) {
            app.share_quote(id);
        }
        return;
    }

    if let Some((filter, _)) = hits.tabs.iter().find(|(_, r)| contains(*r, column, row)) {
        app.select_category(*filter);
    } else if hit(hits.random_button, column, row) {
        app.open_random();
    } else if let Some(id) = button_at(&hits.copy_buttons, column, row, None) {
        app.copy_quote(id);
    } else if let Some(id) = button_at(&hits.share_buttons, column, row, None) {
        app.share_quote(id);
    } else if let Some((idx, _)) = hits.cards.iter().find(|(_, r)| contains(*r, column, row)) {
        app.model.gallery.select(*idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::harness;
    use crossterm::event::KeyModifiers;
    use quotui::quotes::{Category, CategoryFilter};
    use quotui::ui;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn click(app: &mut App, column: u16, row: u16) {
        handle_mouse(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| ui::render(f, &mut app.model, Instant::now()))
            .unwrap();
    }

    fn center(r: Rect) -> (u16, u16) {
        (r.x + r.width / 2, r.y + r.height / 2)
    }

    #[test]
    fn test_click_tab_filters() {
        let mut h = harness();
        draw(&mut h.app);
        let (_, rect) = h.app.model.ui.hit_areas.tabs[2];
        let (x, y) = center(rect);
        click(&mut h.app, x, y);
        assert_eq!(h.app.model.gallery.filter, CategoryFilter::Only(Category::Study));
    }

    #[test]
    fn test_click_copy_button_on_card() {
        let mut h = harness();
        draw(&mut h.app);
        let (id, rect) = h.app.model.ui.hit_areas.copy_buttons[1];
        let (x, y) = center(rect);
        click(&mut h.app, x, y);
        assert_eq!(h.clipboard.writes.borrow().len(), 1);
        assert!(h.app.model.copy_acks.is_copied(id, Instant::now()));
    }

    #[test]
    fn test_backdrop_click_closes_random_inside_does_not() {
        let mut h = harness();
        h.app.open_random();
        draw(&mut h.app);
        let content = h.app.model.ui.hit_areas.random_overlay.unwrap();

        // Inside the card body, away from buttons
        click(&mut h.app, content.x + 1, content.y + content.height / 2);
        assert!(h.app.model.gallery.random_pick.is_some());

        click(&mut h.app, 0, 0);
        assert!(h.app.model.gallery.random_pick.is_none());
    }

    #[test]
    fn test_share_overlay_close_button() {
        let mut h = harness();
        h.app.share_quote(3);
        draw(&mut h.app);
        assert!(h.app.model.ui.share_target.is_some());

        let (x, y) = center(h.app.model.ui.hit_areas.close_share_button.unwrap());
        click(&mut h.app, x, y);
        assert!(h.app.model.gallery.share_pick.is_none());
        assert!(h.app.model.ui.share_target.is_none());
    }

    #[test]
    fn test_share_overlay_download_button() {
        let mut h = harness();
        h.app.share_quote(3);
        draw(&mut h.app);

        let (x, y) = center(h.app.model.ui.hit_areas.download_button.unwrap());
        click(&mut h.app, x, y);
        assert!(h.requests.try_recv().is_ok());
        // Overlay stays open while saving
        assert_eq!(h.app.model.gallery.share_pick, Some(3));
    }
}
