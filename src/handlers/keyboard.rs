//! Keyboard Input Handler
//!
//! Keys are dispatched by the topmost layer: help, share overlay, random
//! overlay, then the gallery itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use quotui::logic::grid::GridMove;
use quotui::quotes::CategoryFilter;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.model.ui.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.model.ui.show_help = true;
            return;
        }
        KeyCode::Esc => {
            app.close_topmost();
            return;
        }
        _ => {}
    }

    if app.model.gallery.share_pick.is_some() {
        handle_share_key(app, key);
    } else if app.model.gallery.random_pick.is_some() {
        handle_random_key(app, key);
    } else {
        handle_gallery_key(app, key);
    }
}

fn handle_share_key(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('d') | KeyCode::Enter = key.code {
        app.download_share_card();
    }
}

fn handle_random_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.open_random(),
        KeyCode::Char('c') => app.copy_current(),
        KeyCode::Char('s') | KeyCode::Enter => app.share_current(),
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;

    if let Some(dir) = grid_move(key.code, vim) {
        app.move_selection(dir);
        return;
    }

    match key.code {
        KeyCode::PageDown => app.page_selection(true),
        KeyCode::PageUp => app.page_selection(false),
        KeyCode::Tab => app.cycle_category(true),
        KeyCode::BackTab => app.cycle_category(false),
        KeyCode::Char(c @ '0'..='5') => {
            let idx = c as usize - '0' as usize;
            app.select_category(CategoryFilter::TABS[idx]);
        }
        KeyCode::Char('r') => app.open_random(),
        KeyCode::Char('c') => app.copy_current(),
        KeyCode::Char('s') | KeyCode::Enter => app.share_current(),
        _ => {}
    }
}

/// Map a key to a grid movement (hjkl only in vim mode)
fn grid_move(code: KeyCode, vim: bool) -> Option<GridMove> {
    match code {
        KeyCode::Left => Some(GridMove::Left),
        KeyCode::Right => Some(GridMove::Right),
        KeyCode::Up => Some(GridMove::Up),
        KeyCode::Down => Some(GridMove::Down),
        KeyCode::Home => Some(GridMove::First),
        KeyCode::End => Some(GridMove::Last),
        KeyCode::Char('h') if vim => Some(GridMove::Left),
        KeyCode::Char('l') if vim => Some(GridMove::Right),
        KeyCode::Char('k') if vim => Some(GridMove::Up),
        KeyCode::Char('j') if vim => Some(GridMove::Down),
        KeyCode::Char('g') if vim => Some(GridMove::First),
        KeyCode::Char('G') if vim => Some(GridMove::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{harness, harness_with, RecordingClipboard};
    use quotui::export::RenderTarget;
    use quotui::quotes::Category;
    use quotui::services::ExportRequest;
    use ratatui::{buffer::Buffer, layout::Rect};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn captured_card() -> RenderTarget {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 8, 2));
        buffer.set_string(0, 0, "card", ratatui::style::Style::default());
        RenderTarget::capture(&buffer, buffer.area).unwrap()
    }

    #[test]
    fn test_number_keys_select_category() {
        let mut h = harness();
        press(&mut h.app, KeyCode::Char('1'));
        assert_eq!(h.app.model.gallery.filter, CategoryFilter::Only(Category::Work));
        let ids: Vec<u32> = h.app.model.gallery.visible().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);

        press(&mut h.app, KeyCode::Char('0'));
        assert_eq!(h.app.model.gallery.filter, CategoryFilter::All);
    }

    #[test]
    fn test_tab_cycles_and_wraps() {
        let mut h = harness();
        press(&mut h.app, KeyCode::BackTab);
        assert_eq!(h.app.model.gallery.filter, CategoryFilter::Only(Category::Revolution));
        press(&mut h.app, KeyCode::Tab);
        assert_eq!(h.app.model.gallery.filter, CategoryFilter::All);
    }

    #[test]
    fn test_copy_writes_clipboard_and_acks() {
        let mut h = harness();
        press(&mut h.app, KeyCode::Right);
        press(&mut h.app, KeyCode::Char('c'));
        assert_eq!(h.clipboard.writes.borrow().as_slice(), ["Q2 —— S2"]);
        assert!(h.app.model.copy_acks.is_copied(2, std::time::Instant::now()));
    }

    #[test]
    fn test_clipboard_failure_still_acks() {
        let mut h = harness_with(RecordingClipboard {
            fail: true,
            ..Default::default()
        });
        press(&mut h.app, KeyCode::Char('c'));
        assert!(h.clipboard.writes.borrow().is_empty());
        assert!(h.app.model.copy_acks.is_copied(1, std::time::Instant::now()));
        assert!(h.app.model.ui.toast_message.is_none());
    }

    #[test]
    fn test_hjkl_only_in_vim_mode() {
        let mut h = harness();
        press(&mut h.app, KeyCode::Char('l'));
        assert_eq!(h.app.model.gallery.selected, 0);

        h.app.model.ui.vim_mode = true;
        press(&mut h.app, KeyCode::Char('l'));
        assert_eq!(h.app.model.gallery.selected, 1);
    }

    #[test]
    fn test_page_keys_move_by_visible_rows() {
        let mut h = harness();
        h.app.model.ui.grid_columns = 1;
        h.app.model.ui.grid_visible_rows = 2;

        press(&mut h.app, KeyCode::PageDown);
        assert_eq!(h.app.model.gallery.selected, 2);

        // Clamps at the last card
        press(&mut h.app, KeyCode::PageDown);
        assert_eq!(h.app.model.gallery.selected, 2);

        press(&mut h.app, KeyCode::PageUp);
        assert_eq!(h.app.model.gallery.selected, 0);
    }

    #[test]
    fn test_random_then_share_then_escape() {
        let mut h = harness();
        press(&mut h.app, KeyCode::Char('r'));
        let picked = h.app.model.gallery.random_pick.expect("random pick");

        press(&mut h.app, KeyCode::Char('s'));
        assert_eq!(h.app.model.gallery.share_pick, Some(picked));

        // Share closes first, random stays underneath
        press(&mut h.app, KeyCode::Esc);
        assert!(h.app.model.gallery.share_pick.is_none());
        assert_eq!(h.app.model.gallery.random_pick, Some(picked));

        press(&mut h.app, KeyCode::Esc);
        assert!(h.app.model.gallery.random_pick.is_none());
    }

    #[test]
    fn test_download_sends_captured_card() {
        let mut h = harness();
        press(&mut h.app, KeyCode::Char('2'));
        press(&mut h.app, KeyCode::Enter);
        assert_eq!(h.app.model.gallery.share_pick, Some(2));

        h.app.model.ui.share_target = Some(captured_card());
        press(&mut h.app, KeyCode::Char('d'));

        match h.requests.try_recv().unwrap() {
            ExportRequest::SaveCard { target, filename } => {
                assert_eq!(filename, "mao-quote-2.png");
                assert_eq!(target.unwrap().text_lines()[0], "card");
            }
        }
        assert_eq!(h.app.model.ui.exports_in_flight, 1);
    }

    #[test]
    fn test_download_without_card_writes_nothing() {
        let mut h = harness();
        press(&mut h.app, KeyCode::Char('s'));
        press(&mut h.app, KeyCode::Char('d'));

        assert!(h.requests.try_recv().is_err());
        let (msg, _) = h.app.model.ui.toast_message.clone().unwrap();
        assert_eq!(msg, "Error: share card is not on screen");
        assert_eq!(h.app.model.ui.exports_in_flight, 0);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut h = harness();
        press(&mut h.app, KeyCode::Char('?'));
        press(&mut h.app, KeyCode::Char('r'));
        assert!(h.app.model.gallery.random_pick.is_none());
        press(&mut h.app, KeyCode::Esc);
        assert!(!h.app.model.ui.show_help);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut h = harness();
        handle_key(&mut h.app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(h.app.model.ui.should_quit);
        assert!(h.clipboard.writes.borrow().is_empty());
    }
}
