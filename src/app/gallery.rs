//! Gallery actions
//!
//! Category switching, random picks and overlay closing.

use quotui::logic::grid::GridMove;
use quotui::quotes::CategoryFilter;

use crate::App;

impl App {
    /// Switch the category filter (selection resets to the first card)
    pub(crate) fn select_category(&mut self, filter: CategoryFilter) {
        if filter != self.model.gallery.filter {
            tracing::debug!("Category filter -> {}", filter.id());
        }
        self.model.gallery.set_category(filter);
    }

    /// Step through the category tabs, wrapping at both ends
    pub(crate) fn cycle_category(&mut self, forward: bool) {
        let count = CategoryFilter::TABS.len();
        let current = self.model.gallery.filter.tab_index();
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.select_category(CategoryFilter::TABS[next]);
    }

    /// Pick a random quotation from the full set and show it
    pub(crate) fn open_random(&mut self) {
        let quote = self.model.gallery.pick_random(&mut self.rng);
        tracing::debug!("Random pick: quote {}", quote.id);
    }

    pub(crate) fn move_selection(&mut self, dir: GridMove) {
        let columns = self.model.ui.grid_columns;
        self.model.gallery.move_selection(dir, columns);
    }

    /// Move the selection by one screen of card rows
    pub(crate) fn page_selection(&mut self, forward: bool) {
        let dir = if forward { GridMove::Down } else { GridMove::Up };
        for _ in 0..self.model.ui.grid_visible_rows.max(1) {
            self.move_selection(dir);
        }
    }

    /// Close help, share or random, whichever is on top
    pub(crate) fn close_topmost(&mut self) -> bool {
        self.model.close_topmost()
    }
}
