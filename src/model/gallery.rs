//! Gallery Model
//!
//! This sub-model owns the quotation set and the selection state built on top
//! of it: the active category filter, the highlighted card, and the two
//! overlay picks (random and share).

use rand::Rng;

use crate::logic;
use crate::logic::grid::GridMove;
use crate::quotes::{CategoryFilter, Quote, QuoteId, QuoteSet};

/// Quotation set plus the gallery's selection state
#[derive(Clone, Debug)]
pub struct GalleryModel {
    /// Immutable quotation set (shared, never mutated)
    pub quotes: QuoteSet,

    /// Active category filter
    pub filter: CategoryFilter,

    /// Quotation shown in the random-pick overlay
    pub random_pick: Option<QuoteId>,

    /// Quotation shown in the share/export overlay
    pub share_pick: Option<QuoteId>,

    /// Highlighted card, as an index into the visible list
    pub selected: usize,

    /// First grid row on screen
    pub scroll_row: usize,
}

impl GalleryModel {
    pub fn new(quotes: QuoteSet) -> Self {
        Self {
            quotes,
            filter: CategoryFilter::All,
            random_pick: None,
            share_pick: None,
            selected: 0,
            scroll_row: 0,
        }
    }

    /// Replace the active filter and reset the card selection
    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.selected = 0;
        self.scroll_row = 0;
    }

    /// Quotations matching the active filter, in original order
    pub fn visible(&self) -> Vec<&Quote> {
        logic::filter::filter_quotes(self.quotes.as_slice(), self.filter)
    }

    /// Currently highlighted card (None when the filtered list is empty)
    pub fn selected_quote(&self) -> Option<&Quote> {
        let visible = self.visible();
        let idx = self.selected.min(visible.len().saturating_sub(1));
        visible.get(idx).copied()
    }

    /// Highlight a card by visible index, clamped to the visible list
    pub fn select(&mut self, index: usize) {
        let len = self.visible().len();
        self.selected = index.min(len.saturating_sub(1));
    }

    /// Move the highlight within a grid of `columns` columns
    pub fn move_selection(&mut self, dir: GridMove, columns: usize) {
        let len = self.visible().len();
        if let Some(next) = logic::grid::move_selection(self.selected, len, columns, dir) {
            self.selected = next;
        }
    }

    /// Pick a quotation uniformly from the full, unfiltered set
    ///
    /// The active filter does not apply; every quotation is a candidate.
    pub fn pick_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Quote {
        let idx = rng.gen_range(0..self.quotes.len());
        let quote = &self.quotes.as_slice()[idx];
        self.random_pick = Some(quote.id);
        quote
    }

    /// Open the share overlay for `id`
    ///
    /// Returns false (and leaves state alone) if `id` is not in the set.
    pub fn request_share(&mut self, id: QuoteId) -> bool {
        if self.quotes.find(id).is_none() {
            return false;
        }
        self.share_pick = Some(id);
        true
    }

    pub fn close_random(&mut self) {
        self.random_pick = None;
    }

    pub fn close_share(&mut self) {
        self.share_pick = None;
    }

    /// Close the topmost overlay (share above random)
    ///
    /// Returns false when no overlay was open.
    pub fn close_topmost(&mut self) -> bool {
        if self.share_pick.is_some() {
            self.close_share();
            true
        } else if self.random_pick.is_some() {
            self.close_random();
            true
        } else {
            false
        }
    }

    pub fn random_quote(&self) -> Option<&Quote> {
        self.random_pick.and_then(|id| self.quotes.find(id))
    }

    pub fn share_quote(&self) -> Option<&Quote> {
        self.share_pick.and_then(|id| self.quotes.find(id))
    }

    pub fn has_overlay(&self) -> bool {
        self.random_pick.is_some() || self.share_pick.is_some()
    }

    /// Filename for exporting the current share pick
    pub fn export_filename(&self) -> String {
        logic::format::export_filename(self.share_pick)
    }
}
