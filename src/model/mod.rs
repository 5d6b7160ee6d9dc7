//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **GalleryModel**: quotation set, category filter, overlay picks
//! - **CopyAcks**: per-card "copied" acknowledgments
//! - **UiModel**: preferences, toasts, last-frame geometry
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: clipboard, export and randomness live in the runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod card;
pub mod gallery;
pub mod ui;

pub use card::CopyAcks;
pub use gallery::GalleryModel;
pub use ui::{HitAreas, UiModel};

use crate::quotes::QuoteSet;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Quotations and selection state
    pub gallery: GalleryModel,

    /// Copy acknowledgments per card
    pub copy_acks: CopyAcks,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model over a loaded quotation set
    pub fn new(quotes: QuoteSet, vim_mode: bool) -> Self {
        Self {
            gallery: GalleryModel::new(quotes),
            copy_acks: CopyAcks::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Check if any overlay is showing
    pub fn has_modal(&self) -> bool {
        self.gallery.has_overlay() || self.ui.show_help
    }

    /// Close the share overlay and forget its captured card
    pub fn close_share(&mut self) {
        self.gallery.close_share();
        self.ui.share_target = None;
    }

    /// Close the topmost overlay: help, then share, then random
    pub fn close_topmost(&mut self) -> bool {
        if self.ui.show_help {
            self.ui.show_help = false;
            return true;
        }
        if self.gallery.share_pick.is_some() {
            self.close_share();
            return true;
        }
        self.gallery.close_topmost()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model::new(QuoteSet::builtin().unwrap(), false)
    }

    #[test]
    fn test_model_creation() {
        let model = model();
        assert!(!model.gallery.quotes.is_empty());
        assert!(!model.has_modal());
        assert!(!model.ui.vim_mode);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = model();
        let _cloned = model.clone();
    }

    #[test]
    fn test_close_share_drops_target() {
        let mut model = model();
        let id = model.gallery.quotes.get(0).unwrap().id;
        model.gallery.request_share(id);
        model.ui.share_target = Some(crate::export::RenderTarget::capture(
            &ratatui::buffer::Buffer::empty(ratatui::layout::Rect::new(0, 0, 2, 2)),
            ratatui::layout::Rect::new(0, 0, 2, 2),
        )
        .unwrap());

        model.close_share();
        assert!(model.gallery.share_pick.is_none());
        assert!(model.ui.share_target.is_none());
    }

    #[test]
    fn test_close_topmost_help_first() {
        let mut model = model();
        let id = model.gallery.quotes.get(0).unwrap().id;
        model.gallery.request_share(id);
        model.ui.show_help = true;

        assert!(model.close_topmost());
        assert!(!model.ui.show_help);
        assert!(model.gallery.share_pick.is_some());

        assert!(model.close_topmost());
        assert!(model.gallery.share_pick.is_none());
        assert!(!model.close_topmost());
    }
}
