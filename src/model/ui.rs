//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, toasts, and the screen geometry recorded by the last frame
//! (needed for mouse hit testing and share-card capture).

use ratatui::layout::Rect;
use std::time::Instant;

use crate::export::RenderTarget;
use crate::quotes::{CategoryFilter, QuoteId};

/// Clickable regions recorded while rendering
#[derive(Clone, Debug, Default)]
pub struct HitAreas {
    /// Category tabs in the header
    pub tabs: Vec<(CategoryFilter, Rect)>,

    /// "Random" button in the header
    pub random_button: Option<Rect>,

    /// Gallery cards: (visible index, card area)
    pub cards: Vec<(usize, Rect)>,

    /// Content box of the random-pick overlay
    pub random_overlay: Option<Rect>,

    /// Content box of the share overlay
    pub share_overlay: Option<Rect>,

    /// Copy/share buttons inside cards: (quote id, area)
    pub copy_buttons: Vec<(QuoteId, Rect)>,
    pub share_buttons: Vec<(QuoteId, Rect)>,

    /// Download/close buttons of the share overlay
    pub download_button: Option<Rect>,
    pub close_share_button: Option<Rect>,

    /// Close button of the random overlay
    pub close_random_button: Option<Rect>,
}

impl HitAreas {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // POPUPS
    // ============================================
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Keyboard help overlay
    pub show_help: bool,

    // ============================================
    // FRAME STATE
    // ============================================
    /// Share card as drawn on the last frame (None if it was not drawn)
    pub share_target: Option<RenderTarget>,

    /// Regions recorded by the last frame
    pub hit_areas: HitAreas,

    /// Number of card columns on the last frame
    pub grid_columns: usize,

    /// Number of card rows that fit on the last frame
    pub grid_visible_rows: usize,

    /// Downloads started but not yet reported back
    pub exports_in_flight: usize,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            toast_message: None,
            show_help: false,
            share_target: None,
            hit_areas: HitAreas::default(),
            grid_columns: 1,
            grid_visible_rows: 1,
            exports_in_flight: 0,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
