//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - filter: Category filtering of the quotation list
//! - format: Clipboard text, export filenames and CJK-aware wrapping
//! - grid: Card grid geometry and selection movement
//! - overlay: Overlay placement and click-outside hit testing
//! - ui: Timing rules for transient UI state (toasts, copy acknowledgments)

pub mod filter;
pub mod format;
pub mod grid;
pub mod overlay;
pub mod ui;
