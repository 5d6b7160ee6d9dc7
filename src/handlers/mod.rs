//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - mouse: Clicks on tabs, cards, buttons and overlay backdrops
//! - export: Results from the share-card export worker
//!
//! Handlers are plain functions that take &mut App and process one event.

pub mod export;
pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use export::handle_export_response;
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
