// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into header, gallery, footer and legend
// - render: Main orchestration function that coordinates all rendering
// - header: Title banner, category tabs with counts, random button
// - gallery: Card grid with scrolling and the empty state
// - card: One quotation card with copy/share buttons
// - overlays: Random pick, share card, help
// - footer: Motto line under the grid
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)
// - theme: Palette shared by cards and the share card

pub mod card;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod layout;
pub mod legend;
pub mod overlays;
pub mod render;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
