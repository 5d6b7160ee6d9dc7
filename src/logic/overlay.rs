//! Overlay geometry
//!
//! Pure functions for placing modal overlays and deciding whether a mouse
//! click lands inside their interactive content.

use ratatui::layout::Rect;

/// Center a `width` x `height` box inside `area`, shrinking it to fit
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use quotui::logic::overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 100, 40);
/// assert_eq!(centered_rect(area, 40, 10), Rect::new(30, 15, 40, 10));
///
/// // Larger than the area: clamp to the area
/// assert_eq!(centered_rect(Rect::new(0, 0, 20, 10), 40, 30), Rect::new(0, 0, 20, 10));
/// ```
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Check if a terminal cell lies inside `rect`
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Check if a click should close an overlay whose content box is `content`
///
/// Clicks on the backdrop (outside the content) close the overlay; clicks
/// inside never do.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use quotui::logic::overlay::click_closes_overlay;
///
/// let content = Rect::new(10, 5, 20, 10);
/// assert!(click_closes_overlay(content, 0, 0));
/// assert!(!click_closes_overlay(content, 15, 8));
/// ```
pub fn click_closes_overlay(content: Rect, column: u16, row: u16) -> bool {
    !contains(content, column, row)
}
