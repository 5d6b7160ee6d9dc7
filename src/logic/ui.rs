//! UI state timing logic
//!
//! Pure functions deciding when transient UI state expires.

use std::time::Duration;

/// How long a card keeps its "copied" acknowledgment after the latest copy
pub const COPY_ACK_WINDOW: Duration = Duration::from_secs(2);

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Check if a toast notification should be dismissed
///
/// # Examples
/// ```
/// use quotui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(!should_dismiss_toast(1499));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Check if a copy acknowledgment has outlived its window
pub fn copy_ack_expired(elapsed: Duration) -> bool {
    elapsed >= COPY_ACK_WINDOW
}
