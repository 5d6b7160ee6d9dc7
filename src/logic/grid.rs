//! Card grid geometry
//!
//! Pure functions for laying cards out in columns and moving the selection
//! across them. Movement clamps at the edges rather than wrapping.

/// Minimum width of one card column in terminal cells
pub const MIN_CARD_WIDTH: u16 = 36;

/// Maximum number of card columns
pub const MAX_COLUMNS: usize = 3;

/// Direction of a selection move in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Number of card columns that fit in `width` cells (1 to [`MAX_COLUMNS`])
///
/// # Examples
/// ```
/// use quotui::logic::grid::grid_columns;
///
/// assert_eq!(grid_columns(20), 1);
/// assert_eq!(grid_columns(80), 2);
/// assert_eq!(grid_columns(200), 3);
/// ```
pub fn grid_columns(width: u16) -> usize {
    ((width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

/// Apply a grid move to the current selection
///
/// Returns `None` only when the list is empty. A stale selection past the end
/// of the list is clamped to the last card first.
///
/// # Examples
/// ```
/// use quotui::logic::grid::{move_selection, GridMove};
///
/// // 7 cards in 3 columns:
/// //  0 1 2
/// //  3 4 5
/// //  6
/// assert_eq!(move_selection(1, 7, 3, GridMove::Down), Some(4));
/// assert_eq!(move_selection(4, 7, 3, GridMove::Down), Some(6)); // clamp to last card
/// assert_eq!(move_selection(2, 7, 3, GridMove::Right), Some(3)); // reading order
/// assert_eq!(move_selection(0, 7, 3, GridMove::Up), Some(0));
/// assert_eq!(move_selection(0, 0, 3, GridMove::Down), None);
/// ```
pub fn move_selection(current: usize, len: usize, columns: usize, dir: GridMove) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let columns = columns.max(1);
    let last = len - 1;
    let current = current.min(last);

    Some(match dir {
        GridMove::Left => current.saturating_sub(1),
        GridMove::Right => (current + 1).min(last),
        GridMove::Up => current.checked_sub(columns).unwrap_or(current),
        GridMove::Down => {
            let next_row_start = (current / columns + 1) * columns;
            if next_row_start > last {
                current
            } else {
                (current + columns).min(last)
            }
        }
        GridMove::First => 0,
        GridMove::Last => last,
    })
}

/// Adjust the first visible row so that `selected_row` stays on screen
///
/// # Examples
/// ```
/// use quotui::logic::grid::scroll_to_row;
///
/// assert_eq!(scroll_to_row(0, 3, 0), 0);
/// assert_eq!(scroll_to_row(4, 3, 0), 2);
/// assert_eq!(scroll_to_row(1, 3, 2), 1);
/// ```
pub fn scroll_to_row(selected_row: usize, visible_rows: usize, offset: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if selected_row < offset {
        selected_row
    } else if selected_row >= offset + visible_rows {
        selected_row + 1 - visible_rows
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_never_zero() {
        assert_eq!(grid_columns(0), 1);
    }

    #[test]
    fn test_down_on_last_row_stays() {
        assert_eq!(move_selection(6, 7, 3, GridMove::Down), Some(6));
    }

    #[test]
    fn test_down_into_short_row_clamps() {
        assert_eq!(move_selection(5, 7, 3, GridMove::Down), Some(6));
    }

    #[test]
    fn test_left_at_start_stays() {
        assert_eq!(move_selection(0, 7, 3, GridMove::Left), Some(0));
    }

    #[test]
    fn test_right_at_end_stays() {
        assert_eq!(move_selection(6, 7, 3, GridMove::Right), Some(6));
    }

    #[test]
    fn test_stale_selection_clamped() {
        // Selection from a longer, unfiltered list
        assert_eq!(move_selection(20, 2, 3, GridMove::Left), Some(0));
    }

    #[test]
    fn test_first_last() {
        assert_eq!(move_selection(3, 7, 2, GridMove::First), Some(0));
        assert_eq!(move_selection(3, 7, 2, GridMove::Last), Some(6));
    }

    #[test]
    fn test_single_column_up_down() {
        assert_eq!(move_selection(1, 3, 1, GridMove::Down), Some(2));
        assert_eq!(move_selection(1, 3, 1, GridMove::Up), Some(0));
    }

    #[test]
    fn test_scroll_keeps_offset_when_visible() {
        assert_eq!(scroll_to_row(3, 2, 2), 2);
    }
}
