//! Category filtering
//!
//! Pure functions deriving the visible quotation list from the active filter.

use crate::quotes::{CategoryFilter, Quote};

/// Return the quotations matching `filter`, in original order
///
/// `CategoryFilter::All` returns every quotation unchanged; a specific
/// category returns the exact-match subsequence.
///
/// # Examples
/// ```
/// use quotui::logic::filter::filter_quotes;
/// use quotui::quotes::{Category, CategoryFilter, Quote};
///
/// let quotes = vec![
///     Quote { id: 1, text: "A".into(), source: "S1".into(), category: Category::Work, year: None },
///     Quote { id: 2, text: "B".into(), source: "S2".into(), category: Category::Study, year: None },
/// ];
///
/// let work: Vec<u32> = filter_quotes(&quotes, CategoryFilter::Only(Category::Work))
///     .iter().map(|q| q.id).collect();
/// assert_eq!(work, vec![1]);
///
/// assert_eq!(filter_quotes(&quotes, CategoryFilter::All).len(), 2);
/// ```
pub fn filter_quotes(quotes: &[Quote], filter: CategoryFilter) -> Vec<&Quote> {
    quotes.iter().filter(|q| filter.matches(q.category)).collect()
}

/// Count quotations per filter tab, in [`CategoryFilter::TABS`] order
pub fn count_by_tab(quotes: &[Quote]) -> [usize; 6] {
    let mut counts = [0usize; 6];
    for (idx, tab) in CategoryFilter::TABS.iter().enumerate() {
        counts[idx] = quotes.iter().filter(|q| tab.matches(q.category)).count();
    }
    counts
}
