//! Quotation data model
//!
//! The quotation set is loaded once at startup and never mutated afterwards.
//! The built-in set is embedded from `data/quotes.yaml`; a YAML or JSON file
//! of the same shape can replace it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Stable quotation identifier
pub type QuoteId = u32;

const BUILTIN_QUOTES: &str = include_str!("../data/quotes.yaml");

/// Fixed set of quotation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Study,
    Youth,
    Philosophy,
    Revolution,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Study,
        Category::Youth,
        Category::Philosophy,
        Category::Revolution,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Study => "study",
            Category::Youth => "youth",
            Category::Philosophy => "philosophy",
            Category::Revolution => "revolution",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "工作",
            Category::Study => "学习",
            Category::Youth => "青年",
            Category::Philosophy => "哲学",
            Category::Revolution => "革命",
        }
    }
}

/// Active category filter: the "all" wildcard or one specific category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tab order shown in the header
    pub const TABS: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Work),
        CategoryFilter::Only(Category::Study),
        CategoryFilter::Only(Category::Youth),
        CategoryFilter::Only(Category::Philosophy),
        CategoryFilter::Only(Category::Revolution),
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "全部",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Parse a filter id (`all`, `work`, ...). Case-insensitive.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        Self::TABS.into_iter().find(|f| f.id() == id)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Position of this filter in [`CategoryFilter::TABS`]
    pub fn tab_index(&self) -> usize {
        Self::TABS.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// One attributed quotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub text: String,
    pub source: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("failed to read quotes file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML quotes: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON quotes: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate quote id {0}")]
    DuplicateId(QuoteId),
    #[error("quote set is empty")]
    Empty,
}

/// Ordered, immutable set of quotations
///
/// Cloning is cheap; all clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSet {
    quotes: Arc<[Quote]>,
}

impl QuoteSet {
    /// Build a set, rejecting empty input and duplicate ids
    pub fn new(quotes: Vec<Quote>) -> Result<Self, QuoteError> {
        if quotes.is_empty() {
            return Err(QuoteError::Empty);
        }

        let mut seen = HashSet::with_capacity(quotes.len());
        for quote in &quotes {
            if !seen.insert(quote.id) {
                return Err(QuoteError::DuplicateId(quote.id));
            }
        }

        Ok(Self {
            quotes: quotes.into(),
        })
    }

    /// The set compiled into the binary
    pub fn builtin() -> Result<Self, QuoteError> {
        Self::from_yaml(BUILTIN_QUOTES)
    }

    pub fn from_yaml(content: &str) -> Result<Self, QuoteError> {
        let quotes: Vec<Quote> = serde_yaml::from_str(content)?;
        Self::new(quotes)
    }

    pub fn from_json(content: &str) -> Result<Self, QuoteError> {
        let quotes: Vec<Quote> = serde_json::from_str(content)?;
        Self::new(quotes)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self, QuoteError> {
        let content = std::fs::read_to_string(path).map_err(|source| QuoteError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn find(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: QuoteId, category: Category) -> Quote {
        Quote {
            id,
            text: format!("text {}", id),
            source: format!("source {}", id),
            category,
            year: None,
        }
    }

    #[test]
    fn test_builtin_set_loads() {
        let set = QuoteSet::builtin().expect("embedded quotes should parse");
        assert!(!set.is_empty());
    }

    #[test]
    fn test_builtin_set_covers_every_category() {
        let set = QuoteSet::builtin().unwrap();
        for category in Category::ALL {
            assert!(
                set.iter().any(|q| q.category == category),
                "no built-in quote for {:?}",
                category
            );
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = QuoteSet::new(vec![quote(1, Category::Work), quote(1, Category::Study)]);
        assert!(matches!(result, Err(QuoteError::DuplicateId(1))));
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(QuoteSet::new(vec![]), Err(QuoteError::Empty)));
    }

    #[test]
    fn test_year_is_optional() {
        let yaml = "- id: 7\n  text: A\n  source: S\n  category: youth\n";
        let set = QuoteSet::from_yaml(yaml).unwrap();
        assert_eq!(set.get(0).unwrap().year, None);
        assert_eq!(set.get(0).unwrap().category, Category::Youth);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let yaml = "- id: 7\n  text: A\n  source: S\n  category: poetry\n";
        assert!(matches!(QuoteSet::from_yaml(yaml), Err(QuoteError::Yaml(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"id":1,"text":"A","source":"S1","category":"work","year":"1957"}]"#;
        let set = QuoteSet::from_json(json).unwrap();
        assert_eq!(set.find(1).unwrap().year.as_deref(), Some("1957"));
    }

    #[test]
    fn test_filter_from_id() {
        assert_eq!(CategoryFilter::from_id("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_id("Study"),
            Some(CategoryFilter::Only(Category::Study))
        );
        assert_eq!(CategoryFilter::from_id("poetry"), None);
    }

    #[test]
    fn test_tab_index_round_trips_tabs() {
        for (idx, tab) in CategoryFilter::TABS.iter().enumerate() {
            assert_eq!(tab.tab_index(), idx);
        }
    }
}
