//! Search, filter, sort and paginate a publication list.
//!
//! ```text
//! all publications
//!     │
//!     ├── search    (title / authors / abstract / venue, case-insensitive)
//!     ├── category  (exact, unless `all`)
//!     ├── status    (exact, unless `all`)
//!     ├── sort      (year | citations | title | type)
//!     └── paginate  [(page-1)*size, page*size)
//!     ▼
//! PublicationPage
//! ```
//!
//! Every run starts over from the full list; nothing is cached between runs.

use super::{
    loader::compare_by_recency,
    types::{Category, PublicationRecord, Status, UnknownTag},
};
use deunicode::deunicode;
use educe::Educe;
use serde::Serialize;
use std::{cmp::Ordering, fmt, str::FromStr};

pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// Query State
// ============================================================================

/// Category filter: everything, or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Status filter: everything, or one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Year descending, citations descending
    #[default]
    Year,
    /// Citations descending
    Citations,
    /// Title ascending
    Title,
    /// Category ascending, year descending
    #[value(name = "type")]
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Educe)]
#[educe(Default)]
pub struct PublicationQuery {
    /// Free-text search; empty means no search filtering.
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub sort: SortKey,
    #[educe(Default = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    /// 1-based.
    #[educe(Default = 1)]
    pub page: usize,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationPage<'a> {
    pub items: Vec<&'a PublicationRecord>,
    /// Number of records that passed the filters.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

impl PublicationPage<'_> {
    /// Clamp a requested page number into `1..=page_count` (1 when empty).
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.page_count.max(1))
    }
}

// ============================================================================
// Pipeline
// ============================================================================

impl PublicationQuery {
    /// Run the full pipeline over `publications`.
    ///
    /// Pages outside `1..=page_count` and a zero page size yield an empty
    /// page; clamping is left to the caller.
    pub fn run<'a>(&self, publications: &'a [PublicationRecord]) -> PublicationPage<'a> {
        let needle = self.search.to_lowercase();

        let mut matched: Vec<&PublicationRecord> = publications
            .iter()
            .filter(|p| needle.is_empty() || matches_search(p, &needle))
            .filter(|p| self.category.accepts(p.category))
            .filter(|p| self.status.accepts(p.status))
            .collect();

        matched.sort_by(|a, b| self.sort.compare(a, b));

        let total = matched.len();
        let page_count = if self.page_size == 0 {
            0
        } else {
            total.div_ceil(self.page_size)
        };

        let items = match self.page.checked_sub(1) {
            Some(index) if self.page_size > 0 => {
                let start = index.saturating_mul(self.page_size).min(total);
                let end = start.saturating_add(self.page_size).min(total);
                matched[start..end].to_vec()
            }
            _ => Vec::new(),
        };

        PublicationPage {
            items,
            total,
            page: self.page,
            page_count,
        }
    }
}

/// `needle` must already be lowercase.
fn matches_search(publication: &PublicationRecord, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&publication.title)
        || publication.authors.iter().any(|author| contains(author))
        || publication.summary.as_deref().is_some_and(|s| contains(s))
        || contains(&publication.venue)
}

impl CategoryFilter {
    fn accepts(self, category: Option<Category>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(wanted),
        }
    }
}

impl StatusFilter {
    fn accepts(self, status: Option<Status>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == Some(wanted),
        }
    }
}

impl SortKey {
    fn compare(self, a: &PublicationRecord, b: &PublicationRecord) -> Ordering {
        match self {
            Self::Year => compare_by_recency(a, b),
            Self::Citations => b.citations.cmp(&a.citations),
            Self::Title => compare_titles(&a.title, &b.title),
            Self::Category => category_tag(a)
                .cmp(category_tag(b))
                .then_with(|| b.year.cmp(&a.year)),
        }
    }
}

/// Dictionary order: case and accents only break ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn collation_key(title: &str) -> String {
    deunicode(title).to_lowercase()
}

/// Untagged records sort before every tagged one.
fn category_tag(publication: &PublicationRecord) -> &'static str {
    publication.category.map_or("", Category::as_str)
}

// ============================================================================
// Parsing (CLI values)
// ============================================================================

impl FromStr for CategoryFilter {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}
