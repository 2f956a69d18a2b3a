//! Publications data pipeline.
//!
//! ```text
//! publications.yml ──► load_publications() ──► PublicationsData
//!                       (fallback on error)      │
//!                                                ├── stats: totals, years, keywords
//!                                                └── query: search/filter/sort/page
//! ```

pub mod loader;
pub mod query;
pub mod stats;
mod types;

pub use loader::{load_publications, try_load_publications};
pub use query::{CategoryFilter, PublicationPage, PublicationQuery, SortKey, StatusFilter};
pub use stats::{PublicationStats, all_keywords, featured_count, publication_stats, publication_years};
pub use types::*;
