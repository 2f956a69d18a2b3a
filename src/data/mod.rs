//! Front-end data bundle.
//!
//! Everything the static front end needs is precomputed here and written as
//! JSON under `<output>/_data/`.
//!
//! ```text
//! ModuleRegistry ─┐
//! ContentAdapter ─┼─► Bundle::new() ──► write_bundle() ──► _data/*.json
//! Publications ───┘
//! ```
//!
//! | File | Contents |
//! |------|----------|
//! | `site.json` | `[base]` config merged with the content document |
//! | `page.json` | Enabled modules with their section data, in render order |
//! | `modules.json` | Enabled registry entries |
//! | `publications.json` | Scholar profile and sorted publications |
//! | `stats.json` | Aggregates, years, keywords, research metrics |
//! | `academic.json` | Certificates, test scores, transcript link |
//! | `features.json` | `[features]` flags, passed through |

mod academic;
mod bundle;
mod metrics;
mod page;

pub use bundle::{Bundle, StatsReport, bundle_file_names, write_bundle};
pub use page::compose_page;
