//! Data bundle build orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── rayon::join
//!     │       ├── ContentAdapter::load()  ──► fatal on error
//!     │       └── load_publications()     ──► empty fallback on error
//!     │
//!     ├── config.registry()
//!     │
//!     └── write_bundle() ──► <output>/_data/*.json
//! ```

use crate::{
    config::SiteConfig,
    content::ContentAdapter,
    data::{Bundle, write_bundle},
    log,
    publications::{PublicationsData, load_publications},
};
use anyhow::{Context, Result};
use chrono::Datelike;
use std::{fs, path::PathBuf};

/// Load every document and write the data bundle.
///
/// Content is required; publications degrade to an empty list. When
/// `clean` is set, the data directory is removed first.
///
/// Returns the paths of the written files.
pub fn build_site(config: &SiteConfig, clean: bool) -> Result<Vec<PathBuf>> {
    let data_dir = config.content.data_dir();

    if clean && data_dir.exists() {
        fs::remove_dir_all(&data_dir)
            .with_context(|| format!("Failed to clean data directory {}", data_dir.display()))?;
        log!("build"; "cleaned {}", data_dir.display());
    }

    let (content, publications) = load_documents(config)?;
    let registry = config.registry()?;

    let current_year = chrono::Local::now().year();
    let bundle = Bundle::new(config, &registry, &content, &publications, current_year);

    log!(
        "build";
        "{} sections, {} publications",
        bundle.page.len(),
        publications.publications.len()
    );

    let written = write_bundle(&data_dir, &bundle, config.content.minify)
        .with_context(|| format!("Failed to write data bundle to {}", data_dir.display()))?;

    log!("build"; "wrote {} files to {}", written.len(), data_dir.display());
    Ok(written)
}

/// Load the content and publications documents side by side.
pub fn load_documents(config: &SiteConfig) -> Result<(ContentAdapter, PublicationsData)> {
    let site = &config.content.site;
    let (content, publications) = rayon::join(
        || ContentAdapter::load(site),
        || load_publications(&config.content.publications),
    );

    let content = content.with_context(|| format!("Failed to load {}", site.display()))?;
    Ok((content, publications))
}
