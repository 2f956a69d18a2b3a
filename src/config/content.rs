//! `[content]` section configuration.
//!
//! Locations of the content documents and of the output directory. All
//! paths are relative to the project root until [`super::SiteConfig`]
//! resolves them.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in folio.toml.
///
/// # Example
/// ```toml
/// [content]
/// site = "content/site-content.json"
/// publications = "content/publications.yml"
/// output = "public"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Site content document (`.json`, `.yml` or `.yaml`).
    #[serde(default = "defaults::content::site")]
    #[educe(Default = defaults::content::site())]
    pub site: PathBuf,

    /// Publications document (`.json`, `.yml` or `.yaml`).
    #[serde(default = "defaults::content::publications")]
    #[educe(Default = defaults::content::publications())]
    pub publications: PathBuf,

    /// Output directory; the data bundle goes to `<output>/_data`.
    #[serde(default = "defaults::content::output")]
    #[educe(Default = defaults::content::output())]
    pub output: PathBuf,

    /// Write compact JSON.
    #[serde(default = "defaults::r#false")]
    pub minify: bool,
}

impl ContentConfig {
    /// Directory receiving the data bundle.
    pub fn data_dir(&self) -> PathBuf {
        self.output.join(defaults::content::data_dir())
    }
}
