//! The `_data/*.json` bundle read by the front end.

use super::{
    academic::AcademicRecords,
    metrics::ResearchMetrics,
    page::{PagePlan, compose_page},
};
use crate::{
    config::{BaseConfig, FeaturesConfig, SiteConfig},
    content::{ContentProvider, SiteContent},
    publications::{
        PublicationStats, PublicationsData, ScholarProfile, all_keywords, publication_stats,
        publication_years,
    },
    registry::{ModuleConfig, ModuleRegistry},
};
use serde::Serialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Aggregates over the publications plus the research summary.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport<'a> {
    pub profile: &'a ScholarProfile,
    pub stats: PublicationStats,
    pub years: Vec<u32>,
    pub keywords: Vec<String>,
    pub metrics: ResearchMetrics,
}

impl<'a> StatsReport<'a> {
    pub fn new(content: &SiteContent, publications: &'a PublicationsData, current_year: i32) -> Self {
        let records = &publications.publications;
        Self {
            profile: &publications.profile,
            stats: publication_stats(records),
            years: publication_years(records),
            keywords: all_keywords(records),
            metrics: ResearchMetrics::compute(content, publications, current_year),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct SiteFile<'a> {
    base: &'a BaseConfig,
    #[serde(flatten)]
    content: &'a SiteContent,
}

/// Everything one build writes, borrowed from the loaded documents.
#[derive(Debug, Clone)]
pub struct Bundle<'a> {
    pub base: &'a BaseConfig,
    pub features: &'a FeaturesConfig,
    pub content: &'a SiteContent,
    pub page: PagePlan<'a>,
    pub modules: Vec<&'a ModuleConfig>,
    pub publications: &'a PublicationsData,
    pub stats: StatsReport<'a>,
    pub academic: AcademicRecords,
}

impl<'a> Bundle<'a> {
    pub fn new<P>(
        config: &'a SiteConfig,
        registry: &'a ModuleRegistry,
        content: &'a P,
        publications: &'a PublicationsData,
        current_year: i32,
    ) -> Self
    where
        P: ContentProvider + ?Sized,
    {
        let site: &'a SiteContent = content.site_content();
        Self {
            base: &config.base,
            features: &config.features,
            content: site,
            page: compose_page(registry, content),
            modules: registry.enabled_modules(),
            publications,
            stats: StatsReport::new(site, publications, current_year),
            academic: AcademicRecords::get(),
        }
    }
}

type BundleFileGenerator = fn(&Bundle<'_>, bool) -> serde_json::Result<String>;

const BUNDLE_FILES: &[(&str, BundleFileGenerator)] = &[
    ("site.json", |b, minify| {
        let site = SiteFile {
            base: b.base,
            content: b.content,
        };
        to_json(&site, minify)
    }),
    ("page.json", |b, minify| to_json(&b.page, minify)),
    ("modules.json", |b, minify| to_json(&b.modules, minify)),
    ("publications.json", |b, minify| to_json(b.publications, minify)),
    ("stats.json", |b, minify| to_json(&b.stats, minify)),
    ("academic.json", |b, minify| to_json(&b.academic, minify)),
    ("features.json", |b, minify| to_json(b.features, minify)),
];

fn to_json<T: Serialize + ?Sized>(value: &T, minify: bool) -> serde_json::Result<String> {
    if minify {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

/// Names of the files [`write_bundle`] produces.
pub fn bundle_file_names() -> impl Iterator<Item = &'static str> {
    BUNDLE_FILES.iter().map(|(name, _)| *name)
}

/// Write every bundle file into `data_dir`, creating it if needed.
///
/// Returns the written paths in a fixed order.
pub fn write_bundle(data_dir: &Path, bundle: &Bundle<'_>, minify: bool) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(data_dir)?;

    let mut written = Vec::with_capacity(BUNDLE_FILES.len());
    for (name, generator) in BUNDLE_FILES {
        let path = data_dir.join(name);
        fs::write(&path, generator(bundle, minify)?)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::ContentAdapter, publications::testing::record};
    use tempfile::TempDir;

    fn fixture() -> (SiteConfig, ModuleRegistry, ContentAdapter, PublicationsData) {
        let mut config = SiteConfig::default();
        config.base.title = "Portfolio".into();
        config.features.contact_form = true;

        let content: SiteContent = serde_json::from_str(
            r#"{ "hero": { "title": "Hi", "description": "d" },
                 "experience": [
                    { "id": "e1", "title": "T", "company": "C", "startDate": "Jan 2017", "description": "" }
                 ] }"#,
        )
        .unwrap();

        let mut paper = record("p1", 2024, 10, None);
        paper.keywords = vec!["vision".into()];
        paper.featured = true;
        let publications = PublicationsData {
            publications: vec![paper, record("p2", 2022, 3, None)],
            ..PublicationsData::default()
        };

        (
            config,
            ModuleRegistry::builtin(),
            ContentAdapter::from_content(content),
            publications,
        )
    }

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_bundle_file_names() {
        let names: Vec<_> = bundle_file_names().collect();
        assert_eq!(
            names,
            [
                "site.json",
                "page.json",
                "modules.json",
                "publications.json",
                "stats.json",
                "academic.json",
                "features.json"
            ]
        );
    }

    #[test]
    fn test_write_bundle() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("public/_data");
        let (config, registry, content, publications) = fixture();
        let bundle = Bundle::new(&config, &registry, &content, &publications, 2025);

        let written = write_bundle(&data_dir, &bundle, false).unwrap();
        assert_eq!(written.len(), 7);
        assert!(written.iter().all(|p| p.exists()));

        let site = read_json(&data_dir.join("site.json"));
        assert_eq!(site["base"]["title"], "Portfolio");
        assert_eq!(site["hero"]["title"], "Hi");

        let page = read_json(&data_dir.join("page.json"));
        assert_eq!(page["sections"][0]["id"], "hero");
        assert_eq!(page["sections"].as_array().unwrap().len(), 7);

        let modules = read_json(&data_dir.join("modules.json"));
        assert_eq!(modules[6]["id"], "contact");

        let stats = read_json(&data_dir.join("stats.json"));
        assert_eq!(stats["stats"]["total_citations"], 13);
        assert_eq!(stats["years"], serde_json::json!([2024, 2022]));
        assert_eq!(stats["keywords"], serde_json::json!(["vision"]));
        assert_eq!(stats["metrics"]["years_experience"], 8);
        assert_eq!(stats["metrics"]["featured_publications"], 1);

        let features = read_json(&data_dir.join("features.json"));
        assert_eq!(features["contact_form"], true);
        assert_eq!(features["analytics"], false);
    }

    #[test]
    fn test_minified_output() {
        let dir = TempDir::new().unwrap();
        let (config, registry, content, publications) = fixture();
        let bundle = Bundle::new(&config, &registry, &content, &publications, 2025);

        write_bundle(dir.path(), &bundle, true).unwrap();
        let text = fs::read_to_string(dir.path().join("publications.json")).unwrap();
        assert!(!text.contains('\n'));
        assert_eq!(read_json(&dir.path().join("publications.json"))["publications"][0]["id"], "p1");
    }
}
