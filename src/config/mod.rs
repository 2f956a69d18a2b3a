//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[base]`      | Site metadata (title, author, url)             |
//! | `[content]`   | Content documents and output directory         |
//! | `[features]`  | Front-end feature flags (analytics, contact)   |
//! | `[[modules]]` | Module registry table                          |
//! | `[extra]`     | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "A. Person"
//! url = "https://aperson.github.io"
//!
//! [content]
//! site = "content/site-content.json"
//! publications = "content/publications.yml"
//!
//! [features]
//! analytics = true
//!
//! [[modules]]
//! id = "hero"
//! name = "Hero Section"
//! order = 1
//!
//! [extra]
//! scholar_badge = true
//! ```

mod base;
mod content;
pub mod defaults;
mod error;
mod features;

pub use base::BaseConfig;
pub use content::ContentConfig;
pub use error::ConfigError;
pub use features::FeaturesConfig;

use crate::{
    cli::{Cli, Commands},
    registry::{ModuleConfig, ModuleRegistry},
    utils::path::{normalize_path, resolve},
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Absolute project root (set after loading)
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content documents and output
    #[serde(default)]
    pub content: ContentConfig,

    /// Front-end feature flags
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Module registry table
    #[serde(default = "defaults::modules::table")]
    #[educe(Default = defaults::modules::table())]
    pub modules: Vec<ModuleConfig>,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Locate, parse, apply CLI overrides and validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        if !config_path.exists() {
            bail!("Config file not found: {}", config_path.display());
        }

        let mut config = Self::from_path(&config_path)?;
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| self.root.clone());

        Self::update_option(&mut self.content.site, cli.site.as_ref());
        Self::update_option(&mut self.content.publications, cli.publications.as_ref());
        Self::update_option(&mut self.content.output, cli.output.as_ref());

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.content.minify, build_args.minify.as_ref());
            Self::update_option(&mut self.features.analytics, build_args.analytics.as_ref());
            Self::update_option(&mut self.features.contact_form, build_args.contact_form.as_ref());
        }

        self.config_path = normalize_path(&root.join(&cli.config));
        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all content paths against the root directory
    fn update_path_with_root(&mut self, root: &Path) {
        self.root = normalize_path(root);
        self.content.site = resolve(&self.root, &self.content.site);
        self.content.publications = resolve(&self.root, &self.content.publications);
        self.content.output = resolve(&self.root, &self.content.output);
    }

    /// Build the module registry declared by this config.
    pub fn registry(&self) -> Result<ModuleRegistry> {
        let registry = ModuleRegistry::new(self.modules.clone()).map_err(ConfigError::from)?;
        Ok(registry)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        self.registry()?;

        if self.content.site == self.content.publications {
            bail!(ConfigError::Validation(
                "[content.site] and [content.publications] must be different files".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "My Portfolio"
            author = "Test Author"
        "#,
        )
        .unwrap();

        assert_eq!(config.base.title, "My Portfolio");
        assert_eq!(config.base.author, "Test Author");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\ntitle = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.root, PathBuf::from("./"));
        assert_eq!(config.base.title, "");
        assert_eq!(config.modules.len(), 7);
        assert!(!config.features.analytics);
    }

    #[test]
    fn test_modules_default_to_builtin_table() {
        let config = SiteConfig::from_str("[base]\ntitle = \"t\"").unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(registry, ModuleRegistry::builtin());
    }

    #[test]
    fn test_modules_table_replaces_builtin() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "t"

            [[modules]]
            id = "publications"
            name = "Publications"
            order = 2

            [[modules]]
            id = "teaching"
            name = "Teaching"
            enabled = false
            order = 1
        "#,
        )
        .unwrap();

        let registry = config.registry().unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.is_enabled("publications"));
        assert!(!registry.is_enabled("teaching"));
        assert!(!registry.is_enabled("hero"));
    }

    #[test]
    fn test_validate_duplicate_modules() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "t"
            [[modules]]
            id = "hero"
            name = "Hero"
            order = 1
            [[modules]]
            id = "hero"
            name = "Hero again"
            order = 2
        "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate module id `hero`"));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Registry(_))
        ));
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = SiteConfig::default();
        config.base.url = Some("ftp://example.com".into());
        assert!(config.validate().is_err());

        config.base.url = Some("https://example.com".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extra_fields() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "Test"

            [extra]
            custom_field = "custom_value"
            number_field = 42
            [extra.social]
            github = "username"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
        let social = config.extra.get("social").and_then(|v| v.as_table()).unwrap();
        assert_eq!(social.get("github").and_then(|v| v.as_str()), Some("username"));
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = SiteConfig::from_str(
            r#"
            [base]
            title = "Test"

            [serve]
            port = 1
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_resolves_paths_and_cli_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[base]\ntitle = \"t\"\n[content]\nsite = \"data/site.json\"\n",
        )
        .unwrap();

        let root = dir.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "folio",
            "--root",
            root.as_str(),
            "--output",
            "dist",
            "build",
            "--minify",
            "--contact-form",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        let root = normalize_path(dir.path());
        assert_eq!(config.root, root);
        assert_eq!(config.config_path, root.join("folio.toml"));
        assert_eq!(config.content.site, root.join("data/site.json"));
        assert_eq!(config.content.publications, root.join("content/publications.yml"));
        assert_eq!(config.content.output, root.join("dist"));
        assert!(config.content.minify);
        assert!(config.features.contact_form);
        assert!(!config.features.analytics);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["folio", "--root", root.as_str(), "check"]);

        let err = SiteConfig::load(&cli).unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }
}
