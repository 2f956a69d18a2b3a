//! Site content loading.
//!
//! The content document is read once at bootstrap into a [`ContentAdapter`],
//! which is then handed by reference to whatever composes pages. Consumers
//! only see the [`ContentProvider`] trait, so another backing store (a remote
//! API, a database) can be dropped in without touching them.
//!
//! ```text
//! site-content.json ──► ContentAdapter::load() ──► &dyn ContentProvider
//!                          (once, fatal on error)      ├── site_content()
//!                                                      └── section(Section::Hero)
//! ```

mod types;

pub use types::*;

use crate::utils::document::{DocumentError, read_document};
use serde::{Serialize, Serializer};
use std::{fmt, path::Path, str::FromStr, sync::Arc};
use thiserror::Error;

/// Content document could not be turned into a [`SiteContent`].
///
/// Raised at construction time; the process is not expected to continue.
#[derive(Debug, Error)]
#[error("failed to load site content")]
pub struct ContentError(#[from] pub DocumentError);

// ============================================================================
// Sections
// ============================================================================

/// Named top-level section of the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Metadata,
    Hero,
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Publications,
    Teaching,
    Contact,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Self::Metadata,
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Education,
        Self::Skills,
        Self::Projects,
        Self::Publications,
        Self::Teaching,
        Self::Contact,
    ];

    /// Key of this section in the content document.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Publications => "publications",
            Self::Teaching => "teaching",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown content section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Borrowed view of one section of a [`SiteContent`].
///
/// Serializes exactly like the section it points at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionRef<'a> {
    Metadata(&'a SiteMetadata),
    Hero(&'a HeroContent),
    About(&'a AboutContent),
    Experience(&'a [ExperienceItem]),
    Education(&'a [EducationItem]),
    Skills(&'a [SkillCategory]),
    Projects(&'a [ProjectItem]),
    Publications(&'a PublicationsContent),
    Teaching(&'a TeachingContent),
    Contact(&'a ContactContent),
}

impl SectionRef<'_> {
    /// True when the section carries nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Metadata(m) => **m == SiteMetadata::default(),
            Self::Hero(h) => **h == HeroContent::default(),
            Self::About(a) => **a == AboutContent::default(),
            Self::Experience(items) => items.is_empty(),
            Self::Education(items) => items.is_empty(),
            Self::Skills(items) => items.is_empty(),
            Self::Projects(items) => items.is_empty(),
            Self::Publications(p) => p.publications.is_empty(),
            Self::Teaching(t) => t.positions.is_empty(),
            Self::Contact(c) => **c == ContactContent::default(),
        }
    }
}

impl Serialize for SectionRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Metadata(v) => v.serialize(serializer),
            Self::Hero(v) => v.serialize(serializer),
            Self::About(v) => v.serialize(serializer),
            Self::Experience(v) => v.serialize(serializer),
            Self::Education(v) => v.serialize(serializer),
            Self::Skills(v) => v.serialize(serializer),
            Self::Projects(v) => v.serialize(serializer),
            Self::Publications(v) => v.serialize(serializer),
            Self::Teaching(v) => v.serialize(serializer),
            Self::Contact(v) => v.serialize(serializer),
        }
    }
}

impl SiteContent {
    /// Project one section out of the document.
    pub fn section(&self, section: Section) -> SectionRef<'_> {
        match section {
            Section::Metadata => SectionRef::Metadata(&self.metadata),
            Section::Hero => SectionRef::Hero(&self.hero),
            Section::About => SectionRef::About(&self.about),
            Section::Experience => SectionRef::Experience(&self.experience),
            Section::Education => SectionRef::Education(&self.education),
            Section::Skills => SectionRef::Skills(&self.skills),
            Section::Projects => SectionRef::Projects(&self.projects),
            Section::Publications => SectionRef::Publications(&self.publications),
            Section::Teaching => SectionRef::Teaching(&self.teaching),
            Section::Contact => SectionRef::Contact(&self.contact),
        }
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Read-only access to the loaded site content.
pub trait ContentProvider {
    /// The whole document. Repeated calls return the same instance.
    fn site_content(&self) -> &Arc<SiteContent>;

    /// One section of the document.
    fn section(&self, section: Section) -> SectionRef<'_> {
        self.site_content().section(section)
    }
}

/// Content provider backed by a JSON or YAML document on disk.
#[derive(Debug, Clone)]
pub struct ContentAdapter {
    content: Arc<SiteContent>,
}

impl ContentAdapter {
    /// Read and parse the content document.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content: SiteContent = read_document(path)?;
        Ok(Self::from_content(content))
    }

    /// Wrap an already built document.
    pub fn from_content(content: SiteContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }
}

impl ContentProvider for ContentAdapter {
    #[inline]
    fn site_content(&self) -> &Arc<SiteContent> {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "metadata": { "title": "Portfolio", "description": "d", "author": "A. Person" },
        "hero": { "title": "Hello", "description": "ML engineer" },
        "experience": [
            { "id": "e1", "title": "Engineer", "company": "Acme", "startDate": "Mar 2018", "description": "x" }
        ],
        "contact": { "heading": "Contact", "email": "a@example.com" }
    }"#;

    fn write_sample(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_load_json_document() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir, "site-content.json", SAMPLE);

        let adapter = ContentAdapter::load(&path).unwrap();
        let content = adapter.site_content();
        assert_eq!(content.metadata.title, "Portfolio");
        assert_eq!(content.experience.len(), 1);
        assert!(content.projects.is_empty());
    }

    #[test]
    fn test_load_yaml_document() {
        let dir = TempDir::new().unwrap();
        let yaml = "hero:\n  title: Hello\n  description: ML engineer\n";
        let path = write_sample(&dir, "site-content.yaml", yaml);

        let adapter = ContentAdapter::load(&path).unwrap();
        assert_eq!(adapter.site_content().hero.title, "Hello");
    }

    #[test]
    fn test_same_instance_on_every_call() {
        let adapter = ContentAdapter::from_content(SiteContent::default());
        let first = adapter.site_content();
        let second = adapter.site_content();
        assert!(Arc::ptr_eq(first, second));

        // Clones share the document too
        let cloned = adapter.clone();
        assert!(Arc::ptr_eq(first, cloned.site_content()));
    }

    #[test]
    fn test_malformed_document_fails_fast() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir, "site-content.json", r#"{"experience": "nope"}"#);

        let err = ContentAdapter::load(&path).unwrap_err();
        assert!(matches!(err.0, DocumentError::Json(..)));
    }

    #[test]
    fn test_missing_document_fails_fast() {
        let dir = TempDir::new().unwrap();
        let err = ContentAdapter::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err.0, DocumentError::Io(..)));
    }

    #[test]
    fn test_section_projection() {
        let content: SiteContent = serde_json::from_str(SAMPLE).unwrap();
        let adapter = ContentAdapter::from_content(content);

        match adapter.section(Section::Hero) {
            SectionRef::Hero(hero) => assert_eq!(hero.title, "Hello"),
            other => panic!("unexpected section: {other:?}"),
        }
        match adapter.section(Section::Experience) {
            SectionRef::Experience(items) => assert_eq!(items[0].company, "Acme"),
            other => panic!("unexpected section: {other:?}"),
        }
        assert!(adapter.section(Section::Teaching).is_empty());
        assert!(!adapter.section(Section::Contact).is_empty());
    }

    #[test]
    fn test_section_ref_serializes_as_section() {
        let content: SiteContent = serde_json::from_str(SAMPLE).unwrap();
        let value = serde_json::to_value(content.section(Section::Contact)).unwrap();
        assert_eq!(value["email"], "a@example.com");
        assert_eq!(value["heading"], "Contact");
    }

    #[test]
    fn test_section_from_str() {
        for section in Section::ALL {
            assert_eq!(section.name().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "certificates".parse::<Section>(),
            Err(UnknownSection("certificates".into()))
        );
    }
}
