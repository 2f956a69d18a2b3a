//! Publications document types.
//!
//! ```yaml
//! profile:
//!   name: A. Person
//!   affiliation: Some University
//!   scholar_id: abc123
//!   citations: 120
//!   h_index: 6
//!   i10_index: 4
//! publications:
//!   - id: cv-defects
//!     title: Computer Vision for Defect Detection
//!     authors: [A. Person, B. Person]
//!     venue: Journal of Manufacturing
//!     year: 2023
//!     citations: 12
//!     type: journal
//!     status: published
//! ```

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Publication category, stored under the `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Journal,
    Conference,
    Preprint,
    Dataset,
    Workshop,
}

/// Review status of a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Published,
    UnderReview,
    Accepted,
}

/// Kind of an outbound publication link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Doi,
    Pdf,
    Scholar,
    Arxiv,
    Github,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationLink {
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One bibliographic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    /// Unique within a collection.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub venue: String,
    pub year: u32,
    #[serde(default)]
    pub citations: u32,
    #[serde(default, rename = "type", alias = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<PublicationLink>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arxiv_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Thumbnail path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Scholar profile snapshot.
///
/// Entered alongside the publications, never recomputed from them: the
/// totals here may differ from the sum of per-publication citations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub scholar_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scholar_url: Option<String>,
    #[serde(default)]
    pub citations: u32,
    #[serde(default)]
    pub h_index: u32,
    #[serde(default)]
    pub i10_index: u32,
}

/// Result of loading the publications document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationsData {
    #[serde(default)]
    pub profile: ScholarProfile,
    #[serde(default)]
    pub publications: Vec<PublicationRecord>,
}

impl PublicationsData {
    /// Zeroed profile and no publications.
    pub fn fallback() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }
}

// ============================================================================
// Tag names
// ============================================================================

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Journal,
        Self::Conference,
        Self::Preprint,
        Self::Dataset,
        Self::Workshop,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Conference => "conference",
            Self::Preprint => "preprint",
            Self::Dataset => "dataset",
            Self::Workshop => "workshop",
        }
    }
}

impl Status {
    pub const ALL: [Status; 3] = [Self::Published, Self::UnderReview, Self::Accepted];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::UnderReview => "under-review",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tag `{0}`")]
pub struct UnknownTag(pub String);

impl FromStr for Category {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl FromStr for Status {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_defaults() {
        let record: PublicationRecord =
            serde_yaml::from_str("id: a\nyear: 2023\n").unwrap();

        assert_eq!(record.id, "a");
        assert_eq!(record.citations, 0);
        assert_eq!(record.category, None);
        assert!(record.authors.is_empty());
        assert!(!record.featured);
    }

    #[test]
    fn test_full_record() {
        let yaml = r#"
id: cv-defects
title: Computer Vision for Defect Detection
authors: [A. Person, B. Person]
venue: Journal of Manufacturing
year: 2023
citations: 12
type: journal
status: under-review
abstract: We detect defects.
keywords: [vision, manufacturing]
links:
  - type: doi
    url: https://doi.org/10.1000/xyz
  - type: arxiv
    url: https://arxiv.org/abs/2301.00001
    label: Preprint
featured: true
arxivId: "2301.00001"
volumeInfo: "Vol. 12"
"#;
        let record: PublicationRecord = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(record.category, Some(Category::Journal));
        assert_eq!(record.status, Some(Status::UnderReview));
        assert_eq!(record.summary.as_deref(), Some("We detect defects."));
        assert_eq!(record.links[1].kind, LinkKind::Arxiv);
        assert_eq!(record.links[1].label.as_deref(), Some("Preprint"));
        assert_eq!(record.arxiv_id.as_deref(), Some("2301.00001"));
        assert_eq!(record.volume_info.as_deref(), Some("Vol. 12"));
        assert!(record.featured);
    }

    #[test]
    fn test_category_alias() {
        let record: PublicationRecord =
            serde_yaml::from_str("id: a\nyear: 2020\ncategory: dataset\n").unwrap();
        assert_eq!(record.category, Some(Category::Dataset));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result: Result<PublicationRecord, _> =
            serde_yaml::from_str("id: a\nyear: 2020\ntype: blogpost\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_citations_rejected() {
        let result: Result<PublicationRecord, _> =
            serde_yaml::from_str("id: a\nyear: 2020\ncitations: -3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_tag_round_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
        }
        assert_eq!("under-review".parse::<Status>(), Ok(Status::UnderReview));
        assert!("all".parse::<Category>().is_err());
    }

    #[test]
    fn test_fallback_is_zeroed() {
        let data = PublicationsData::fallback();
        assert!(data.is_empty());
        assert_eq!(data.profile.citations, 0);
        assert_eq!(data.profile.h_index, 0);
        assert_eq!(data.profile.i10_index, 0);
        assert_eq!(data.profile.name, "");
    }

    #[test]
    fn test_serialized_record_uses_document_keys() {
        let record: PublicationRecord =
            serde_yaml::from_str("id: a\nyear: 2020\ntype: workshop\nabstract: text\n").unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "workshop");
        assert_eq!(value["abstract"], "text");
        assert!(value.get("featured").is_none());
    }
}
