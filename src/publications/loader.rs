//! Publications document loading.
//!
//! [`load_publications`] never fails: a missing or malformed document is
//! logged and replaced by [`PublicationsData::fallback`], so pages still
//! render with an empty publications list. [`try_load_publications`] is the
//! strict variant for `folio check`.

use super::types::{PublicationRecord, PublicationsData};
use crate::{
    log,
    utils::document::{DocumentError, read_document},
};
use std::{cmp::Ordering, collections::HashSet, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublicationsError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("duplicate publication id `{0}`")]
    DuplicateId(String),
}

/// Load, validate and sort the publications document.
///
/// Falls back to an empty, zeroed result on any error.
pub fn load_publications(path: &Path) -> PublicationsData {
    match try_load_publications(path) {
        Ok(data) => data,
        Err(err) => {
            log!("error"; "publications unavailable ({}): {}", path.display(), error_chain(&err));
            PublicationsData::fallback()
        }
    }
}

/// Load, validate and sort the publications document, reporting failures.
pub fn try_load_publications(path: &Path) -> Result<PublicationsData, PublicationsError> {
    let mut data: PublicationsData = read_document(path)?;
    check_unique_ids(&data.publications)?;
    sort_by_recency(&mut data.publications);
    Ok(data)
}

/// Newest first, most cited first within a year.
///
/// The sort is stable: records with equal year and citations keep document
/// order.
pub fn sort_by_recency(publications: &mut [PublicationRecord]) {
    publications.sort_by(compare_by_recency);
}

/// Year descending, then citations descending.
pub fn compare_by_recency(a: &PublicationRecord, b: &PublicationRecord) -> Ordering {
    b.year.cmp(&a.year).then_with(|| b.citations.cmp(&a.citations))
}

fn check_unique_ids(publications: &[PublicationRecord]) -> Result<(), PublicationsError> {
    let mut seen = HashSet::with_capacity(publications.len());
    for publication in publications {
        if !seen.insert(publication.id.as_str()) {
            return Err(PublicationsError::DuplicateId(publication.id.clone()));
        }
    }
    Ok(())
}

/// Render an error with its sources, `outer: inner: innermost`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    fn ids(data: &PublicationsData) -> Vec<&str> {
        data.publications.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_year_then_citations() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "publications.yml",
            r#"
publications:
  - { id: a, year: 2023, citations: 5 }
  - { id: b, year: 2024, citations: 1 }
  - { id: c, year: 2023, citations: 9 }
"#,
        );

        let data = load_publications(&path);
        assert_eq!(ids(&data), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_equal_keys_keep_document_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "publications.yml",
            r#"
publications:
  - { id: first, year: 2022, citations: 3 }
  - { id: newer, year: 2024 }
  - { id: second, year: 2022, citations: 3 }
  - { id: third, year: 2022, citations: 3 }
"#,
        );

        let once = load_publications(&path);
        let twice = load_publications(&path);
        assert_eq!(ids(&once), vec!["newer", "first", "second", "third"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_adjacent_pairs_ordered() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "publications.json",
            r#"{"publications": [
                {"id": "p1", "year": 2019, "citations": 40},
                {"id": "p2", "year": 2021, "citations": 2},
                {"id": "p3", "year": 2021, "citations": 7},
                {"id": "p4", "year": 2020},
                {"id": "p5", "year": 2019, "citations": 41}
            ]}"#,
        );

        let data = load_publications(&path);
        for pair in data.publications.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.year > b.year || (a.year == b.year && a.citations >= b.citations));
        }
    }

    #[test]
    fn test_missing_file_returns_fallback() {
        let dir = TempDir::new().unwrap();
        let data = load_publications(&dir.path().join("does-not-exist.yml"));

        assert_eq!(data, PublicationsData::fallback());
        assert_eq!(data.profile.citations, 0);
        assert_eq!(data.profile.h_index, 0);
        assert_eq!(data.profile.i10_index, 0);
        assert!(data.publications.is_empty());
    }

    #[test]
    fn test_malformed_file_returns_fallback() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "publications.yml", "publications: {not: [a list");

        assert_eq!(load_publications(&path), PublicationsData::fallback());
        assert!(matches!(
            try_load_publications(&path),
            Err(PublicationsError::Document(DocumentError::Yaml(..)))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "publications.yml",
            "publications:\n  - { id: x, year: 2020 }\n  - { id: x, year: 2021 }\n",
        );

        match try_load_publications(&path) {
            Err(PublicationsError::DuplicateId(id)) => assert_eq!(id, "x"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
        assert!(load_publications(&path).is_empty());
    }

    #[test]
    fn test_profile_kept_as_entered() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "publications.yml",
            r#"
profile:
  name: A. Person
  affiliation: Some University
  scholar_id: abc
  citations: 500
  h_index: 9
  i10_index: 8
publications:
  - { id: a, year: 2023, citations: 5 }
"#,
        );

        let data = load_publications(&path);
        // Not reconciled with the single record's 5 citations
        assert_eq!(data.profile.citations, 500);
        assert_eq!(data.profile.h_index, 9);
        assert_eq!(data.profile.scholar_url, None);
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let dir = TempDir::new().unwrap();
        let err = try_load_publications(&dir.path().join("gone.yml")).unwrap_err();
        let chain = error_chain(&err);
        assert!(chain.contains("gone.yml"));
        assert!(chain.matches(": ").count() >= 1);
    }
}
