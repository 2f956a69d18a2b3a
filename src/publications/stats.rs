//! Aggregates derived from a publication list.
//!
//! All of these are recomputed on demand and never stored.

use super::types::{Category, PublicationRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationStats {
    pub total_publications: usize,
    pub total_citations: u64,
    /// Rounded to the nearest integer, 0 for an empty list.
    pub average_citations: u64,
    /// Every category is present, zero when unused.
    pub by_category: BTreeMap<Category, usize>,
}

impl PublicationStats {
    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}

pub fn publication_stats(publications: &[PublicationRecord]) -> PublicationStats {
    let total_publications = publications.len();
    let total_citations: u64 = publications.iter().map(|p| u64::from(p.citations)).sum();

    let mut by_category: BTreeMap<Category, usize> =
        Category::ALL.into_iter().map(|c| (c, 0)).collect();
    for category in publications.iter().filter_map(|p| p.category) {
        *by_category.entry(category).or_default() += 1;
    }

    let average_citations = if total_publications > 0 {
        (total_citations as f64 / total_publications as f64).round() as u64
    } else {
        0
    };

    PublicationStats {
        total_publications,
        total_citations,
        average_citations,
        by_category,
    }
}

/// Distinct years, newest first.
pub fn publication_years(publications: &[PublicationRecord]) -> Vec<u32> {
    let years: BTreeSet<u32> = publications.iter().map(|p| p.year).collect();
    years.into_iter().rev().collect()
}

/// Distinct keywords in ascending order. Case is significant.
pub fn all_keywords(publications: &[PublicationRecord]) -> Vec<String> {
    let keywords: BTreeSet<&str> = publications
        .iter()
        .flat_map(|p| p.keywords.iter().map(String::as_str))
        .collect();
    keywords.into_iter().map(str::to_owned).collect()
}

pub fn featured_count(publications: &[PublicationRecord]) -> usize {
    publications.iter().filter(|p| p.featured).count()
}
