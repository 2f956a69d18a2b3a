//! Headline numbers for the research summary.

use crate::{
    content::SiteContent,
    publications::{PublicationsData, featured_count},
};
use serde::Serialize;

/// Used when the first experience entry has no parsable start year.
pub const FALLBACK_YEARS_EXPERIENCE: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResearchMetrics {
    pub total_publications: usize,
    pub featured_publications: usize,
    pub years_experience: i32,
}

impl ResearchMetrics {
    pub fn compute(content: &SiteContent, publications: &PublicationsData, current_year: i32) -> Self {
        let start_year = content
            .experience
            .first()
            .and_then(|item| parse_start_year(&item.start_date));

        Self {
            total_publications: publications.publications.len(),
            featured_publications: featured_count(&publications.publications),
            years_experience: start_year
                .map_or(FALLBACK_YEARS_EXPERIENCE, |year| current_year - year),
        }
    }
}

/// Year out of a `"Mon YYYY"` date. A bare `"YYYY"` is accepted too.
fn parse_start_year(date: &str) -> Option<i32> {
    date.split_whitespace().last()?.parse().ok()
}
