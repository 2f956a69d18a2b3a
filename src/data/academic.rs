//! Certificates, test scores and the transcript link.
//!
//! Small, fixed lists compiled into the binary and emitted as-is.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub label: &'static str,
    pub score: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestScore {
    pub id: &'static str,
    pub name: &'static str,
    pub overall: &'static str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub breakdown: &'static [ScoreBreakdown],
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: "cert-1",
        title: "Fundamentals of Reinforcement Learning",
        issuer: "University of Alberta",
        date: None,
        url: Some("https://coursera.org/share/e3a25b11af40918160349e9b6c000e38"),
    },
    Certificate {
        id: "cert-2",
        title: "Custom Models, Layers, and Loss Functions with TensorFlow",
        issuer: "DeepLearning.AI",
        date: None,
        url: Some("https://coursera.org/share/59ea430a5ebe99ce4cd2d1329705fd26"),
    },
    Certificate {
        id: "cert-3",
        title: "HSE (Health, Safety, and Environment)",
        issuer: "Isfahan Oil Refinery Company",
        date: None,
        url: None,
    },
];

pub const TEST_SCORES: &[TestScore] = &[
    TestScore {
        id: "test-1",
        name: "GRE",
        overall: "322",
        breakdown: &[
            ScoreBreakdown {
                label: "Quantitative",
                score: "170/170",
            },
            ScoreBreakdown {
                label: "Verbal",
                score: "152/170",
            },
        ],
    },
    TestScore {
        id: "test-2",
        name: "TOEFL",
        overall: "98",
        breakdown: &[],
    },
];

pub const TRANSCRIPT_URL: &str = "/Official_transcript.pdf";

/// Everything in this module, as written to `academic.json`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AcademicRecords {
    pub certificates: &'static [Certificate],
    pub test_scores: &'static [TestScore],
    pub transcript_url: &'static str,
}

impl AcademicRecords {
    pub const fn get() -> Self {
        Self {
            certificates: CERTIFICATES,
            test_scores: TEST_SCORES,
            transcript_url: TRANSCRIPT_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let certs: HashSet<_> = CERTIFICATES.iter().map(|c| c.id).collect();
        assert_eq!(certs.len(), CERTIFICATES.len());
        let scores: HashSet<_> = TEST_SCORES.iter().map(|s| s.id).collect();
        assert_eq!(scores.len(), TEST_SCORES.len());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(AcademicRecords::get()).unwrap();
        assert_eq!(value["transcript_url"], TRANSCRIPT_URL);
        assert_eq!(value["certificates"][2]["issuer"], "Isfahan Oil Refinery Company");
        assert!(value["certificates"][2].get("url").is_none());
        assert_eq!(value["test_scores"][0]["breakdown"][0]["label"], "Quantitative");
        assert!(value["test_scores"][1].get("breakdown").is_none());
    }
}
