//! `[features]` section configuration.
//!
//! Pass-through switches for the front end. Nothing in folio changes
//! behavior based on them; they are copied into `features.json`.

use serde::{Deserialize, Serialize};

/// `[features]` section in folio.toml.
///
/// # Example
/// ```toml
/// [features]
/// analytics = true
/// analytics_id = "G-XXXXXXX"
/// contact_form = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturesConfig {
    #[serde(default)]
    pub analytics: bool,

    #[serde(default)]
    pub contact_form: bool,

    /// Google Analytics tracking id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,

    /// Plausible analytics domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plausible_domain: Option<String>,
}
