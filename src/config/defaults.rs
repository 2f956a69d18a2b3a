//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn site() -> PathBuf {
        "content/site-content.json".into()
    }

    pub fn publications() -> PathBuf {
        "content/publications.yml".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    /// Data bundle directory, relative to the output directory.
    pub fn data_dir() -> PathBuf {
        "_data".into()
    }
}

// ============================================================================
// [[modules]] Defaults
// ============================================================================

pub mod modules {
    use crate::registry::{ModuleConfig, builtin_modules};

    pub fn table() -> Vec<ModuleConfig> {
        builtin_modules()
    }
}
