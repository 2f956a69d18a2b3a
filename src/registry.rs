//! Module registry: which page sections exist, which are on, in what order.
//!
//! The table is declared in `folio.toml` (or falls back to the built-in
//! table), validated once at startup, and read-only afterwards. Enabling or
//! disabling a module is a config edit, not a runtime operation.
//!
//! ```toml
//! [[modules]]
//! id = "hero"
//! name = "Hero Section"
//! enabled = true
//! order = 1
//! path = "modules/hero"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("module id must not be empty")]
    EmptyId,

    #[error("duplicate module id `{0}`")]
    DuplicateId(String),
}

/// Optional descriptive data about a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// One entry of the registry table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    pub id: String,
    pub name: String,
    #[serde(default = "crate::config::defaults::r#true")]
    pub enabled: bool,
    /// Render position, ascending. Ties keep declaration order.
    pub order: i32,
    /// Logical reference to the module's implementation.
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ModuleMetadata>,
}

impl ModuleConfig {
    fn builtin(id: &str, name: &str, order: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            order,
            path: format!("modules/{id}"),
            metadata: None,
        }
    }
}

/// Validated, immutable module table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: Vec<ModuleConfig>,
}

impl ModuleRegistry {
    /// Build a registry, rejecting empty or duplicate ids.
    pub fn new(modules: Vec<ModuleConfig>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if module.id.trim().is_empty() {
                return Err(RegistryError::EmptyId);
            }
            if !seen.insert(module.id.as_str()) {
                return Err(RegistryError::DuplicateId(module.id.clone()));
            }
        }
        Ok(Self { modules })
    }

    /// Default table: every section of a portfolio home page, all enabled.
    pub fn builtin() -> Self {
        Self {
            modules: builtin_modules(),
        }
    }

    /// Enabled modules, ascending by `order`.
    pub fn enabled_modules(&self) -> Vec<&ModuleConfig> {
        let mut enabled: Vec<_> = self.modules.iter().filter(|m| m.enabled).collect();
        // stable: equal orders stay in declaration order
        enabled.sort_by_key(|m| m.order);
        enabled
    }

    pub fn get(&self, id: &str) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Unknown ids count as disabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id).is_some_and(|m| m.enabled)
    }

    /// Every declared module, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleConfig> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The built-in module table.
pub fn builtin_modules() -> Vec<ModuleConfig> {
    vec![
        ModuleConfig::builtin("hero", "Hero Section", 1),
        ModuleConfig::builtin("about", "About Section", 2),
        ModuleConfig::builtin("experience", "Experience Section", 3),
        ModuleConfig::builtin("education", "Education Section", 4),
        ModuleConfig::builtin("skills", "Skills Section", 5),
        ModuleConfig::builtin("projects", "Projects Section", 6),
        ModuleConfig::builtin("contact", "Contact Section", 7),
    ]
}
