//! Home page composition from the module registry.

use crate::{
    content::{ContentProvider, Section, SectionRef},
    log,
    registry::ModuleRegistry,
};
use serde::Serialize;

/// One rendered slot of the page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSection<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub order: i32,
    pub section: Section,
    pub data: SectionRef<'a>,
}

/// Enabled modules resolved against the content, in render order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PagePlan<'a> {
    pub sections: Vec<PageSection<'a>>,
    /// Enabled module ids with no matching section.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<&'a str>,
}

impl PagePlan<'_> {
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id)
    }
}

/// Resolve every enabled module to its content section.
///
/// Module ids are matched against section names; ids that name no section
/// are logged and left out of the plan.
pub fn compose_page<'a, P>(registry: &'a ModuleRegistry, content: &'a P) -> PagePlan<'a>
where
    P: ContentProvider + ?Sized,
{
    let mut plan = PagePlan::default();

    for module in registry.enabled_modules() {
        match module.id.parse::<Section>() {
            Ok(section) => plan.sections.push(PageSection {
                id: &module.id,
                name: &module.name,
                order: module.order,
                section,
                data: content.section(section),
            }),
            Err(err) => {
                log!("warn"; "skipping module `{}`: {err}", module.id);
                plan.skipped.push(&module.id);
            }
        }
    }

    plan
}
