//! Read-only commands: `modules`, `publications`, `stats` and `check`.
//!
//! Each command renders its report into lines first and prints them
//! afterwards, so the rendering can be tested without a terminal.

use crate::{
    build::load_documents,
    cli::QueryArgs,
    config::SiteConfig,
    content::{ContentAdapter, ContentProvider},
    data::{StatsReport, bundle_file_names, compose_page},
    log,
    publications::{
        Category, PublicationPage, PublicationQuery, PublicationRecord, load_publications,
        try_load_publications,
    },
    registry::ModuleRegistry,
};
use anyhow::{Result, bail};
use chrono::Datelike;

// ============================================================================
// modules
// ============================================================================

pub fn list_modules(config: &SiteConfig, all: bool) -> Result<()> {
    let registry = config.registry()?;
    print_lines(&module_lines(&registry, all));
    Ok(())
}

pub fn show_module(config: &SiteConfig, id: &str) -> Result<()> {
    let registry = config.registry()?;
    print_lines(&module_detail_lines(&registry, id)?);
    Ok(())
}

fn module_lines(registry: &ModuleRegistry, all: bool) -> Vec<String> {
    let enabled = registry.enabled_modules();
    let enabled_count = enabled.len();
    let modules: Vec<_> = if all { registry.iter().collect() } else { enabled };

    let mut lines: Vec<String> = modules
        .into_iter()
        .map(|m| {
            let state = if m.enabled { "on" } else { "off" };
            format!("{:>3}  {:<14} {:<3}  {}", m.order, m.id, state, m.name)
        })
        .collect();
    lines.push(format!("{enabled_count} of {} modules enabled", registry.len()));
    lines
}

fn module_detail_lines(registry: &ModuleRegistry, id: &str) -> Result<Vec<String>> {
    let Some(module) = registry.get(id) else {
        bail!("unknown module `{id}`");
    };
    let state = if registry.is_enabled(id) { "enabled" } else { "disabled" };

    let mut lines = vec![
        format!("id           {}", module.id),
        format!("name         {}", module.name),
        format!("state        {state}"),
        format!("order        {}", module.order),
        format!("path         {}", module.path),
    ];
    if let Some(meta) = &module.metadata {
        let fields = [
            ("version", meta.version.as_deref()),
            ("author", meta.author.as_deref()),
            ("description", meta.description.as_deref()),
        ];
        lines.extend(
            fields
                .into_iter()
                .filter_map(|(label, value)| Some(format!("{label:<12} {}", value?))),
        );
        if !meta.dependencies.is_empty() {
            lines.push(format!("depends on   {}", meta.dependencies.join(", ")));
        }
    }
    Ok(lines)
}

// ============================================================================
// publications
// ============================================================================

pub fn query_publications(config: &SiteConfig, args: &QueryArgs) -> Result<()> {
    let data = load_publications(&config.content.publications);
    let query = PublicationQuery {
        search: args.search.clone(),
        category: args.category,
        status: args.status,
        sort: args.sort,
        page_size: args.page_size,
        page: args.page,
    };

    let page = query.run(&data.publications);
    if page.items.is_empty() && page.total > 0 {
        log!(
            "warn";
            "page {} is out of range, try --page {}",
            args.page,
            page.clamp_page(args.page)
        );
    }

    print_lines(&page_lines(&page));
    Ok(())
}

fn page_lines(page: &PublicationPage<'_>) -> Vec<String> {
    let mut lines: Vec<String> = page.items.iter().map(|p| record_line(p)).collect();
    lines.push(format!(
        "page {}/{} ({} matching)",
        page.page,
        page.page_count.max(1),
        page.total
    ));
    lines
}

fn record_line(record: &PublicationRecord) -> String {
    let category = record.category.map_or("-", Category::as_str);
    format!(
        "{:<4} {:>5}  {:<10} {}",
        record.year, record.citations, category, record.title
    )
}

// ============================================================================
// stats
// ============================================================================

pub fn show_stats(config: &SiteConfig) -> Result<()> {
    let (content, publications) = load_documents(config)?;
    let current_year = chrono::Local::now().year();
    let report = StatsReport::new(content.site_content(), &publications, current_year);
    print_lines(&stats_lines(&report));
    Ok(())
}

fn stats_lines(report: &StatsReport<'_>) -> Vec<String> {
    let profile = report.profile;
    let stats = &report.stats;
    let metrics = &report.metrics;

    let mut lines = vec![
        format!("profile       {} ({})", profile.name, profile.affiliation),
        format!(
            "scholar       {} citations, h-index {}, i10-index {}",
            profile.citations, profile.h_index, profile.i10_index
        ),
        format!(
            "publications  {} ({} featured)",
            stats.total_publications, metrics.featured_publications
        ),
        format!(
            "citations     {} total, {} on average",
            stats.total_citations, stats.average_citations
        ),
    ];

    lines.extend(
        Category::ALL
            .into_iter()
            .map(|c| format!("  {:<11} {}", c.as_str(), stats.count(c))),
    );

    let years: Vec<String> = report.years.iter().map(u32::to_string).collect();
    lines.push(format!("years         {}", years.join(", ")));
    lines.push(format!("keywords      {}", report.keywords.join(", ")));
    lines.push(format!("experience    {} years", metrics.years_experience));
    lines
}

// ============================================================================
// check
// ============================================================================

/// Load every document strictly, logging each problem.
///
/// Unlike `build`, a broken publications document is an error here.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let problems = collect_problems(config);

    if problems.is_empty() {
        log!(
            "check";
            "ok, {} bundle files would be written to {}",
            bundle_file_names().count(),
            config.content.data_dir().display()
        );
        return Ok(());
    }

    for problem in &problems {
        log!("error"; "{problem}");
    }
    bail!("{} problem(s) found", problems.len());
}

fn collect_problems(config: &SiteConfig) -> Vec<String> {
    let mut problems = Vec::new();

    let content = match ContentAdapter::load(&config.content.site) {
        Ok(content) => Some(content),
        Err(err) => {
            let err = anyhow::Error::from(err);
            problems.push(format!("{}: {err:#}", config.content.site.display()));
            None
        }
    };

    match try_load_publications(&config.content.publications) {
        Ok(data) if data.is_empty() => {
            log!("warn"; "{} has no publications", config.content.publications.display());
        }
        Ok(_) => {}
        Err(err) => problems.push(format!(
            "{}: {:#}",
            config.content.publications.display(),
            anyhow::Error::from(err)
        )),
    }

    match config.registry() {
        Ok(registry) => {
            if let Some(content) = &content {
                for warning in page_warnings(&registry, content) {
                    log!("warn"; "{warning}");
                }
            }
        }
        Err(err) => problems.push(format!("{err:#}")),
    }

    problems
}

/// Composition issues that still let the page render.
///
/// Unknown module ids are already logged by [`compose_page`].
fn page_warnings(registry: &ModuleRegistry, content: &ContentAdapter) -> Vec<String> {
    if registry.is_empty() {
        return vec!["no modules declared, the page will be empty".into()];
    }

    let plan = compose_page(registry, content);
    if plan.is_empty() {
        return vec!["no enabled module matches a content section".into()];
    }

    let warnings: Vec<String> = plan
        .sections
        .iter()
        .filter(|s| s.data.is_empty())
        .map(|s| format!("module `{}` is enabled but its `{}` section is empty", s.id, s.section))
        .collect();

    log!("check"; "page: {}", plan.ids().collect::<Vec<_>>().join(", "));
    warnings
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
