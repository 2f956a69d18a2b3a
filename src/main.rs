//! Folio - a content engine for portfolio sites.

mod build;
mod cli;
mod config;
mod content;
mod data;
mod inspect;
mod logger;
mod publications;
mod registry;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use inspect::{check_site, list_modules, query_publications, show_module, show_stats};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { build_args } => build_site(&config, build_args.clean).map(|_| ()),
        Commands::Modules { id: Some(id), .. } => show_module(&config, id),
        Commands::Modules { id: None, all } => list_modules(&config, *all),
        Commands::Publications { query } => query_publications(&config, query),
        Commands::Stats => show_stats(&config),
        Commands::Check => check_site(&config),
    }
}
