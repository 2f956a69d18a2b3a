//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::publications::{CategoryFilter, SortKey, StatusFilter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio portfolio content engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Site content document (relative to project root)
    #[arg(long)]
    pub site: Option<PathBuf>,

    /// Publications document (relative to project root)
    #[arg(long)]
    pub publications: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments of the `build` command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Remove the data directory before writing
    #[arg(long)]
    pub clean: bool,

    /// Write compact JSON instead of pretty-printed JSON
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// enable analytics flag in the bundle
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub analytics: Option<bool>,

    /// enable contact form flag in the bundle
    #[arg(long = "contact-form", action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub contact_form: Option<bool>,
}

/// Arguments of the `publications` command
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Free-text search over title, authors, abstract and venue
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// journal, conference, preprint, dataset, workshop or all
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,

    /// published, under-review, accepted or all
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortKey::Year)]
    pub sort: SortKey,

    /// Results per page
    #[arg(long, default_value_t = crate::publications::query::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load all content and write the data bundle to the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// List modules in render order, or show one module
    Modules {
        /// module id to show
        id: Option<String>,

        /// include disabled modules
        #[arg(short, long, conflicts_with = "id")]
        all: bool,
    },

    /// Search, filter, sort and page through publications
    Publications {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Print publication statistics and research metrics
    Stats,

    /// Validate config, content and publications strictly
    Check,
}
