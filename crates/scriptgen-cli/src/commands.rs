//! CLI command definitions.

use clap::{Subcommand, ValueEnum};
use scriptgen_cache::CacheStage;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the directory cache commands for a build stage
    Cache {
        /// Stage: install, fetch, add, push, setup or teardown
        stage: CacheStage,

        /// Build description (YAML)
        #[arg(short, long, default_value = "build.yml")]
        build: PathBuf,

        /// Cache slug (defaults to the repository slug)
        #[arg(short, long)]
        slug: Option<String>,

        /// Reference time in Unix seconds (defaults to now)
        #[arg(short, long)]
        time: Option<i64>,
    },

    /// Show which cache backend a build selects
    Backend {
        /// Build description (YAML)
        #[arg(short, long, default_value = "build.yml")]
        build: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format of the `backend` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}
