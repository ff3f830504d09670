//! Command handlers.

use crate::commands::OutputFormat;
use chrono::{DateTime, TimeZone, Utc};
use scriptgen_cache::{
    BackendKind, CacheStage, CasherBranch, backend_kind, build_backend, casher_branch,
    use_directory_cache,
};
use scriptgen_core::{BuildData, Error};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Slug used when nothing else names one.
const DEFAULT_SLUG: &str = "cache";

/// Print the cache commands of one stage, one per line.
pub fn cache_commands(
    stage: CacheStage,
    build: &Path,
    slug: Option<String>,
    time: Option<i64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = BuildData::from_file(build)?;
    let started_at = reference_time(time)?;
    let slug = resolve_slug(slug, &data);

    for command in render_cache_commands(&data, stage, &slug, started_at)? {
        println!("{}", command);
    }
    Ok(())
}

/// Commands for `stage`, with every URL expiry relative to `started_at`.
pub fn render_cache_commands(
    data: &BuildData,
    stage: CacheStage,
    slug: &str,
    started_at: DateTime<Utc>,
) -> scriptgen_core::Result<Vec<String>> {
    let backend = build_backend(data, slug, started_at)?;
    let commands = stage.commands(backend.as_ref(), &data.config.cache.directories);

    info!(
        stage = %stage,
        backend = %backend.kind(),
        commands = commands.len(),
        "Rendered cache commands"
    );
    Ok(commands)
}

/// Resolve the reference instant once, so fetch and push share it.
pub fn reference_time(time: Option<i64>) -> scriptgen_core::Result<DateTime<Utc>> {
    match time {
        Some(secs) => Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| Error::InvalidConfig(format!("Invalid reference time: {}", secs))),
        None => Ok(Utc::now()),
    }
}

/// `--slug`, then the repository slug, then `cache`.
pub fn resolve_slug(flag: Option<String>, data: &BuildData) -> String {
    flag.or_else(|| Some(data.repository.slug.clone()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_SLUG.to_string())
}

/// Backend selection summary.
#[derive(Debug, Serialize)]
pub struct BackendReport {
    pub backend: BackendKind,
    pub enabled: bool,
    pub casher_branch: CasherBranch,
    pub directories: Vec<String>,
}

impl BackendReport {
    pub fn for_build(data: &BuildData) -> Self {
        let cache = &data.config.cache;
        Self {
            backend: backend_kind(data),
            enabled: use_directory_cache(cache),
            casher_branch: casher_branch(cache),
            directories: cache.directories.clone(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, Box<dyn std::error::Error>> {
        Ok(match format {
            OutputFormat::Text => {
                let mut out = format!(
                    "backend: {}\nenabled: {}\ncasher_branch: {}",
                    self.backend, self.enabled, self.casher_branch
                );
                for dir in &self.directories {
                    out.push_str(&format!("\n  - {}", dir));
                }
                out
            }
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }
}

/// Show the backend a build selects.
pub fn show_backend(build: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let data = BuildData::from_file(build)?;
    let report = BackendReport::for_build(&data);
    println!("{}", report.render(format)?);
    Ok(())
}
