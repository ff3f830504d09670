//! Backend selection from build configuration.

use crate::backend::{BackendKind, CacheBackend};
use crate::dummy::DummyBackend;
use crate::emitter::CasherBranch;
use crate::s3::S3Backend;
use chrono::{DateTime, Utc};
use scriptgen_core::{BuildData, CacheConfig, Result};
use tracing::debug;

/// Directory caching is on when at least one directory is configured.
pub fn use_directory_cache(cache: &CacheConfig) -> bool {
    !cache.directories.is_empty()
}

/// Casher channel: edge builds track `master`, everything else `production`.
pub fn casher_branch(cache: &CacheConfig) -> CasherBranch {
    if cache.edge {
        CasherBranch::Master
    } else {
        CasherBranch::Production
    }
}

/// Backend variant for a build. Unknown or missing types fall back to Dummy.
pub fn backend_kind(data: &BuildData) -> BackendKind {
    if !use_directory_cache(&data.config.cache) {
        return BackendKind::Dummy;
    }

    match data.cache_options.backend_type.as_deref() {
        Some(t) if t.eq_ignore_ascii_case("s3") => BackendKind::S3,
        _ => BackendKind::Dummy,
    }
}

/// Create the cache backend for a build.
///
/// `started_at` is the reference instant all URL expiries are computed from.
pub fn build_backend(
    data: &BuildData,
    slug: &str,
    started_at: DateTime<Utc>,
) -> Result<Box<dyn CacheBackend>> {
    let kind = backend_kind(data);
    let branch = casher_branch(&data.config.cache);

    debug!(backend = %kind, casher_branch = %branch, "Selected directory cache backend");

    match kind {
        BackendKind::Dummy => Ok(Box::new(DummyBackend::new())),
        BackendKind::S3 => Ok(Box::new(S3Backend::new(data, slug, branch, started_at)?)),
    }
}
