//! Build data types.
//!
//! These types describe a single build as handed to the script generator:
//! the user-authored `cache:` block, the operator-provided cache options and
//! the repository/job the build belongs to.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildData {
    #[serde(default)]
    pub config: BuildConfig,
    #[serde(default)]
    pub cache_options: CacheOptions,
    pub repository: Repository,
    pub job: Job,
}

impl BuildData {
    /// Parse build data from a YAML (or JSON) document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load build data from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn branch(&self) -> &str {
        &self.job.branch
    }
}

/// User-authored build configuration. Only the parts the cache reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub cache: CacheConfig,
}

/// The `cache:` block of a build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directories to cache between builds.
    #[serde(default)]
    pub directories: Vec<String>,
    /// Use the edge channel of the casher tool.
    #[serde(default)]
    pub edge: bool,
}

/// Operator-provided cache settings, fixed for the lifetime of a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheOptions {
    /// Seconds a fetch URL stays valid.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,
    /// Seconds a push URL stays valid.
    #[serde(default = "default_push_timeout")]
    pub push_timeout: u64,
    /// Backend name, e.g. `s3`.
    #[serde(rename = "type", default)]
    pub backend_type: Option<String>,
    #[serde(default)]
    pub s3: Option<S3Options>,
}

fn default_fetch_timeout() -> u64 {
    1200
}

fn default_push_timeout() -> u64 {
    1800
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            fetch_timeout: default_fetch_timeout(),
            push_timeout: default_push_timeout(),
            backend_type: None,
            s3: None,
        }
    }
}

/// Bucket and credentials for the S3 backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Options {
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl fmt::Debug for S3Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Options")
            .field("bucket", &self.bucket)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub github_id: u64,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub branch: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_options_defaults() {
        let options: CacheOptions = serde_yaml::from_str("type: s3").unwrap();
        assert_eq!(options.fetch_timeout, 1200);
        assert_eq!(options.push_timeout, 1800);
        assert_eq!(options.backend_type.as_deref(), Some("s3"));
        assert!(options.s3.is_none());
    }

    #[test]
    fn test_s3_options_debug_redacts_secret() {
        let s3 = S3Options {
            bucket: "bucket".to_string(),
            access_key_id: "id".to_string(),
            secret_access_key: "very-secret".to_string(),
        };
        let debug = format!("{:?}", s3);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_empty_cache_block() {
        let config: BuildConfig = serde_yaml::from_str("cache: {}").unwrap();
        assert!(config.cache.directories.is_empty());
        assert!(!config.cache.edge);
    }
}
