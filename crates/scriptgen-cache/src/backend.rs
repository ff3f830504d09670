//! Cache backend trait.

use serde::Serialize;
use std::fmt;

/// Backend variants the selector can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Dummy,
    S3,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Dummy => "dummy",
            BackendKind::S3 => "s3",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for directory cache backends.
///
/// Every operation returns the shell commands to run, in order. Nothing is
/// executed here.
pub trait CacheBackend: Send + Sync {
    /// Which variant this is.
    fn kind(&self) -> BackendKind;

    /// Install the casher tool.
    fn install(&self) -> Vec<String>;

    /// Restore cached directories before the build.
    fn fetch(&self) -> Vec<String>;

    /// Register a directory to be cached.
    fn add(&self, path: &str) -> Vec<String>;

    /// Upload the updated archive after the build.
    fn push(&self) -> Vec<String>;
}
