//! No-op backend used when directory caching is off.

use crate::backend::{BackendKind, CacheBackend};

#[derive(Debug, Clone, Copy, Default)]
pub struct DummyBackend;

impl DummyBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CacheBackend for DummyBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Dummy
    }

    fn install(&self) -> Vec<String> {
        Vec::new()
    }

    fn fetch(&self) -> Vec<String> {
        Vec::new()
    }

    fn add(&self, _path: &str) -> Vec<String> {
        Vec::new()
    }

    fn push(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_nothing() {
        let backend = DummyBackend::new();
        assert_eq!(backend.kind(), BackendKind::Dummy);
        assert!(backend.install().is_empty());
        assert!(backend.fetch().is_empty());
        assert!(backend.add("/foo/bar").is_empty());
        assert!(backend.push().is_empty());
    }
}
