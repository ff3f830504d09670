//! Where the cache hooks into a build script.

use crate::backend::CacheBackend;
use scriptgen_core::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStage {
    Install,
    Fetch,
    Add,
    Push,
    /// Install, fetch, then add every configured directory.
    Setup,
    /// Push after the build.
    Teardown,
}

impl CacheStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStage::Install => "install",
            CacheStage::Fetch => "fetch",
            CacheStage::Add => "add",
            CacheStage::Push => "push",
            CacheStage::Setup => "setup",
            CacheStage::Teardown => "teardown",
        }
    }

    /// Commands for this stage. `directories` is only read by `Add` and `Setup`.
    pub fn commands(&self, backend: &dyn CacheBackend, directories: &[String]) -> Vec<String> {
        match self {
            CacheStage::Install => backend.install(),
            CacheStage::Fetch => backend.fetch(),
            CacheStage::Add => add_all(backend, directories),
            CacheStage::Push => backend.push(),
            CacheStage::Setup => setup(backend, directories),
            CacheStage::Teardown => teardown(backend),
        }
    }
}

impl fmt::Display for CacheStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheStage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "install" => Ok(CacheStage::Install),
            "fetch" => Ok(CacheStage::Fetch),
            "add" => Ok(CacheStage::Add),
            "push" => Ok(CacheStage::Push),
            "setup" => Ok(CacheStage::Setup),
            "teardown" => Ok(CacheStage::Teardown),
            other => Err(Error::UnknownStage(other.to_string())),
        }
    }
}

/// Commands run before the build: install casher, restore the archive and
/// register each directory.
pub fn setup(backend: &dyn CacheBackend, directories: &[String]) -> Vec<String> {
    let mut commands = backend.install();
    commands.extend(backend.fetch());
    commands.extend(add_all(backend, directories));
    commands
}

/// Commands run after the build.
pub fn teardown(backend: &dyn CacheBackend) -> Vec<String> {
    backend.push()
}

fn add_all(backend: &dyn CacheBackend, directories: &[String]) -> Vec<String> {
    directories.iter().flat_map(|dir| backend.add(dir)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendKind;
    use crate::dummy::DummyBackend;

    struct RecordingBackend;

    impl CacheBackend for RecordingBackend {
        fn kind(&self) -> BackendKind {
            BackendKind::S3
        }

        fn install(&self) -> Vec<String> {
            vec!["install-1".to_string(), "install-2".to_string()]
        }

        fn fetch(&self) -> Vec<String> {
            vec!["fetch".to_string()]
        }

        fn add(&self, path: &str) -> Vec<String> {
            vec![format!("add {}", path)]
        }

        fn push(&self) -> Vec<String> {
            vec!["push".to_string()]
        }
    }

    fn dirs() -> Vec<String> {
        vec!["vendor".to_string(), "node_modules".to_string()]
    }

    #[test]
    fn test_setup_order() {
        assert_eq!(
            setup(&RecordingBackend, &dirs()),
            vec!["install-1", "install-2", "fetch", "add vendor", "add node_modules"]
        );
    }

    #[test]
    fn test_teardown() {
        assert_eq!(teardown(&RecordingBackend), vec!["push"]);
    }

    #[test]
    fn test_dummy_stages_are_empty() {
        for stage in ["install", "fetch", "add", "push", "setup", "teardown"] {
            let stage: CacheStage = stage.parse().unwrap();
            assert!(stage.commands(&DummyBackend::new(), &dirs()).is_empty());
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        let stage: CacheStage = "teardown".parse().unwrap();
        assert_eq!(stage, CacheStage::Teardown);
        assert_eq!(stage.to_string(), "teardown");
    }

    #[test]
    fn test_unknown_stage() {
        let err = "deploy".parse::<CacheStage>().unwrap_err();
        assert!(matches!(err, Error::UnknownStage(ref s) if s == "deploy"));
    }
}
