//! Directory cache for generated build scripts (casher over S3).

pub mod backend;
pub mod chain;
pub mod dummy;
pub mod emitter;
pub mod escape;
pub mod keys;
pub mod s3;
pub mod selector;
pub mod signing;
pub mod stage;

pub use backend::{BackendKind, CacheBackend};
pub use chain::FallbackChain;
pub use dummy::DummyBackend;
pub use emitter::CasherBranch;
pub use escape::shell_escape;
pub use keys::{CacheNamespace, sanitize_segment};
pub use s3::S3Backend;
pub use selector::{backend_kind, build_backend, casher_branch, use_directory_cache};
pub use signing::{SignedRequest, UrlSigner, Verb};
pub use stage::{CacheStage, setup, teardown};
