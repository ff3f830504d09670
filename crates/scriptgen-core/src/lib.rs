//! Script generator core
//!
//! Build data types and error handling for the build script generator.
//! This crate has minimal dependencies and defines the shared vocabulary
//! used by the cache and CLI crates.

pub mod build_data;
pub mod error;

pub use build_data::{
    BuildConfig, BuildData, CacheConfig, CacheOptions, Job, Repository, S3Options,
};
pub use error::{Error, Result};
