//! Loading tests for build data documents.

use pretty_assertions::assert_eq;
use scriptgen_core::{BuildData, CacheConfig, Error, Job, Repository, S3Options};
use std::io::Write;

const BUILD_YAML: &str = r#"
config:
  cache:
    directories:
      - vendor/bundle
      - node_modules
    edge: true
cache_options:
  fetch_timeout: 20
  push_timeout: 30
  type: s3
  s3:
    bucket: s3_bucket
    access_key_id: s3_access_key_id
    secret_access_key: s3_secret_access_key
repository:
  github_id: 42
  slug: travis-ci/example
job:
  branch: featurefoo
"#;

#[test]
fn test_load_full_build() {
    let data = BuildData::from_yaml(BUILD_YAML).expect("parse");

    assert_eq!(
        data.config.cache,
        CacheConfig {
            directories: vec!["vendor/bundle".to_string(), "node_modules".to_string()],
            edge: true,
        }
    );
    assert_eq!(data.cache_options.fetch_timeout, 20);
    assert_eq!(data.cache_options.push_timeout, 30);
    assert_eq!(data.cache_options.backend_type.as_deref(), Some("s3"));
    assert_eq!(
        data.cache_options.s3,
        Some(S3Options {
            bucket: "s3_bucket".to_string(),
            access_key_id: "s3_access_key_id".to_string(),
            secret_access_key: "s3_secret_access_key".to_string(),
        })
    );
    assert_eq!(
        data.repository,
        Repository {
            github_id: 42,
            slug: "travis-ci/example".to_string(),
        }
    );
    assert_eq!(
        data.job,
        Job {
            branch: "featurefoo".to_string(),
        }
    );
    assert_eq!(data.branch(), "featurefoo");
}

#[test]
fn test_load_minimal_build() {
    let data = BuildData::from_yaml("repository: { github_id: 7 }\njob: { branch: master }\n")
        .expect("parse");

    assert!(data.config.cache.directories.is_empty());
    assert!(data.cache_options.backend_type.is_none());
    assert_eq!(data.cache_options.fetch_timeout, 1200);
    assert_eq!(data.cache_options.push_timeout, 1800);
    assert_eq!(data.repository.github_id, 7);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BUILD_YAML.as_bytes()).unwrap();

    let data = BuildData::from_file(file.path()).expect("load");
    assert_eq!(data.repository.github_id, 42);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BuildData::from_file(&dir.path().join("missing.yml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_invalid_document_is_serialization_error() {
    let err = BuildData::from_yaml("repository: [not, a, map]").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}
