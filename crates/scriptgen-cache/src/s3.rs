//! S3 backend: casher driven by pre-signed bucket URLs.

use crate::backend::{BackendKind, CacheBackend};
use crate::chain::FallbackChain;
use crate::emitter::{CasherBranch, casher_command, install_commands};
use crate::keys::CacheNamespace;
use crate::signing::{SignedRequest, UrlSigner, Verb};
use chrono::{DateTime, Utc};
use scriptgen_core::{BuildData, Error, Result};
use tracing::debug;

/// S3 directory cache for one build.
///
/// `started_at` is captured once; fetch and push expiries are both derived
/// from it so every URL of a build is reproducible.
#[derive(Debug, Clone)]
pub struct S3Backend {
    signer: UrlSigner,
    namespace: CacheNamespace,
    branch: String,
    casher_branch: CasherBranch,
    fetch_timeout: u64,
    push_timeout: u64,
    started_at: DateTime<Utc>,
}

impl S3Backend {
    pub fn new(
        data: &BuildData,
        slug: &str,
        casher_branch: CasherBranch,
        started_at: DateTime<Utc>,
    ) -> Result<Self> {
        let options = &data.cache_options;
        let s3 = options.s3.clone().ok_or_else(|| {
            Error::InvalidConfig("cache type is s3 but no s3 options are set".into())
        })?;

        if options.fetch_timeout == 0 || options.push_timeout == 0 {
            return Err(Error::InvalidConfig(format!(
                "cache timeouts must be positive (fetch_timeout={}, push_timeout={})",
                options.fetch_timeout, options.push_timeout
            )));
        }

        debug!(
            bucket = %s3.bucket,
            github_id = data.repository.github_id,
            branch = %data.branch(),
            slug = %slug,
            "Configured S3 directory cache"
        );

        Ok(Self {
            signer: UrlSigner::new(s3),
            namespace: CacheNamespace::new(data.repository.github_id, slug),
            branch: data.branch().to_string(),
            casher_branch,
            fetch_timeout: options.fetch_timeout,
            push_timeout: options.push_timeout,
            started_at,
        })
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn casher_branch(&self) -> CasherBranch {
        self.casher_branch
    }

    pub fn namespace(&self) -> &CacheNamespace {
        &self.namespace
    }

    fn expires_after(&self, timeout: u64) -> i64 {
        self.started_at.timestamp().saturating_add_unsigned(timeout)
    }

    /// Requests tried by a fetch, most specific first.
    pub fn fetch_chain(&self) -> FallbackChain {
        FallbackChain::for_branch(
            &self.namespace,
            &self.branch,
            self.expires_after(self.fetch_timeout),
        )
    }

    /// The single upload target: the current branch's archive.
    pub fn push_request(&self) -> SignedRequest {
        SignedRequest::new(
            Verb::Put,
            self.namespace.branch_path(&self.branch),
            self.expires_after(self.push_timeout),
        )
    }

    pub fn fetch_urls(&self) -> Vec<String> {
        self.fetch_chain()
            .iter()
            .map(|request| self.signer.url(request))
            .collect()
    }

    pub fn push_url(&self) -> String {
        self.signer.url(&self.push_request())
    }
}

impl CacheBackend for S3Backend {
    fn kind(&self) -> BackendKind {
        BackendKind::S3
    }

    fn install(&self) -> Vec<String> {
        install_commands(self.casher_branch)
    }

    fn fetch(&self) -> Vec<String> {
        vec![casher_command("fetch", &self.fetch_urls())]
    }

    fn add(&self, path: &str) -> Vec<String> {
        vec![casher_command("add", &[path])]
    }

    fn push(&self) -> Vec<String> {
        vec![casher_command("push", &[self.push_url()])]
    }
}
