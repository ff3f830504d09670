//! Fetch fallback chain.
//!
//! A fetch tries, in order, the current branch's archive, the `master`
//! archive and the repository-wide archive. The casher tool stops at the
//! first URL that answers.

use crate::keys::{CacheNamespace, sanitize_segment};
use crate::signing::{SignedRequest, Verb};

/// Branch whose cache feature branches fall back to.
pub const DEFAULT_BRANCH: &str = "master";

/// Ordered, non-empty list of fetch requests, most specific first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    requests: Vec<SignedRequest>,
}

impl FallbackChain {
    /// Build the chain for `branch`, every entry expiring at `expires`.
    pub fn for_branch(namespace: &CacheNamespace, branch: &str, expires: i64) -> Self {
        let mut requests = vec![SignedRequest::new(
            Verb::Get,
            namespace.branch_path(branch),
            expires,
        )];

        // Compare the key segment so `master/` or `mas ter` do not repeat master.
        if sanitize_segment(branch) != DEFAULT_BRANCH {
            requests.push(SignedRequest::new(
                Verb::Get,
                namespace.branch_path(DEFAULT_BRANCH),
                expires,
            ));
        }

        requests.push(SignedRequest::new(Verb::Get, namespace.global_path(), expires));

        Self { requests }
    }

    pub fn requests(&self) -> &[SignedRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignedRequest> {
        self.requests.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace() -> CacheNamespace {
        CacheNamespace::new(42, "ex a/mple")
    }

    #[test]
    fn test_master_chain_skips_duplicate() {
        let chain = FallbackChain::for_branch(&namespace(), "master", 30);
        let resources: Vec<&str> = chain.iter().map(|r| r.resource.as_str()).collect();

        assert_eq!(chain.len(), 2);
        assert_eq!(resources, vec!["/42/master/example.tbz", "/42/example.tbz"]);
    }

    #[test]
    fn test_feature_branch_chain() {
        let chain = FallbackChain::for_branch(&namespace(), "featurefoo", 30);
        let resources: Vec<&str> = chain.iter().map(|r| r.resource.as_str()).collect();

        assert_eq!(chain.len(), 3);
        assert_eq!(
            resources,
            vec![
                "/42/featurefoo/example.tbz",
                "/42/master/example.tbz",
                "/42/example.tbz"
            ]
        );
    }

    #[test]
    fn test_branch_sanitizing_to_master_skips_duplicate() {
        for branch in ["mas ter", "master/"] {
            let chain = FallbackChain::for_branch(&namespace(), branch, 30);
            let resources: Vec<&str> = chain.iter().map(|r| r.resource.as_str()).collect();
            assert_eq!(resources, vec!["/42/master/example.tbz", "/42/example.tbz"]);
        }
    }

    #[test]
    fn test_chain_shares_verb_and_expiry() {
        let chain = FallbackChain::for_branch(&namespace(), "featurefoo", 30);
        assert!(!chain.is_empty());
        assert!(chain.iter().all(|r| r.verb == Verb::Get && r.expires == 30));
    }
}
