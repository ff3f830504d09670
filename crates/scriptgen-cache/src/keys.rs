//! Cache namespace and archive key generation.

/// Where in the bucket a repository's cache archives live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheNamespace {
    github_id: u64,
    slug: String,
}

impl CacheNamespace {
    pub fn new(github_id: u64, slug: impl Into<String>) -> Self {
        Self {
            github_id,
            slug: slug.into(),
        }
    }

    pub fn github_id(&self) -> u64 {
        self.github_id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Archive path for a branch: `/<github-id>/<branch>/<slug>.tbz`.
    pub fn branch_path(&self, branch: &str) -> String {
        self.archive_path(Some(branch))
    }

    /// Branch-less archive path shared by all branches: `/<github-id>/<slug>.tbz`.
    pub fn global_path(&self) -> String {
        self.archive_path(None)
    }

    fn archive_path(&self, branch: Option<&str>) -> String {
        let id = self.github_id.to_string();
        let segments: Vec<String> = [Some(id.as_str()), branch, Some(self.slug.as_str())]
            .into_iter()
            .flatten()
            .map(sanitize_segment)
            .collect();

        format!("/{}.tbz", segments.join("/"))
    }
}

/// Strip everything but `[A-Za-z0-9_.-]` from a key segment.
pub fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect()
}
