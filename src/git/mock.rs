use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    head_subject: Option<String>,
    branch: Option<String>,
    tags: Vec<(String, i64)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject of the HEAD commit
    pub fn with_head_subject(mut self, subject: impl Into<String>) -> Self {
        self.head_subject = Some(subject.into());
        self
    }

    /// Set the checked-out branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Add a tag created at `created_at` (seconds since the epoch)
    pub fn with_tag(mut self, name: impl Into<String>, created_at: i64) -> Self {
        self.tags.push((name.into(), created_at));
        self
    }
}

impl Repository for MockRepository {
    fn head_commit_subject(&self) -> Result<Option<String>> {
        Ok(self.head_subject.clone())
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn tags_newest_first(&self) -> Result<Vec<String>> {
        Ok(super::sort_newest_first(self.tags.clone()))
    }
}
