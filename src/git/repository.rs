use crate::error::Result;
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Creation time of a tag in seconds since the epoch
    fn tag_created_at(&self, tag_name: &str) -> Result<Option<i64>> {
        let reference = self.repo.find_reference(&format!("refs/tags/{}", tag_name))?;

        // Annotated tags carry their own date
        if let Some(oid) = reference.target() {
            if let Ok(tag) = self.repo.find_tag(oid) {
                if let Some(tagger) = tag.tagger() {
                    return Ok(Some(tagger.when().seconds()));
                }
            }
        }

        match reference.peel_to_commit() {
            Ok(commit) => Ok(Some(commit.time().seconds())),
            // Tags on trees or blobs have no date to order by
            Err(_) => Ok(None),
        }
    }
}

fn is_unborn(err: &git2::Error) -> bool {
    matches!(err.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound)
}

impl super::Repository for Git2Repository {
    fn head_commit_subject(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if is_unborn(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let commit = head.peel_to_commit()?;
        let subject = commit
            .summary()
            .map(|s| s.to_string())
            .or_else(|| {
                commit
                    .message()
                    .and_then(|m| m.lines().next())
                    .map(|s| s.to_string())
            });

        Ok(subject)
    }

    fn current_branch(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                // No commits yet, but HEAD still names a branch
                let head_ref = self.repo.find_reference("HEAD")?;
                return Ok(head_ref
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(|name| name.to_string()));
            }
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(None);
        }

        Ok(head.shorthand().map(|name| name.to_string()))
    }

    fn tags_newest_first(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;

        let mut dated = Vec::new();
        for name in names.iter().flatten() {
            match self.tag_created_at(name)? {
                Some(created_at) => dated.push((name.to_string(), created_at)),
                None => debug!(tag = name, "skipping tag without a commit"),
            }
        }

        Ok(super::sort_newest_first(dated))
    }
}
