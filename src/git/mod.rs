//! Git access abstraction layer
//!
//! Everything bump-detect reads from git goes through the [Repository] trait:
//! the subject of the latest commit, the checked-out branch and the tag
//! history. Two implementations exist:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for tests
//!
//! None of the operations write to the repository.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only view of the git state bump-detect depends on
///
/// ## Error Handling
///
/// An empty repository is not an error: methods return `Ok(None)` or an
/// empty list. Errors are reserved for failures reading the object database
/// and are mapped to [crate::error::BumpError::Git].
pub trait Repository {
    /// Subject line of the most recent commit on `HEAD`
    ///
    /// # Returns
    /// * `Ok(Some(subject))` - First line of the HEAD commit message
    /// * `Ok(None)` - If the repository has no commits yet
    /// * `Err` - If HEAD cannot be read
    fn head_commit_subject(&self) -> Result<Option<String>>;

    /// Name of the checked-out branch, without `refs/heads/`
    ///
    /// # Returns
    /// * `Ok(Some(name))` - Branch `HEAD` points at
    /// * `Ok(None)` - If `HEAD` is detached
    fn current_branch(&self) -> Result<Option<String>>;

    /// All tag names, most recently created first
    ///
    /// Annotated tags are dated by their tagger, lightweight tags by the
    /// commit they point at. Tags created at the same second are ordered by
    /// name, ascending, as `git tag --sort=-creatordate` lists them.
    fn tags_newest_first(&self) -> Result<Vec<String>>;
}

/// Order `(name, created_at)` pairs newest first, breaking ties by name ascending
pub(crate) fn sort_newest_first(mut tags: Vec<(String, i64)>) -> Vec<String> {
    tags.sort_by(|(a_name, a_time), (b_name, b_time)| {
        b_time.cmp(a_time).then_with(|| a_name.cmp(b_name))
    });
    tags.into_iter().map(|(name, _)| name).collect()
}
