use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::domain::tag::release_candidates;
use crate::domain::Version;
use crate::error::Result;
use crate::git::Repository;

/// Reads the current release version from a repository's tags
pub struct VersionStore<'a, R: Repository> {
    repo: &'a R,
    warnings: Vec<BoundaryWarning>,
}

impl<'a, R: Repository> VersionStore<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        VersionStore {
            repo,
            warnings: Vec::new(),
        }
    }

    /// Most recently created release tag and the version it carries
    ///
    /// Creation order decides, not numeric order: a `v1.0.5` tagged after
    /// `v2.0.0` is the latest release. A candidate whose numbers do not fit
    /// is skipped with a warning.
    pub fn latest_release(&mut self) -> Result<Option<(String, Version)>> {
        let tags = self.repo.tags_newest_first()?;
        debug!(tags = tags.len(), "read repository tags");

        for tag in release_candidates(&tags) {
            match Version::parse(tag) {
                Ok(version) => {
                    debug!(%tag, "selected release tag");
                    return Ok(Some((tag.to_string(), version)));
                }
                Err(e) => {
                    let warning = BoundaryWarning::UnusableVersionTag {
                        tag: tag.to_string(),
                        reason: e.to_string(),
                    };
                    debug!(%warning, "trying next release tag");
                    self.warnings.push(warning);
                }
            }
        }

        Ok(None)
    }

    /// Version of the latest release tag, or 0.0.0 when there is none
    pub fn latest_version(&mut self) -> Result<Version> {
        Ok(self
            .latest_release()?
            .map(|(_, version)| version)
            .unwrap_or_default())
    }

    /// Warnings collected while reading tags
    pub fn into_warnings(self) -> Vec<BoundaryWarning> {
        self.warnings
    }
}
