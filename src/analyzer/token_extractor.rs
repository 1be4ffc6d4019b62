use std::path::PathBuf;

use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::domain::{ChangeToken, DetectionMode};
use crate::error::Result;
use crate::event::EventPayload;
use crate::git::Repository;

/// Externally supplied context the extractor consults before git
#[derive(Debug, Clone, Default)]
pub struct DetectionContext {
    /// Source branch of a pull request
    pub head_ref: Option<String>,
    /// Ref name of the triggering event
    pub ref_name: Option<String>,
    /// Path to the event payload JSON
    pub event_path: Option<PathBuf>,
    /// Space-separated labels used when the payload has none
    pub fallback_labels: Option<String>,
}

impl DetectionContext {
    /// Externally supplied branch name, pull request head ref first
    pub fn supplied_branch(&self) -> Option<&str> {
        [self.head_ref.as_deref(), self.ref_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
    }
}

/// Reads a change token from the source a [DetectionMode] selects
pub struct TokenExtractor<'a, R: Repository> {
    context: &'a DetectionContext,
    repo: Option<&'a R>,
    warnings: Vec<BoundaryWarning>,
}

impl<'a, R: Repository> TokenExtractor<'a, R> {
    pub fn new(context: &'a DetectionContext, repo: Option<&'a R>) -> Self {
        TokenExtractor {
            context,
            repo,
            warnings: Vec::new(),
        }
    }

    /// Extract the token, or `None` when the source has none.
    ///
    /// A missing token is a normal outcome; only git read failures are errors.
    pub fn extract(&mut self, mode: DetectionMode) -> Result<Option<ChangeToken>> {
        let token = match mode {
            DetectionMode::Commit => self.from_commit()?,
            DetectionMode::Branch => self.from_branch()?,
            DetectionMode::Label => self.from_labels(),
        };

        match &token {
            Some(token) => debug!(%mode, %token, "detected change token"),
            None => self.warnings.push(BoundaryWarning::NoTokenDetected { mode }),
        }

        Ok(token)
    }

    /// Warnings collected while extracting
    pub fn into_warnings(self) -> Vec<BoundaryWarning> {
        self.warnings
    }

    fn from_commit(&self) -> Result<Option<ChangeToken>> {
        let Some(repo) = self.repo else {
            return Ok(None);
        };

        let subject = repo.head_commit_subject()?;
        debug!(subject = ?subject, "read latest commit subject");

        Ok(subject.as_deref().and_then(ChangeToken::from_commit_subject))
    }

    fn from_branch(&self) -> Result<Option<ChangeToken>> {
        if let Some(name) = self.context.supplied_branch() {
            debug!(branch = name, "using supplied branch name");
            return Ok(ChangeToken::from_branch_name(name));
        }

        let Some(repo) = self.repo else {
            return Ok(None);
        };

        let branch = repo.current_branch()?;
        debug!(branch = ?branch, "read checked-out branch");

        Ok(branch.as_deref().and_then(ChangeToken::from_branch_name))
    }

    fn from_labels(&mut self) -> Option<ChangeToken> {
        if let Some(payload) = self.load_event() {
            let labels = payload.label_names();
            debug!(?labels, "read pull request labels from event payload");
            if let Some(token) = labels.first().and_then(|label| ChangeToken::new(label)) {
                return Some(token);
            }
        }

        self.context
            .fallback_labels
            .as_deref()
            .and_then(ChangeToken::from_label_list)
    }

    fn load_event(&mut self) -> Option<EventPayload> {
        let path = self.context.event_path.as_ref()?;
        if !path.exists() {
            debug!(path = %path.display(), "event payload not present");
            return None;
        }

        match EventPayload::load(path) {
            Ok(payload) => Some(payload),
            Err(e) => {
                let warning = BoundaryWarning::EventPayloadUnreadable {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                };
                debug!(%warning, "falling back to supplied labels");
                self.warnings.push(warning);
                None
            }
        }
    }
}
