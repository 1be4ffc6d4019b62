use std::fmt;

use crate::domain::DetectionMode;

/// Non-fatal conditions met while detecting a release.
/// These should be reported to the user but never change the exit status.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The selected source carried no change token
    NoTokenDetected { mode: DetectionMode },
    /// A token was found but no category lists it
    UnmappedToken {
        token: String,
        categories: Vec<String>,
    },
    /// The event payload file exists but could not be used
    EventPayloadUnreadable { path: String, reason: String },
    /// No git repository could be opened; tags are treated as absent
    RepositoryUnavailable { reason: String },
    /// A version-shaped tag whose numbers do not fit; the next candidate is used
    UnusableVersionTag { tag: String, reason: String },
    /// No version-shaped tag exists, so counting starts at 0.0.0
    NoVersionTags,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTokenDetected { mode } => {
                let source = match mode {
                    DetectionMode::Commit => "the latest commit subject",
                    DetectionMode::Branch => "the branch name",
                    DetectionMode::Label => "the pull request labels",
                };
                write!(f, "No change token found in {}", source)
            }
            BoundaryWarning::UnmappedToken { token, categories } => {
                write!(
                    f,
                    "Change token '{}' is not listed under any category ({})",
                    token,
                    categories.join(", ")
                )
            }
            BoundaryWarning::EventPayloadUnreadable { path, reason } => {
                write!(f, "Cannot read event payload '{}': {}", path, reason)
            }
            BoundaryWarning::RepositoryUnavailable { reason } => {
                write!(f, "No git repository available: {}", reason)
            }
            BoundaryWarning::UnusableVersionTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NoVersionTags => {
                write!(f, "No version tags found, starting from 0.0.0")
            }
        }
    }
}
