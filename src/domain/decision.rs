use std::fmt;

use super::token::{ChangeToken, DetectionMode};
use super::version::Version;

/// Why no release is needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The selected source carried no change token
    NoToken { mode: DetectionMode },
    /// A token was found but no category lists it
    Unmapped { token: ChangeToken },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoToken { mode } => write!(f, "no change token found in {} source", mode),
            SkipReason::Unmapped { token } => {
                write!(f, "change token '{}' is not mapped to a bump category", token)
            }
        }
    }
}

/// Outcome of a detection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseDecision {
    Release { version: Version },
    Skip { reason: SkipReason },
}

impl ReleaseDecision {
    pub fn release_needed(&self) -> bool {
        matches!(self, ReleaseDecision::Release { .. })
    }

    pub fn version(&self) -> Option<Version> {
        match self {
            ReleaseDecision::Release { version } => Some(*version),
            ReleaseDecision::Skip { .. } => None,
        }
    }
}
