use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::{BumpError, Result};

/// Short, case-sensitive string naming the kind of change (e.g. "feature")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeToken(String);

impl ChangeToken {
    /// Build a token from raw text; whitespace-only text is not a token
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(ChangeToken(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token from a commit subject: `[token] rest` first, then `token: rest`
    pub fn from_commit_subject(subject: &str) -> Option<Self> {
        let subject = subject.lines().next().unwrap_or("");

        // Case 1: [token] description
        if let Some(captures) = Regex::new(r"^\[([^\]]+)\]")
            .ok()
            .and_then(|re| re.captures(subject))
        {
            return captures.get(1).and_then(|m| ChangeToken::new(m.as_str()));
        }

        // Case 2: token: description
        if let Some(captures) = Regex::new(r"^([^:]+):")
            .ok()
            .and_then(|re| re.captures(subject))
        {
            return captures.get(1).and_then(|m| ChangeToken::new(m.as_str()));
        }

        None
    }

    /// Token from a branch name: the segment before the first `/`
    pub fn from_branch_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix("refs/heads/").unwrap_or(name);
        let (prefix, _) = name.split_once('/')?;
        ChangeToken::new(prefix)
    }

    /// Token from a whitespace-separated label list: the first word
    pub fn from_label_list(labels: &str) -> Option<Self> {
        labels.split_whitespace().next().and_then(ChangeToken::new)
    }
}

impl fmt::Display for ChangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the change token is read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetectionMode {
    Commit,
    Branch,
    #[default]
    Label,
}

impl FromStr for DetectionMode {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "commit" => Ok(DetectionMode::Commit),
            "branch" => Ok(DetectionMode::Branch),
            "label" => Ok(DetectionMode::Label),
            other => Err(BumpError::config(format!(
                "invalid type '{}': expected one of commit, branch, label",
                other
            ))),
        }
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectionMode::Commit => "commit",
            DetectionMode::Branch => "branch",
            DetectionMode::Label => "label",
        };
        f.write_str(name)
    }
}
