//! CI event payload (the JSON document a workflow run was triggered with)

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// The parts of an event payload bump-detect reads
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub name: String,
}

impl EventPayload {
    /// Parse a payload from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse the payload file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Pull-request label names in the order the event lists them
    pub fn label_names(&self) -> Vec<&str> {
        self.pull_request
            .as_ref()
            .map(|pr| pr.labels.iter().map(|label| label.name.as_str()).collect())
            .unwrap_or_default()
    }
}
