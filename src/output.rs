//! The three values a detection run reports: `version`, `release_needed`, `release_id`

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::domain::ReleaseDecision;
use crate::error::Result;

/// Output values, always written together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseOutputs {
    /// `v<major>.<minor>.<patch>`, empty when no release is needed
    pub version: String,
    pub release_needed: bool,
    /// `<major>.<minor>.<patch>`, empty when no release is needed
    pub release_id: String,
}

impl ReleaseOutputs {
    /// Outputs reported after a fatal error
    pub fn blank() -> Self {
        Self::default()
    }

    /// `(name, value)` pairs in output order
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("version", self.version.clone()),
            ("release_needed", self.release_needed.to_string()),
            ("release_id", self.release_id.clone()),
        ]
    }

    /// `name=value` lines, one per output
    pub fn to_lines(&self) -> String {
        self.pairs()
            .iter()
            .map(|(name, value)| format!("{}={}\n", name, value))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append the outputs to a CI output file, creating it if needed
    pub fn append_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        file.write_all(self.to_lines().as_bytes())?;
        Ok(())
    }
}

impl From<&ReleaseDecision> for ReleaseOutputs {
    fn from(decision: &ReleaseDecision) -> Self {
        match decision.version() {
            Some(version) => ReleaseOutputs {
                version: version.tag_name(),
                release_needed: true,
                release_id: version.to_string(),
            },
            None => ReleaseOutputs::blank(),
        }
    }
}
