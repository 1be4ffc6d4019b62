use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// Missing components are treated as zero, so "v2" parses as 2.0.0.
    /// More than three components or a non-numeric component is an error.
    pub fn parse(tag: &str) -> Result<Self> {
        // Remove 'v' or 'V' prefix
        let clean_tag = tag.trim().trim_start_matches(['v', 'V']);

        if clean_tag.is_empty() {
            return Err(BumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                tag
            )));
        }

        let parts: Vec<&str> = clean_tag.split('.').collect();
        if parts.len() > 3 {
            return Err(BumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                tag
            )));
        }

        let component = |index: usize, name: &str| -> Result<u64> {
            match parts.get(index) {
                None => Ok(0),
                Some(part) => part.parse::<u64>().map_err(|_| {
                    BumpError::version(format!("Invalid {} version: '{}'", name, part))
                }),
            }
        };

        Ok(Version {
            major: component(0, "major")?,
            minor: component(1, "minor")?,
            patch: component(2, "patch")?,
        })
    }

    /// Bump version according to bump category
    ///
    /// `BumpCategory::None` never describes an increment and is rejected,
    /// as is a component that would overflow.
    pub fn bump(&self, category: BumpCategory) -> Result<Self> {
        let overflow = || BumpError::arithmetic(format!("{} cannot be bumped further", self));

        match category {
            BumpCategory::Major => Ok(Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            }),
            BumpCategory::Minor => Ok(Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            }),
            BumpCategory::Patch => Ok(Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            }),
            BumpCategory::None => Err(BumpError::arithmetic(
                "no bump category to apply to the current version",
            )),
        }
    }

    /// Render as a release tag, e.g. "v1.2.3"
    pub fn tag_name(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which version component a change increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpCategory {
    Major,
    Minor,
    Patch,
    /// No category applies; the orchestrator never increments with this
    None,
}

impl FromStr for BumpCategory {
    type Err = BumpError;

    /// Case-insensitive: "Major", "MAJOR" and "major" are the same category.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(BumpCategory::Major),
            "minor" => Ok(BumpCategory::Minor),
            "patch" => Ok(BumpCategory::Patch),
            _ => Err(BumpError::arithmetic(format!(
                "unrecognized bump category '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for BumpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpCategory::Major => "major",
            BumpCategory::Minor => "minor",
            BumpCategory::Patch => "patch",
            BumpCategory::None => "none",
        };
        f.write_str(name)
    }
}
