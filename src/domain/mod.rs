//! Domain logic - pure rules for tokens, mappings and versions, independent of git

pub mod decision;
pub mod mapping;
pub mod tag;
pub mod token;
pub mod version;

pub use decision::{ReleaseDecision, SkipReason};
pub use mapping::BumpMapping;
pub use tag::TagPattern;
pub use token::{ChangeToken, DetectionMode};
pub use version::{BumpCategory, Version};
