//! Detection engine: change token extraction and release version lookup

pub mod token_extractor;
pub mod version_store;

pub use token_extractor::{DetectionContext, TokenExtractor};
pub use version_store::VersionStore;
