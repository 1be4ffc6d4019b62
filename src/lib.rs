pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod git;
pub mod output;
pub mod ui;

pub use error::{BumpError, Result};
