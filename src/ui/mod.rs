//! User interface module - human-readable status lines on stderr.
//!
//! Stdout is reserved for the output values, so everything here writes to
//! stderr. Formatting lives in `formatter`.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_decision, display_error, display_status,
};
