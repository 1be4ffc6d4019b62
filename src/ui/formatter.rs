//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text and are tested directly;
//! `display_*` functions print it to stderr.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::ReleaseDecision;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").for_stderr().red().bold(), message)
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").for_stderr().green(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").for_stderr().yellow(), message)
}

/// Format a boundary warning with a yellow warning icon.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").for_stderr().yellow(), warning)
}

/// Summarize a decision in one line.
///
/// Shows either:
/// - If releasing: "Release needed: v1.2.3"
/// - If skipping: "No release needed: <reason>"
pub fn format_decision(decision: &ReleaseDecision) -> String {
    match decision {
        ReleaseDecision::Release { version } => format_success(&format!(
            "Release needed: {}",
            style(version.tag_name()).for_stderr().green().bold()
        )),
        ReleaseDecision::Skip { reason } => {
            format_status(&format!("No release needed: {}", reason))
        }
    }
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

pub fn display_decision(decision: &ReleaseDecision) {
    eprintln!("{}", format_decision(decision));
}
