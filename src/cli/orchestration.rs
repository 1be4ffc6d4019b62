//! Detection workflow orchestration
//!
//! Runs token extraction, mapping lookup, tag reading and version arithmetic
//! in that order. The workflow is independent of clap and of where the
//! outputs go, so it can be driven programmatically and tested against a
//! [MockRepository](crate::git::MockRepository).

use tracing::{debug, info};

use crate::analyzer::{DetectionContext, TokenExtractor, VersionStore};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{BumpCategory, ReleaseDecision, SkipReason, Version};
use crate::error::Result;
use crate::git::Repository;

/// Result of a detection run, with the warnings met along the way
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionReport {
    pub decision: ReleaseDecision,
    pub warnings: Vec<BoundaryWarning>,
}

/// Main detection workflow
///
/// Orchestrates the whole decision:
/// 1. Extract the change token for the configured mode
/// 2. Resolve the token to a bump category
/// 3. Read the latest release version from tags
/// 4. Increment it
///
/// Steps 3 and 4 only run when 1 and 2 both produce something; otherwise
/// the report carries a [ReleaseDecision::Skip]. Without a repository the
/// current version is 0.0.0.
///
/// # Returns
///
/// * `Ok(report)` - A release or a skip
/// * `Err` - An unrecognized bump category, version overflow, or git failure
pub fn run_detection<R: Repository>(
    config: &Config,
    context: &DetectionContext,
    repo: Option<&R>,
) -> Result<DetectionReport> {
    let mut extractor = TokenExtractor::new(context, repo);
    let token = extractor.extract(config.mode)?;
    let mut warnings = extractor.into_warnings();

    let Some(token) = token else {
        return Ok(DetectionReport {
            decision: ReleaseDecision::Skip {
                reason: SkipReason::NoToken { mode: config.mode },
            },
            warnings,
        });
    };

    let Some(category_name) = config.mapping.resolve(&token) else {
        warnings.push(BoundaryWarning::UnmappedToken {
            token: token.to_string(),
            categories: config.mapping.categories().map(str::to_string).collect(),
        });
        return Ok(DetectionReport {
            decision: ReleaseDecision::Skip {
                reason: SkipReason::Unmapped { token },
            },
            warnings,
        });
    };

    let category: BumpCategory = category_name.parse()?;
    debug!(%token, %category, "resolved bump category");

    let current = match repo {
        Some(repo) => {
            let mut store = VersionStore::new(repo);
            let latest = store.latest_release()?;
            warnings.extend(store.into_warnings());
            match latest {
                Some((tag, version)) => {
                    debug!(%tag, %version, "current release");
                    version
                }
                None => {
                    warnings.push(BoundaryWarning::NoVersionTags);
                    Version::default()
                }
            }
        }
        None => Version::default(),
    };

    let next = current.bump(category)?;
    info!(from = %current, to = %next, %category, "computed next version");

    Ok(DetectionReport {
        decision: ReleaseDecision::Release { version: next },
        warnings,
    })
}

/// Convenience wrapper returning only the decision
pub fn decide<R: Repository>(
    config: &Config,
    context: &DetectionContext,
    repo: Option<&R>,
) -> Result<ReleaseDecision> {
    run_detection(config, context, repo).map(|report| report.decision)
}
