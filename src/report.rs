//! Per-package recommendation reports
//!
//! Runs the recommender over many packages at once. A package whose current
//! version matches no scheme is reported as unclassifiable and the batch moves
//! on to the next package.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::version::clock::Clock;
use crate::version::compare::compare_versions;
use crate::version::error::BatchError;
use crate::version::filter::TagFilter;
use crate::version::recommend::{Recommendation, VersionRecommender};
use crate::version::scheme::VersionScheme;

/// One package in a batch input file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageInput {
    pub current_version: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Package name to input, in file order
pub type BatchInput = IndexMap<String, PackageInput>;

/// Load a batch input file
///
/// The file is a JSON object keyed by package name:
/// ```json
/// { "pkgconf": { "currentVersion": "1.7.3", "tags": ["1.7.2", "1.7.3"] } }
/// ```
pub fn load_batch(path: &Path) -> Result<BatchInput, BatchError> {
    let content = std::fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| BatchError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// How the current version relates to the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeStatus {
    /// Current version is the latest
    Latest,
    /// A newer release exists in the current major line
    MaintenanceAvailable,
    /// Only a newer major line exists
    Outdated,
    /// Current version sorts above every candidate
    Newer,
}

impl UpgradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeStatus::Latest => "latest",
            UpgradeStatus::MaintenanceAvailable => "maintenance available",
            UpgradeStatus::Outdated => "outdated",
            UpgradeStatus::Newer => "newer",
        }
    }
}

/// Determine the upgrade status of `current` against a recommendation
pub fn upgrade_status(current: &str, recommendation: &Recommendation) -> UpgradeStatus {
    if current.trim() == recommendation.latest_version.trim() {
        return UpgradeStatus::Latest;
    }

    if compare_versions(current, &recommendation.latest_version).is_gt() {
        return UpgradeStatus::Newer;
    }

    match &recommendation.maintain_version {
        Some(maintain) if compare_versions(maintain, current).is_gt() => {
            UpgradeStatus::MaintenanceAvailable
        }
        _ => UpgradeStatus::Outdated,
    }
}

/// Outcome of recommending for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "outcome",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Outcome {
    Recommended {
        scheme: VersionScheme,
        latest_version: String,
        maintain_version: Option<String>,
        status: UpgradeStatus,
    },
    Unclassifiable {
        reason: String,
    },
}

/// Report for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageReport {
    pub package: String,
    pub current_version: String,
    /// False when the current version is missing from the upstream tags
    pub current_in_candidates: bool,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl fmt::Display for PackageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Recommended {
                scheme,
                latest_version,
                maintain_version,
                status,
            } => write!(
                f,
                "{}: current {} ({}), latest {}, maintain {} [{}]",
                self.package,
                self.current_version,
                scheme,
                latest_version,
                maintain_version.as_deref().unwrap_or("-"),
                status.as_str()
            )?,
            Outcome::Unclassifiable { reason } => write!(
                f,
                "{}: current {}, unclassifiable ({})",
                self.package, self.current_version, reason
            )?,
        }

        if !self.current_in_candidates {
            write!(f, " (current version not among upstream tags)")?;
        }
        Ok(())
    }
}

/// Recommend for a single package
///
/// When `filter` is given, non-release tags are dropped before recommending.
/// The "current version not among candidates" advisory is checked against the
/// unfiltered tags.
pub fn recommend_package<C: Clock>(
    recommender: &VersionRecommender<C>,
    filter: Option<&TagFilter>,
    package: &str,
    input: PackageInput,
) -> PackageReport {
    let current = input.current_version.trim().to_string();
    let current_in_candidates = input.tags.iter().any(|tag| tag.trim() == current);
    if !current_in_candidates {
        warn!(
            "{}: current version '{}' not found among upstream tags, double check where it came from",
            package, current
        );
    }

    let tags = match filter {
        Some(filter) => filter.retain_releases(input.tags),
        None => input.tags,
    };

    let outcome = match recommender.recommend(&tags, &current) {
        Ok(recommendation) => {
            let status = upgrade_status(&current, &recommendation);
            Outcome::Recommended {
                scheme: recommendation.scheme,
                latest_version: recommendation.latest_version,
                maintain_version: recommendation.maintain_version,
                status,
            }
        }
        Err(e) => {
            warn!("{}: skipping recommendation: {}", package, e);
            Outcome::Unclassifiable {
                reason: e.to_string(),
            }
        }
    };

    PackageReport {
        package: package.to_string(),
        current_version: current,
        current_in_candidates,
        outcome,
    }
}

/// Recommend for every package in `batch`, in input order
pub fn run_batch<C: Clock>(
    recommender: &VersionRecommender<C>,
    filter: Option<&TagFilter>,
    batch: BatchInput,
) -> Vec<PackageReport> {
    let reports: Vec<PackageReport> = batch
        .into_iter()
        .map(|(package, input)| recommend_package(recommender, filter, &package, input))
        .collect();

    let unclassifiable = reports
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Unclassifiable { .. }))
        .count();
    info!(
        "Processed {} packages ({} unclassifiable)",
        reports.len(),
        unclassifiable
    );

    reports
}
