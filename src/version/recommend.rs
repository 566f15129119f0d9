//! Upgrade recommendation facade
//!
//! Classifies the current version, then asks the matched scheme for the
//! latest and maintenance versions among the candidate tags.

use serde::Serialize;
use tracing::{debug, warn};

use crate::version::clock::{Clock, SystemClock};
use crate::version::error::RecommendError;
use crate::version::scheme::{VersionScheme, classify};

/// Result of a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Scheme the current version was classified as
    pub scheme: VersionScheme,
    /// Greatest candidate, or the current version when there are no candidates
    pub latest_version: String,
    /// Greatest version in the current version's major line
    pub maintain_version: Option<String>,
}

/// Computes recommendations against an injected clock
#[derive(Debug, Clone, Default)]
pub struct VersionRecommender<C = SystemClock> {
    clock: C,
}

impl VersionRecommender<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> VersionRecommender<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Classify a single version string
    pub fn classify(&self, version: &str) -> Result<VersionScheme, RecommendError> {
        classify(version, &self.clock).ok_or_else(|| {
            warn!("No version scheme matches '{}'", version);
            RecommendError::UnrecognizedVersionScheme {
                version: version.to_string(),
            }
        })
    }

    /// Recommend the latest and maintenance versions for `current`
    ///
    /// # Arguments
    /// * `candidates` - Upstream tags, in any order
    /// * `current` - The version currently packaged
    ///
    /// # Returns
    /// * `Ok(Recommendation)` - An empty candidate list is not an error
    /// * `Err(RecommendError::UnrecognizedVersionScheme)` - `current` matches no scheme
    pub fn recommend(
        &self,
        candidates: &[String],
        current: &str,
    ) -> Result<Recommendation, RecommendError> {
        let current = current.trim();
        let scheme = self.classify(current)?;
        debug!("Classified '{}' as {}", current, scheme);

        let latest_version = scheme.latest(candidates).unwrap_or(current).to_string();
        let maintain_version = scheme
            .maintain_version(candidates, current)
            .map(str::to_string);

        debug!(
            "Recommendation for '{}': latest={}, maintain={:?}",
            current, latest_version, maintain_version
        );

        Ok(Recommendation {
            scheme,
            latest_version,
            maintain_version,
        })
    }
}

/// Recommend against the system clock
pub fn recommend(candidates: &[String], current: &str) -> Result<Recommendation, RecommendError> {
    VersionRecommender::new().recommend(candidates, current)
}
