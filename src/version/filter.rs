//! Release tag filtering
//!
//! Upstream tag listings mix final releases with release candidates, nightly
//! builds and distribution-specific rebuilds. [`TagFilter`] keeps only the
//! tags that look like final upstream releases.

use regex::Regex;
use tracing::debug;

/// Markers that identify pre-release builds
const PRERELEASE_MARKERS: &[&str] = &[
    "rc", "RC", "dev", "alpha", "beta", "Beta", "BETA", "pre", "PRE", "pl", "bp",
];

/// Markers that identify distribution-specific rebuilds
const VENDOR_MARKERS: &[&str] = &["ubuntu", "fedora"];

/// Filter that keeps final upstream release tags
pub struct TagFilter {
    /// Tag shape: digits first, then only alphanumerics and separators
    shape_re: Regex,
    /// `a`/`b` shorthand right after a digit: `1.0a1`, `2.0b3`
    shorthand_re: Regex,
    /// Additional markers excluded on top of the built-in ones
    extra_markers: Vec<String>,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::with_extra_markers(Vec::new())
    }

    pub fn with_extra_markers(extra_markers: Vec<String>) -> Self {
        Self {
            shape_re: Regex::new(r"^[0-9][0-9A-Za-z._-]*$").unwrap(),
            shorthand_re: Regex::new(r"[0-9][ab]").unwrap(),
            extra_markers,
        }
    }

    /// Check whether `tag` looks like a final release
    pub fn is_release(&self, tag: &str) -> bool {
        let tag = tag.trim();

        if !self.shape_re.is_match(tag) || self.shorthand_re.is_match(tag) {
            return false;
        }

        !PRERELEASE_MARKERS
            .iter()
            .chain(VENDOR_MARKERS)
            .copied()
            .chain(self.extra_markers.iter().map(String::as_str))
            .any(|marker| tag.contains(marker))
    }

    /// Keep only the release tags, preserving order
    pub fn retain_releases(&self, tags: Vec<String>) -> Vec<String> {
        let before = tags.len();
        let releases: Vec<String> = tags.into_iter().filter(|t| self.is_release(t)).collect();
        debug!(
            "Kept {} of {} tags after release filtering",
            releases.len(),
            before
        );
        releases
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", true)]
    #[case("2020_03_15", true)]
    #[case("56c", true)]
    #[case("1.0-1", true)]
    #[case("v1.2.3", false)] // must start with a digit
    #[case("1.2.3+build", false)] // unexpected character
    #[case("release-1.2", false)]
    #[case("1.2.3rc1", false)]
    #[case("1.2.3-RC2", false)]
    #[case("1.2.3.dev4", false)]
    #[case("2.0-alpha", false)]
    #[case("2.0-beta.1", false)]
    #[case("2.0-BETA", false)]
    #[case("3.0pre1", false)]
    #[case("1.0a1", false)]
    #[case("59b", false)]
    #[case("1.2-0ubuntu1", false)]
    #[case("1.2.fedora", false)]
    #[case("5.4p1bp", false)]
    fn is_release_classifies_tags(#[case] tag: &str, #[case] expected: bool) {
        assert_eq!(TagFilter::new().is_release(tag), expected);
    }

    #[test]
    fn extra_markers_are_excluded() {
        let filter = TagFilter::with_extra_markers(vec!["nightly".to_string()]);
        assert!(!filter.is_release("1.2.3-nightly"));
        assert!(filter.is_release("1.2.3"));
    }

    #[test]
    fn retain_releases_preserves_order() {
        let tags = vec![
            "2.0.0".to_string(),
            "2.0.0rc1".to_string(),
            "1.9.9".to_string(),
            "1.9.9-beta".to_string(),
        ];
        assert_eq!(
            TagFilter::new().retain_releases(tags),
            vec!["2.0.0".to_string(), "1.9.9".to_string()]
        );
    }
}
