//! Version string shape checks and text patterns

use regex::Regex;

use crate::config::PRERELEASE_MARKERS;

/// Strict release format: exactly three dot-separated all-numeric parts.
/// Pre-release suffixes ("10.13.3-rc.2"), two-part versions and anything
/// non-numeric fail this check.
pub fn is_strict_version(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// True when the text mentions a pre-release marker (alpha, beta, rc)
pub fn mentions_prerelease(s: &str) -> bool {
    PRERELEASE_MARKERS.iter().any(|marker| s.contains(marker))
}

/// Pattern for the mobile apps page, which publishes `Version: <major>.<minor>`
/// next to the store badges. Two components only; mobile releases do not
/// publish patch numbers, so this is not unified with the strict triplet rule.
pub struct MobileVersionPattern {
    re: Regex,
}

impl MobileVersionPattern {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"Version: (\d+\.\d+)").unwrap(),
        }
    }

    /// First version mentioned in the text, if any
    pub fn extract(&self, text: &str) -> Option<String> {
        self.re
            .captures(text)
            .map(|captures| captures[1].to_string())
    }
}

impl Default for MobileVersionPattern {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10.13.4", true)]
    #[case("0.0.0", true)]
    #[case("10.13", false)] // two parts
    #[case("10.13.4.1", false)] // four parts
    #[case("10.13.3-rc.2", false)] // pre-release suffix
    #[case("10.x.4", false)] // non-numeric part
    #[case("10..4", false)] // empty part
    #[case("", false)]
    #[case("v10.13.4", false)]
    fn is_strict_version_requires_three_numeric_parts(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_strict_version(input), expected);
    }

    #[rstest]
    #[case("10.13.3-rc.2", true)]
    #[case("5.0.0-beta.1", true)]
    #[case("3.0.0alpha", true)]
    #[case("10.13.4", false)]
    fn mentions_prerelease_detects_markers(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(mentions_prerelease(input), expected);
    }

    #[rstest]
    #[case("Version: 12.4 released today", Some("12.4"))]
    #[case("ownCloud app Version: 4.0 for Android", Some("4.0"))]
    #[case("Version: 12.4.1", Some("12.4"))] // only major.minor is captured
    #[case("latest version 12.4", None)] // label is part of the pattern
    #[case("", None)]
    fn mobile_pattern_extracts_major_minor(#[case] text: &str, #[case] expected: Option<&str>) {
        let pattern = MobileVersionPattern::new();

        assert_eq!(pattern.extract(text), expected.map(|s| s.to_string()));
    }
}
