//! Pairwise reconciliation of versions reported by different pages

use std::fmt;

/// Verdict of comparing two version strings from different sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Same,
    Different,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Same => "They are Same",
            Verdict::Different => "They are Different",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purely lexical comparison of the raw strings. No semantic-version
/// normalization: "10.13" and "10.13.0" are different.
pub fn compare(left: &str, right: &str) -> Verdict {
    if left == right {
        Verdict::Same
    } else {
        Verdict::Different
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", "1.2.3", Verdict::Same)]
    #[case("10.13", "10.13.0", Verdict::Different)] // no normalization
    #[case("10.13.4", "10.13.3", Verdict::Different)]
    #[case("Not found", "Not found in changelog", Verdict::Different)]
    #[case("", "", Verdict::Same)]
    fn compare_is_lexical_only(#[case] left: &str, #[case] right: &str, #[case] expected: Verdict) {
        assert_eq!(compare(left, right), expected);
    }

    #[test]
    fn verdict_renders_report_wording() {
        assert_eq!(Verdict::Same.to_string(), "They are Same");
        assert_eq!(Verdict::Different.to_string(), "They are Different");
    }
}
