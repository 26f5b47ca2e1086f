//! Known release dates, used to resolve versions from date tokens in URLs

use crate::config::KNOWN_RELEASE_DATES;

/// Immutable, ordered list of (version, YYYYMMDD date) pairs.
///
/// Order matters: lookups scan the list front to back and the first match
/// wins, so entries sharing a date token resolve to the first-inserted one.
#[derive(Debug, Clone)]
pub struct KnownVersions {
    entries: Vec<(String, String)>,
}

impl KnownVersions {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// The table shipped with the crate
    pub fn bundled() -> Self {
        Self::new(
            KNOWN_RELEASE_DATES
                .iter()
                .map(|(v, d)| (v.to_string(), d.to_string()))
                .collect(),
        )
    }

    /// Resolve a version whose release-date token appears verbatim anywhere
    /// in the URL. First matching entry wins.
    pub fn version_for_url(&self, url: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, date)| url.contains(date.as_str()))
            .map(|(version, _)| version.as_str())
    }

    /// Versions listed more than once, in first-occurrence order. The bundled
    /// table has such an entry ("10.13"); callers surface it as a data
    /// quality warning instead of resolving it.
    pub fn duplicated_versions(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        let mut duplicated = Vec::new();
        for (version, _) in &self.entries {
            if seen.contains(&version.as_str()) {
                if !duplicated.contains(&version.as_str()) {
                    duplicated.push(version.as_str());
                }
            } else {
                seen.push(version.as_str());
            }
        }
        duplicated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> KnownVersions {
        KnownVersions::new(
            entries
                .iter()
                .map(|(v, d)| (v.to_string(), d.to_string()))
                .collect(),
        )
    }

    #[test]
    fn version_for_url_matches_date_token_substring() {
        let known = KnownVersions::bundled();

        assert_eq!(
            known.version_for_url("https://download.owncloud.com/server/owncloud-complete-20231213.zip"),
            Some("10.13.4")
        );
        assert_eq!(known.version_for_url("https://download.owncloud.com/server/latest.zip"), None);
    }

    #[test]
    fn shared_date_token_resolves_to_first_inserted_entry() {
        // 10.13.3 precedes 10.13 in the bundled table and both carry 20231121
        let known = KnownVersions::bundled();

        assert_eq!(
            known.version_for_url("https://download.example.com/a-20231121.tar.bz2"),
            Some("10.13.3")
        );
    }

    #[test]
    fn version_for_url_prefers_earlier_entries() {
        let known = table(&[("2.0", "20240101"), ("1.0", "20240101")]);

        assert_eq!(known.version_for_url("https://x/20240101.zip"), Some("2.0"));
    }

    #[test]
    fn bundled_table_reports_its_duplicate_once() {
        let known = KnownVersions::bundled();

        assert_eq!(known.duplicated_versions(), vec!["10.13"]);
    }

    #[test]
    fn duplicated_versions_empty_for_distinct_keys() {
        let known = table(&[("1.0", "20240101"), ("2.0", "20240202")]);

        assert!(known.duplicated_versions().is_empty());
    }
}
