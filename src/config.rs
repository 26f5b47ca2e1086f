use crate::channel::ChangelogSource;

// =============================================================================
// Fetch constants
// =============================================================================

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every request
pub const USER_AGENT: &str = "version-watch";

// =============================================================================
// Page literals
// =============================================================================

/// Download links on the older-versions index all point at the download host
pub const DOWNLOAD_LINK_MARKER: &str = "https://download.";

/// Path marker classifying a download link as a server package
pub const SERVER_PATH_MARKER: &str = "/server/";

/// Path marker classifying a download link as a desktop client
pub const DESKTOP_PATH_MARKER: &str = "/desktop/";

/// Filename prefix of server package archives (`owncloud-10.13.4.tar.bz2`)
pub const SERVER_PACKAGE_PREFIX: &str = "owncloud-";

/// Filename prefix of desktop installers (`ownCloud-10.13.2.exe`)
pub const DESKTOP_INSTALLER_PREFIX: &str = "ownCloud-";

/// Path segment that precedes the version directory on desktop mirrors
pub const STABLE_PATH_SEGMENT: &str = "stable";

/// href substring identifying entries on the iOS changelog page
pub const IOS_CHANGELOG_MARKER: &str = "changelog-for-owncloud-ios-client";

/// href substring identifying the Infinite Scale download anchor
pub const INFINITE_SCALE_MARKER: &str = "download.owncloud.com/ocis/ocis/stable";

/// CSS class of the text blocks that carry bare version numbers
pub const TEXT_BLOCK_CLASS: &str = "et_pb_text_inner";

/// Element ids of the mobile store badges; the version lives in the
/// paragraph preceding them
pub const IOS_BADGE_ID: &str = "MobileApps Apple";
pub const ANDROID_BADGE_ID: &str = "MobileApps GooglePlay";

/// Markers that disqualify a changelog entry as a stable release
pub const PRERELEASE_MARKERS: [&str; 3] = ["alpha", "beta", "rc"];

// =============================================================================
// Known release dates
// =============================================================================

/// Release dates published alongside server and desktop archives, as
/// (version, YYYYMMDD) pairs. Lookup is first-match-wins in this order.
///
/// The table carries "10.13" twice with different dates; that duplicate is
/// reported at startup rather than resolved here.
pub const KNOWN_RELEASE_DATES: &[(&str, &str)] = &[
    ("10.13.4", "20231213"),
    ("10.13.3", "20231121"),
    ("10.13", "20231121"),
    ("10.13.3-rc.2", "20231117"),
    ("10.13.2", "20231009"),
    ("10.13.2-rc.1", "20231005"),
    ("10.13.2-beta.1", "20231004"),
    ("10.13.1", "20230906"),
    ("10.13", "20230822"),
    ("10.13.0", "20230822"),
    ("10.12.2", "20230606"),
    ("10.12", "20230606"),
    ("10.12.1", "20230415"),
    ("10.12.0", "20230313"),
    ("10.11.0", "20220919"),
    ("10.11", "20220919"),
    ("10.10.0", "20220518"),
    ("10.10", "20220518"),
    ("10.9.1", "20220112"),
    ("10.9", "20220112"),
    ("10.9.0", "20211220"),
    ("10.8.0", "20210721"),
    ("10.8", "20210721"),
    ("10.7.0", "20210326"),
    ("10.7", "20210326"),
    ("10.6.0", "20201216"),
    ("10.6", "20201216"),
    ("10.5.0", "20200731"),
    ("10.5", "20200731"),
];

// =============================================================================
// Site configuration
// =============================================================================

/// URLs of the pages a run visits. `Default` points at the production site;
/// tests construct one against a mock server instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub older_versions_url: String,
    pub download_page_url: String,
    pub desktop_page_url: String,
    pub mobile_apps_url: String,
    /// Changelog pages in report order
    pub changelogs: Vec<(ChangelogSource, String)>,
    /// href substring selecting download links on the older-versions index
    pub download_link_marker: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            older_versions_url: "https://owncloud.com/older-versions/".to_string(),
            download_page_url: "https://owncloud.com/download-server/".to_string(),
            desktop_page_url: "https://owncloud.com/desktop-app/".to_string(),
            mobile_apps_url: "https://owncloud.com/mobile-apps/".to_string(),
            changelogs: vec![
                (
                    ChangelogSource::InfiniteScale,
                    "https://owncloud.com/changelog/infinite-scale/".to_string(),
                ),
                (
                    ChangelogSource::Server,
                    "https://owncloud.com/changelog/server".to_string(),
                ),
                (
                    ChangelogSource::Desktop,
                    "https://owncloud.com/changelog/desktop".to_string(),
                ),
                (
                    ChangelogSource::IosApp,
                    "https://owncloud.com/changelog/ios-app".to_string(),
                ),
                (
                    ChangelogSource::AndroidApp,
                    "https://owncloud.com/changelog/android-app".to_string(),
                ),
            ],
            download_link_marker: DOWNLOAD_LINK_MARKER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lists_changelogs_in_report_order() {
        let site = SiteConfig::default();
        let order: Vec<ChangelogSource> = site.changelogs.iter().map(|(s, _)| *s).collect();

        assert_eq!(
            order,
            vec![
                ChangelogSource::InfiniteScale,
                ChangelogSource::Server,
                ChangelogSource::Desktop,
                ChangelogSource::IosApp,
                ChangelogSource::AndroidApp,
            ]
        );
    }
}
