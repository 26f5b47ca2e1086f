//! End-to-end run against a mock site
//!
//! Serves every page the sweep visits from a mockito server, runs the real
//! HTTP fetcher, and checks the printed report, including degradation when
//! one page 404s.

use mockito::{Server, ServerGuard};

use version_watch::channel::ChangelogSource;
use version_watch::config::SiteConfig;
use version_watch::fetch::HttpFetcher;
use version_watch::report::run_check;
use version_watch::version::known::KnownVersions;

fn site_for(base: &str) -> SiteConfig {
    SiteConfig {
        older_versions_url: format!("{base}/older-versions/"),
        download_page_url: format!("{base}/download-server/"),
        desktop_page_url: format!("{base}/desktop-app/"),
        mobile_apps_url: format!("{base}/mobile-apps/"),
        changelogs: vec![
            (
                ChangelogSource::InfiniteScale,
                format!("{base}/changelog/infinite-scale/"),
            ),
            (ChangelogSource::Server, format!("{base}/changelog/server")),
            (ChangelogSource::Desktop, format!("{base}/changelog/desktop")),
            (ChangelogSource::IosApp, format!("{base}/changelog/ios-app")),
            (
                ChangelogSource::AndroidApp,
                format!("{base}/changelog/android-app"),
            ),
        ],
        download_link_marker: "/files/".to_string(),
    }
}

async fn mount_site(server: &mut ServerGuard) {
    let base = server.url();

    server
        .mock("GET", "/older-versions/")
        .with_status(200)
        .with_body(format!(
            r#"<html><body>
                <a href="{base}/files/server/owncloud-10.13.4.tar.bz2">Server 10.13.4</a>
                <a href="{base}/files/server/owncloud-complete-20231213.zip">Server bundle</a>
                <a href="{base}/files/desktop/stable//10.13.2/ownCloud-10.13.2.exe">Desktop 10.13.2</a>
                <a href="{base}/files/desktop/stable/misc/ownCloud-latest.exe">Desktop nightly</a>
                <a href="{base}/blog/">Blog</a>
            </body></html>"#
        ))
        .create_async()
        .await;

    server
        .mock("HEAD", "/files/server/owncloud-10.13.4.tar.bz2")
        .with_status(200)
        .create_async()
        .await;
    // This archive is gone; the report must call it out
    server
        .mock("HEAD", "/files/server/owncloud-complete-20231213.zip")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("HEAD", "/files/desktop/stable//10.13.2/ownCloud-10.13.2.exe")
        .with_status(200)
        .create_async()
        .await;

    server
        .mock("GET", "/changelog/infinite-scale/")
        .with_status(200)
        .with_body(format!(
            r#"<html><body><a href="{base}/release/ocis-5.0.6">5.0.6</a></body></html>"#
        ))
        .create_async()
        .await;
    server
        .mock("HEAD", "/release/ocis-5.0.6")
        .with_status(200)
        .create_async()
        .await;

    server
        .mock("GET", "/changelog/server")
        .with_status(200)
        .with_body(format!(
            r#"<html><body>
                <a href="{base}/release/server-10.14.0-rc.1">10.14.0-rc.1</a>
                <a href="{base}/release/server-10.13.4">10.13.4</a>
            </body></html>"#
        ))
        .create_async()
        .await;
    server
        .mock("HEAD", "/release/server-10.13.4")
        .with_status(200)
        .create_async()
        .await;

    server
        .mock("GET", "/changelog/desktop")
        .with_status(200)
        .with_body(format!(
            r#"<html><body><a href="{base}/release/desktop-4.2.1">4.2.1</a></body></html>"#
        ))
        .create_async()
        .await;
    server
        .mock("HEAD", "/release/desktop-4.2.1")
        .with_status(200)
        .create_async()
        .await;

    server
        .mock("GET", "/changelog/ios-app")
        .with_status(200)
        .with_body(
            r#"<html><body>
                <a href="/changelog-for-owncloud-ios-client-12-4-0">Changelog for owncloud-ios-client 12.4.0</a>
            </body></html>"#,
        )
        .create_async()
        .await;

    // The android changelog is down; its channel degrades, the run continues
    server
        .mock("GET", "/changelog/android-app")
        .with_status(404)
        .create_async()
        .await;

    server
        .mock("GET", "/mobile-apps/")
        .with_status(200)
        .with_body(
            r#"<html><body>
                <p>ownCloud iOS app, Version: 12.4</p>
                <div id="MobileApps Apple"></div>
                <p>ownCloud Android app, Version: 4.0</p>
                <div id="MobileApps GooglePlay"></div>
            </body></html>"#,
        )
        .create_async()
        .await;

    server
        .mock("GET", "/download-server/")
        .with_status(200)
        .with_body(
            r#"<html><body>
                <a href="https://download.owncloud.com/ocis/ocis/stable/5.0.6/">Infinite Scale 5.0.6</a>
                <div class="et_pb_text_inner">Download ownCloud Server</div>
                <div class="et_pb_text_inner">10.13.4</div>
            </body></html>"#,
        )
        .create_async()
        .await;

    server
        .mock("GET", "/desktop-app/")
        .with_status(200)
        .with_body(
            r#"<html><body>
                <a href="https://download.owncloud.com/desktop/ownCloud/stable/latest/mac/ownCloud-4.2.1.13040.pkg">Mac</a>
                <a href="https://download.owncloud.com/desktop/ownCloud/stable/latest/win/ownCloud-4.2.1.13040.x64.msi">Windows</a>
                <div class="et_pb_text_inner">4.2.1</div>
            </body></html>"#,
        )
        .create_async()
        .await;
}

#[tokio::test]
async fn full_sweep_reports_every_section() {
    let mut server = Server::new_async().await;
    mount_site(&mut server).await;
    let base = server.url();
    let site = site_for(&base);

    let fetcher = HttpFetcher::new();
    let mut out = Vec::new();
    run_check(&fetcher, &site, &KnownVersions::bundled(), &mut out)
        .await
        .unwrap();
    let report = String::from_utf8(out).unwrap();

    // Older-versions index: the date-token archive resolves to 10.13.4, so
    // two server links share one distinct version; the malformed desktop
    // installer is discarded.
    assert!(report.contains("Total Server Package versions: 1, Total links: 2"));
    assert!(report.contains("Total Desktop Client versions: 1, Total links: 1"));
    assert!(report.contains(&format!(
        "Non-working Server Package URL: {base}/files/server/owncloud-complete-20231213.zip, Version: 10.13.4"
    )));

    // Changelog section, one channel degraded
    assert!(report.contains("Infinite-scale: 5.0.6"));
    assert!(report.contains("ownCloud Server: 10.13.4"));
    assert!(report.contains("Desktop Client: 4.2.1"));
    assert!(report.contains("iOS App: 12.4.0"));
    assert!(report.contains("Android App: No valid latest version found"));

    // Pairwise verdicts
    assert!(report.contains("Mac OS Version: 4.2.1, from changelog: 4.2.1 (They are Same)"));
    assert!(report.contains("Windows Version: 4.2.1, from changelog: 4.2.1 (They are Same)"));
    assert!(report.contains("Linux Version: 4.2.1, from changelog: 4.2.1 (They are Same)"));
    assert!(report.contains("iOS Version: 12.4, from changelog: 12.4.0 (They are Different)"));
    assert!(report.contains(
        "Android Version: 4.0, from changelog: Not found in changelog (They are Different)"
    ));
    assert!(report.contains(&format!(
        "Infinite-scale version from '{base}/download-server/': 5.0.6, from changelog: 5.0.6 (They are Same)"
    )));
    assert!(report.contains(&format!(
        "ownCloud Server version from '{base}/download-server/': 10.13.4, from changelog: 10.13.4 (They are Same)"
    )));
}

#[tokio::test]
async fn pre_release_changelog_entries_are_skipped() {
    let mut server = Server::new_async().await;
    let base = server.url();

    server
        .mock("GET", "/changelog/server")
        .with_status(200)
        .with_body(format!(
            r#"<html><body>
                <a href="{base}/release/next">10.14.0-rc.1</a>
                <a href="{base}/release/server-10.13.4">10.13.4</a>
            </body></html>"#
        ))
        .create_async()
        .await;
    let head = server
        .mock("HEAD", "/release/server-10.13.4")
        .with_status(200)
        .create_async()
        .await;

    let mut site = site_for(&base);
    site.changelogs = vec![(ChangelogSource::Server, format!("{base}/changelog/server"))];

    let fetcher = HttpFetcher::new();
    let mut out = Vec::new();
    run_check(&fetcher, &site, &KnownVersions::bundled(), &mut out)
        .await
        .unwrap();
    let report = String::from_utf8(out).unwrap();

    head.assert_async().await;
    assert!(report.contains("ownCloud Server: 10.13.4"));
}
