//! Sequential sweep over every page plus the line-oriented report
//!
//! The run visits the older-versions index, the five changelog pages, the
//! mobile apps page, the download page and the desktop app page, in that
//! order, then prints pairwise verdicts. Every failure along the way has
//! already been degraded to a sentinel reading by the scanners, so this
//! module only fails on write errors.

use std::io::{self, Write};

use indexmap::IndexMap;
use tracing::warn;

use crate::channel::{Channel, ChangelogSource, DesktopOs, MobilePlatform};
use crate::config::SiteConfig;
use crate::fetch::Fetcher;
use crate::reconcile::compare;
use crate::scan::{Reading, changelog, desktop, download, mobile, older_versions};
use crate::version::known::KnownVersions;

/// Run the whole check and write the report to `out`
pub async fn run_check<F, W>(
    fetcher: &F,
    site: &SiteConfig,
    known: &KnownVersions,
    out: &mut W,
) -> io::Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    writeln!(out, "checking '{}':\n", site.older_versions_url)?;

    match older_versions::scan(
        fetcher,
        &site.older_versions_url,
        &site.download_link_marker,
        known,
    )
    .await
    {
        Ok(index) => {
            for dead in &index.dead_links {
                writeln!(
                    out,
                    "Non-working {} URL: {}, Version: {}\n",
                    dead.kind.label(),
                    dead.url,
                    dead.version
                )?;
            }
            writeln!(
                out,
                "\nTotal Server Package versions: {}, Total links: {}",
                index.server.versions.len(),
                index.server.links
            )?;
            writeln!(
                out,
                "Total Desktop Client versions: {}, Total links: {}\n",
                index.desktop.versions.len(),
                index.desktop.links
            )?;
        }
        Err(err) => {
            warn!("older-versions scan failed: {err}");
            writeln!(out, "Error fetching the older versions page: {err}\n")?;
        }
    }

    writeln!(out, "Latest versions from changelog:\n")?;

    let mut changelogs: IndexMap<ChangelogSource, Reading> = IndexMap::new();
    for (source, url) in &site.changelogs {
        let reading = changelog::latest_version(fetcher, *source, url).await;
        match reading.found() {
            Some(version) => writeln!(out, "{}: {}", source.title(), version)?,
            None => writeln!(out, "{}: No valid latest version found", source.title())?,
        }
        changelogs.insert(*source, reading);
    }

    let mobile_page = mobile::scan(fetcher, &site.mobile_apps_url).await;
    let download_page = download::scan(fetcher, &site.download_page_url).await;
    let desktop_page = desktop::scan(fetcher, &site.desktop_page_url).await;

    writeln!(out, "\nComparing download page with changelog:\n")?;

    writeln!(out, "\nDesktop app versions from '{}':", site.desktop_page_url)?;
    write_comparison(
        out,
        Channel::DesktopClient(DesktopOs::Mac),
        &desktop_page.mac,
        &changelogs,
    )?;
    write_comparison(
        out,
        Channel::DesktopClient(DesktopOs::Windows),
        &desktop_page.windows,
        &changelogs,
    )?;
    write_comparison(
        out,
        Channel::DesktopClient(DesktopOs::Linux),
        &desktop_page.linux,
        &changelogs,
    )?;

    writeln!(out, "\nMobile app versions from '{}':", site.mobile_apps_url)?;
    write_comparison(
        out,
        Channel::MobileApp(MobilePlatform::Ios),
        &mobile_page.ios,
        &changelogs,
    )?;
    write_comparison(
        out,
        Channel::MobileApp(MobilePlatform::Android),
        &mobile_page.android,
        &changelogs,
    )?;
    writeln!(out)?;

    // The download page lines only print when a version was actually read
    if let Some(version) = download_page.infinite_scale.found() {
        write_download_comparison(
            out,
            Channel::InfiniteScale,
            &site.download_page_url,
            version,
            &changelogs,
        )?;
    }
    if let Some(version) = download_page.server.found() {
        write_download_comparison(
            out,
            Channel::ServerPackage,
            &site.download_page_url,
            version,
            &changelogs,
        )?;
    }

    Ok(())
}

/// The page-side sentinel for a reading without a version
fn observed_value(reading: &Reading) -> &str {
    reading.found().unwrap_or("Not found")
}

/// The changelog-side sentinel mirrors the original report wording
fn changelog_value<'a>(
    changelogs: &'a IndexMap<ChangelogSource, Reading>,
    source: ChangelogSource,
) -> &'a str {
    changelogs
        .get(&source)
        .and_then(Reading::found)
        .unwrap_or("Not found in changelog")
}

fn write_comparison<W: Write>(
    out: &mut W,
    channel: Channel,
    reading: &Reading,
    changelogs: &IndexMap<ChangelogSource, Reading>,
) -> io::Result<()> {
    let observed = observed_value(reading);
    let expected = changelog_value(changelogs, channel.changelog_source());
    writeln!(
        out,
        "{} Version: {}, from changelog: {} ({})",
        channel.label(),
        observed,
        expected,
        compare(observed, expected)
    )
}

fn write_download_comparison<W: Write>(
    out: &mut W,
    channel: Channel,
    page_url: &str,
    version: &str,
    changelogs: &IndexMap<ChangelogSource, Reading>,
) -> io::Result<()> {
    let expected = changelog_value(changelogs, channel.changelog_source());
    writeln!(
        out,
        "{} version from '{}': {}, from changelog: {} ({})",
        channel.label(),
        page_url,
        version,
        expected,
        compare(version, expected)
    )
}
