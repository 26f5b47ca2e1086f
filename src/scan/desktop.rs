//! Scanner for the desktop app page
//!
//! Mac and Windows versions come from installer download hrefs; the Linux
//! version is published as a bare x.x.x triplet in a text block.

use scraper::Html;
use tracing::warn;

use crate::config::{DESKTOP_INSTALLER_PREFIX, TEXT_BLOCK_CLASS};
use crate::dom;
use crate::fetch::Fetcher;
use crate::scan::{Reading, fetch_document};
use crate::version::extract::version_after_prefix;
use crate::version::format::is_strict_version;

/// Versions published on the desktop app page
#[derive(Debug)]
pub struct DesktopPage {
    pub mac: Reading,
    pub windows: Reading,
    pub linux: Reading,
}

pub async fn scan<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> DesktopPage {
    let doc = match fetch_document(fetcher, url).await {
        Ok(doc) => doc,
        Err(err) => {
            warn!("desktop page fetch failed for {url}: {err}");
            let failed = Reading::fetch_failed(&err);
            return DesktopPage {
                mac: failed.clone(),
                windows: failed.clone(),
                linux: failed,
            };
        }
    };

    let linux = dom::text_blocks(&doc, TEXT_BLOCK_CLASS)
        .into_iter()
        .find(|text| is_strict_version(text));

    DesktopPage {
        mac: installer_version(&doc, "mac"),
        windows: installer_version(&doc, "win"),
        linux: Reading::from_extraction(linux),
    }
}

/// Version of the first installer anchor whose href names the OS. The
/// version sits in the last path segment right after the installer prefix.
fn installer_version(doc: &Html, os_marker: &str) -> Reading {
    let version = dom::anchors_where(doc, |href| {
        href.contains(os_marker) && href.contains(DESKTOP_INSTALLER_PREFIX)
    })
    .first()
    .and_then(|anchor| {
        let segment = anchor.href.rsplit('/').next().unwrap_or_default();
        version_after_prefix(segment, DESKTOP_INSTALLER_PREFIX)
    });

    Reading::from_extraction(version)
}
