//! Scanner for the older-versions index
//!
//! Walks every download link on the page, classifies it as a server package
//! or a desktop client, extracts a version per link, and checks that the
//! link still resolves.

use indexmap::IndexSet;
use tracing::debug;

use crate::config::{DESKTOP_PATH_MARKER, SERVER_PATH_MARKER};
use crate::dom;
use crate::fetch::{FetchError, Fetcher, link_is_live};
use crate::scan::fetch_document;
use crate::version::extract::version_from_url;
use crate::version::format::is_strict_version;
use crate::version::known::KnownVersions;

/// Kind of archive a download link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Server,
    Desktop,
}

impl ArchiveKind {
    pub fn label(&self) -> &'static str {
        match self {
            ArchiveKind::Server => "Server Package",
            ArchiveKind::Desktop => "Desktop Client",
        }
    }
}

/// Distinct versions and total link count for one archive kind
#[derive(Debug, Default)]
pub struct ChannelTally {
    /// Distinct versions in the order they appear on the page
    pub versions: IndexSet<String>,
    pub links: usize,
}

/// A download link whose liveness check did not resolve with HTTP 200
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLink {
    pub kind: ArchiveKind,
    pub url: String,
    pub version: String,
}

/// Everything the older-versions index yields in one pass
#[derive(Debug, Default)]
pub struct ArchiveIndex {
    pub server: ChannelTally,
    pub desktop: ChannelTally,
    pub dead_links: Vec<DeadLink>,
}

/// Scan the older-versions index. Desktop links whose extracted version is
/// not a strict triplet are discarded; every counted link gets a HEAD
/// liveness check and dead ones are collected for the report.
pub async fn scan<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    link_marker: &str,
    known: &KnownVersions,
) -> Result<ArchiveIndex, FetchError> {
    let doc = fetch_document(fetcher, url).await?;
    let links = dom::anchors_where(&doc, |href| href.contains(link_marker));
    debug!("older-versions index lists {} download links", links.len());

    let mut index = ArchiveIndex::default();
    for link in links {
        let version =
            version_from_url(&link.href, known).unwrap_or_else(|| filename_stem(&link.href));

        let kind = if link.href.contains(SERVER_PATH_MARKER) {
            ArchiveKind::Server
        } else if link.href.contains(DESKTOP_PATH_MARKER) {
            ArchiveKind::Desktop
        } else {
            continue;
        };

        if kind == ArchiveKind::Desktop && !is_strict_version(&version) {
            continue;
        }

        let tally = match kind {
            ArchiveKind::Server => &mut index.server,
            ArchiveKind::Desktop => &mut index.desktop,
        };
        tally.versions.insert(version.clone());
        tally.links += 1;

        if !link_is_live(fetcher, &link.href).await {
            index.dead_links.push(DeadLink {
                kind,
                url: link.href,
                version,
            });
        }
    }

    Ok(index)
}

/// Fallback label when no heuristic matched: the first dot-component of the
/// URL's last path segment.
fn filename_stem(url: &str) -> String {
    url.rsplit('/')
        .next()
        .unwrap_or_default()
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}
