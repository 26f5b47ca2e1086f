//! Scanner for the changelog pages
//!
//! Returns the first qualifying release per page. This is a find-first
//! linear scan in document order, not a collect-then-pick: once a candidate
//! qualifies, later anchors are never inspected.

use scraper::Html;
use tracing::warn;

use crate::channel::ChangelogSource;
use crate::config::IOS_CHANGELOG_MARKER;
use crate::dom;
use crate::fetch::{Fetcher, link_is_live};
use crate::scan::{Reading, fetch_document};
use crate::version::format::{is_strict_version, mentions_prerelease};

/// Latest released version according to one changelog page
pub async fn latest_version<F: Fetcher + ?Sized>(
    fetcher: &F,
    source: ChangelogSource,
    url: &str,
) -> Reading {
    let doc = match fetch_document(fetcher, url).await {
        Ok(doc) => doc,
        Err(err) => {
            warn!("changelog fetch failed for {url}: {err}");
            return Reading::fetch_failed(&err);
        }
    };

    match source {
        ChangelogSource::IosApp => ios_latest(&doc),
        _ => general_latest(fetcher, &doc).await,
    }
}

/// The iOS changelog lists entries as "Changelog for owncloud-ios-client
/// 3.2.1"; the version is the last whitespace token of the anchor text.
fn ios_latest(doc: &Html) -> Reading {
    for anchor in dom::anchors_where(doc, |href| href.contains(IOS_CHANGELOG_MARKER)) {
        if let Some(candidate) = anchor.text.split_whitespace().last() {
            if is_strict_version(candidate) {
                return Reading::Found(candidate.to_string());
            }
        }
    }
    Reading::NotFound
}

/// General case: the first anchor whose text is a strict release version,
/// free of pre-release markers, and whose target still resolves.
async fn general_latest<F: Fetcher + ?Sized>(fetcher: &F, doc: &Html) -> Reading {
    for anchor in dom::anchors(doc) {
        let candidate = anchor.text.trim();
        if !is_strict_version(candidate) || mentions_prerelease(candidate) {
            continue;
        }
        if link_is_live(fetcher, &anchor.href).await {
            return Reading::Found(candidate.to_string());
        }
    }
    Reading::NotFound
}
