//! Scanner for the download page
//!
//! Two channels live here: the Infinite Scale anchor (version is the last
//! whitespace token of its text) and the Server version, published as a bare
//! x.x.x triplet in one of the page's text blocks.

use tracing::warn;

use crate::config::{INFINITE_SCALE_MARKER, TEXT_BLOCK_CLASS};
use crate::dom;
use crate::fetch::Fetcher;
use crate::scan::{Reading, fetch_document};
use crate::version::format::is_strict_version;

/// Versions published on the download page
#[derive(Debug)]
pub struct DownloadPage {
    pub infinite_scale: Reading,
    pub server: Reading,
}

pub async fn scan<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> DownloadPage {
    let doc = match fetch_document(fetcher, url).await {
        Ok(doc) => doc,
        Err(err) => {
            warn!("download page fetch failed for {url}: {err}");
            return DownloadPage {
                infinite_scale: Reading::fetch_failed(&err),
                server: Reading::fetch_failed(&err),
            };
        }
    };

    let infinite_scale = dom::anchors_where(&doc, |href| href.contains(INFINITE_SCALE_MARKER))
        .first()
        .and_then(|anchor| anchor.text.split_whitespace().last().map(str::to_string));

    let server = dom::text_blocks(&doc, TEXT_BLOCK_CLASS)
        .into_iter()
        .find(|text| is_strict_version(text));

    DownloadPage {
        infinite_scale: Reading::from_extraction(infinite_scale),
        server: Reading::from_extraction(server),
    }
}
