//! Scanner for the mobile apps page
//!
//! Store badges are divs with fixed ids; the version is published in the
//! paragraph right before each badge as "Version: <major>.<minor>".

use scraper::Html;
use tracing::warn;

use crate::config::{ANDROID_BADGE_ID, IOS_BADGE_ID};
use crate::dom;
use crate::fetch::Fetcher;
use crate::scan::{Reading, fetch_document};
use crate::version::format::MobileVersionPattern;

/// Versions published on the mobile apps page
#[derive(Debug)]
pub struct MobilePage {
    pub ios: Reading,
    pub android: Reading,
}

pub async fn scan<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> MobilePage {
    let doc = match fetch_document(fetcher, url).await {
        Ok(doc) => doc,
        Err(err) => {
            warn!("mobile apps page fetch failed for {url}: {err}");
            let failed = Reading::fetch_failed(&err);
            return MobilePage {
                ios: failed.clone(),
                android: failed,
            };
        }
    };

    let pattern = MobileVersionPattern::new();
    MobilePage {
        ios: badge_version(&doc, IOS_BADGE_ID, &pattern),
        android: badge_version(&doc, ANDROID_BADGE_ID, &pattern),
    }
}

fn badge_version(doc: &Html, badge_id: &str, pattern: &MobileVersionPattern) -> Reading {
    let version =
        dom::paragraph_before_div(doc, badge_id).and_then(|text| pattern.extract(&text));
    Reading::from_extraction(version)
}
