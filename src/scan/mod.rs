//! Page scanners, one per source page
//!
//! Each scanner fetches one page, queries it for candidate elements, runs the
//! extraction heuristics, and reports per-channel readings. Failures never
//! propagate: a failed fetch or an unexpected page shape degrades to a logged
//! non-fatal outcome and scanning continues for unaffected channels.
//!
//! ```text
//! ┌────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Scanners    │────▶│   Extract   │────▶│  Reconcile  │
//! │ (page queries) │     │ (heuristics)│     │  (compare)  │
//! └────────────────┘     └─────────────┘     └─────────────┘
//!         │
//!         ▼
//! ┌────────────────┐
//! │  Fetch + Dom   │
//! │ (GET/HEAD, CSS)│
//! └────────────────┘
//! ```

pub mod changelog;
pub mod desktop;
pub mod download;
pub mod mobile;
pub mod older_versions;

use scraper::Html;

use crate::fetch::{FetchError, Fetcher};

/// Outcome of looking for one version on one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    Found(String),
    NotFound,
    FetchFailed(String),
}

impl Reading {
    /// Found/NotFound from an optional extraction
    pub fn from_extraction(version: Option<String>) -> Self {
        match version {
            Some(v) => Reading::Found(v),
            None => Reading::NotFound,
        }
    }

    pub fn fetch_failed(err: &FetchError) -> Self {
        Reading::FetchFailed(err.to_string())
    }

    pub fn found(&self) -> Option<&str> {
        match self {
            Reading::Found(v) => Some(v),
            _ => None,
        }
    }
}

/// GET a page and parse it, treating any non-200 status as a failure
pub(crate) async fn fetch_document<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<Html, FetchError> {
    let page = fetcher.get(url).await?;
    if page.status != 200 {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: page.status,
        });
    }
    Ok(Html::parse_document(&page.body))
}
