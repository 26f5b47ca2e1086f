//! Cross-checks published release versions across a vendor's web pages
//!
//! A run fetches the older-versions index, the changelog pages, and the
//! download, desktop and mobile app pages, extracts the version each page
//! claims, and reports pairwise verdicts on whether pages about the same
//! channel agree.
//!
//! # Modules
//!
//! - [`fetch`]: HTTP capability (GET/HEAD) behind a mockable trait
//! - [`dom`]: query layer over parsed HTML
//! - [`version`]: extraction heuristics and the known release-date table
//! - [`scan`]: one scanner per source page
//! - [`reconcile`]: lexical pairwise comparison
//! - [`report`]: sequential orchestration and line-oriented output
//! - [`channel`] / [`config`]: channel model and site literals

pub mod channel;
pub mod config;
pub mod dom;
pub mod fetch;
pub mod reconcile;
pub mod report;
pub mod scan;
pub mod version;
