//! Version extraction from download URLs
//!
//! Resolution order, first match wins:
//! 1. a known release-date token appearing anywhere in the URL
//! 2. a path segment carrying the product prefix (`owncloud-` for server
//!    URLs, `ownCloud-` for desktop URLs)
//! 3. desktop only: the segment after a literal `stable` segment
//!
//! Anything else is unknown.

use crate::config::{
    DESKTOP_INSTALLER_PREFIX, DESKTOP_PATH_MARKER, SERVER_PACKAGE_PREFIX, SERVER_PATH_MARKER,
    STABLE_PATH_SEGMENT,
};
use crate::version::known::KnownVersions;

/// Best-guess version for a download URL, or None when no heuristic applies
pub fn version_from_url(url: &str, known: &KnownVersions) -> Option<String> {
    if let Some(version) = known.version_for_url(url) {
        return Some(version.to_string());
    }
    if let Some(version) = prefix_segment_version(url) {
        return Some(version);
    }
    stable_path_version(url)
}

/// Numeric version components following `prefix` inside `segment`, joined
/// with dots and capped at three. Stops at the first non-numeric component,
/// dropping file extensions and build suffixes.
pub fn version_after_prefix(segment: &str, prefix: &str) -> Option<String> {
    let at = segment.find(prefix)?;
    let after = &segment[at + prefix.len()..];
    let components: Vec<&str> = after
        .split('.')
        .take_while(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
        .take(3)
        .collect();
    if components.is_empty() {
        None
    } else {
        Some(components.join("."))
    }
}

fn prefix_segment_version(url: &str) -> Option<String> {
    let prefix = if url.contains(SERVER_PATH_MARKER) {
        SERVER_PACKAGE_PREFIX
    } else if url.contains(DESKTOP_PATH_MARKER) {
        DESKTOP_INSTALLER_PREFIX
    } else {
        return None;
    };

    url.split('/')
        .find_map(|segment| version_after_prefix(segment, prefix))
}

/// Desktop mirrors lay out versions as `.../stable/<version>/...`, sometimes
/// with a doubled separator that yields an empty segment.
fn stable_path_version(url: &str) -> Option<String> {
    if !url.contains(DESKTOP_PATH_MARKER) {
        return None;
    }

    let segments: Vec<&str> = url.split('/').collect();
    for (i, segment) in segments.iter().enumerate() {
        if *segment != STABLE_PATH_SEGMENT {
            continue;
        }
        if let Some(next) = segments[i + 1..].iter().find(|s| !s.is_empty()) {
            if next.bytes().filter(|b| *b == b'.').count() == 2 {
                return Some((*next).to_string());
            }
        }
    }
    None
}
