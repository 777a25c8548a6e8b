//! # Watch-URL parsing
//!
//! Extracts the opaque video identifier that keys an artifact family from a
//! canonical YouTube watch URL.

use std::sync::LazyLock;

use artifact_store::VideoId;
use regex::Regex;

use crate::error::Error;

static WATCH_URL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([^&#]+)").unwrap());

/// Pulls the `v=` query parameter out of a watch URL.
///
/// Fails with [`Error::InvalidReference`] when the URL carries no extractable
/// identifier.
pub fn video_id_from_url(url: &str) -> Result<VideoId, Error> {
    WATCH_URL_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId::new(m.as_str()))
        .ok_or_else(|| Error::InvalidReference {
            url: url.to_string(),
        })
}
