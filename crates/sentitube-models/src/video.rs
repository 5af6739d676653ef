//! Video identifiers and URL parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// YouTube video IDs are exactly 11 characters.
pub const VIDEO_ID_LEN: usize = 11;

/// An 11-character YouTube video identifier.
///
/// Only constructed through [`extract_video_id`], so a held `VideoId` is
/// always length- and charset-valid. Whether it names a real video is the
/// comment service's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video ID from an arbitrary URL string.
///
/// Looks for `v=` followed by exactly eleven ID characters, then falls back
/// to the `youtu.be/<id>` short form. Returns `None` when neither matches;
/// shorter runs of ID characters never match.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    extract_after(url, "v=")
        .or_else(|| extract_after(url, "youtu.be/"))
        .map(VideoId)
}

/// Scan for every occurrence of `marker` and return the first one followed by
/// at least [`VIDEO_ID_LEN`] ID characters, truncated to that length.
fn extract_after(url: &str, marker: &str) -> Option<String> {
    let mut rest = url;
    while let Some(pos) = rest.find(marker) {
        rest = &rest[pos + marker.len()..];
        let run = rest
            .char_indices()
            .take_while(|(_, c)| is_id_char(*c))
            .count();
        if run >= VIDEO_ID_LEN {
            return Some(rest[..VIDEO_ID_LEN].to_string());
        }
    }
    None
}

/// Valid YouTube ID characters: alphanumeric, hyphen, underscore.
fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
