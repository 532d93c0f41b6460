//! Value objects passed between the resolution stages.
//!
//! Everything here is created fresh per resolution call and discarded when
//! the call returns; the resolver itself holds no per-call state.

use std::path::Path;

/// File suffixes the splitter will anchor on. A dotted tail is only taken
/// as an extension group when its final component is one of these; anything
/// else stays in the stem so numeric extraction can still see it.
const KNOWN_SUFFIXES: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv", "m3u8", "m4a", "mp3", "aac",
    "srt", "ass", "ssa", "sub", "vtt",
];

/// The numeric fields extracted from a title.
///
/// `episode_range` is mutually exclusive with `episode`: when a range is
/// extracted it always wins and `episode` is left unset. Fields are kept as
/// strings because only their rendered form matters; leading zeros are
/// stripped by the extractor before the set reaches the formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberSet {
    /// Season number, if one was extracted.
    pub season: Option<String>,
    /// Single episode number, if one was extracted.
    pub episode: Option<String>,
    /// Episode range bounds (first, last), if a range was extracted.
    pub episode_range: Option<(String, String)>,
}

impl NumberSet {
    /// True when no numeric field was extracted at all.
    ///
    /// The formatter uses this to fall back to the untouched original name,
    /// distinguishing "no discernible episode info" from "episode 0".
    pub fn is_empty(&self) -> bool {
        self.season.is_none() && self.episode.is_none() && self.episode_range.is_none()
    }
}

/// A raw title split into analysis stem and reattachable suffix group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitTitle {
    /// The part of the name that is analyzed for numbers.
    pub stem: String,
    /// The detached extension group including leading dots, or empty.
    pub suffix: String,
}

/// Split a raw title into stem and file-suffix group.
///
/// Only the file-name component of a path is considered. A component
/// qualifies for the suffix group when it is short (under 8 characters),
/// whitespace-free and contains at least one ASCII letter; the group must
/// end in a known media extension or nothing is split off. Digit-only
/// components (episode numbers, years, resolutions) always stay in the
/// stem — the splitter must never eat part of the stem.
pub(crate) fn split_suffix(raw: &str, parse_suffixes: bool) -> SplitTitle {
    let name = Path::new(raw)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(raw);

    if !parse_suffixes {
        return SplitTitle {
            stem: name.to_string(),
            suffix: String::new(),
        };
    }

    let segments: Vec<&str> = name.split('.').collect();
    if segments.len() < 2 {
        return SplitTitle {
            stem: name.to_string(),
            suffix: String::new(),
        };
    }

    // Walk backwards over qualifying components; the first segment is
    // always stem.
    let mut start = segments.len();
    for i in (1..segments.len()).rev() {
        if is_suffix_component(segments[i]) {
            start = i;
        } else {
            break;
        }
    }

    let last = segments[segments.len() - 1].to_ascii_lowercase();
    if start == segments.len() || !KNOWN_SUFFIXES.contains(&last.as_str()) {
        return SplitTitle {
            stem: name.to_string(),
            suffix: String::new(),
        };
    }

    let stem = segments[..start].join(".");
    let mut suffix = String::new();
    for seg in &segments[start..] {
        suffix.push('.');
        suffix.push_str(seg);
    }

    SplitTitle { stem, suffix }
}

fn is_suffix_component(segment: &str) -> bool {
    !segment.is_empty()
        && segment.chars().count() < 8
        && !segment.chars().any(char::is_whitespace)
        && segment.chars().any(|c| c.is_ascii_alphabetic())
}
