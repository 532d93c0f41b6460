//! Path utilities for detecting file types by extension.
//!
//! The renaming pipeline only touches video files (and their subtitle
//! companions); everything else in a download directory is left alone.

use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv",
];

/// List of supported subtitle file extensions.
const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "ssa", "sub", "vtt"];

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use donghua_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("episode.mp4")));
/// assert!(is_video_file(Path::new("/path/to/episode.ts")));
/// assert!(!is_video_file(Path::new("subtitle.srt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if a path has a subtitle file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use donghua_common::paths::is_subtitle_file;
///
/// assert!(is_subtitle_file(Path::new("episode.srt")));
/// assert!(!is_subtitle_file(Path::new("episode.mp4")));
/// ```
pub fn is_subtitle_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUBTITLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
