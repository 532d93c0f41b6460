//! Core types shared between the library scanner and the renamer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A tracked series: the canonical name used for matching and output
/// naming, plus the library folder the name was derived from.
///
/// The canonical name is treated as an opaque string everywhere: it is
/// matched by substring containment against raw titles and concatenated
/// into resolved titles, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Canonical series name (e.g. "斗罗大陆").
    pub name: String,
    /// Library folder the name came from, if any.
    pub folder: Option<PathBuf>,
}

impl Series {
    /// Create a series with no backing folder (e.g. from config).
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            folder: None,
        }
    }

    /// Create a series derived from a library folder name.
    pub fn from_folder<S: Into<String>>(name: S, folder: PathBuf) -> Self {
        Self {
            name: name.into(),
            folder: Some(folder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_new() {
        let series = Series::new("斗罗大陆");
        assert_eq!(series.name, "斗罗大陆");
        assert!(series.folder.is_none());
    }

    #[test]
    fn test_series_from_folder() {
        let series = Series::from_folder("完美世界", PathBuf::from("/library/Perfect World (完美世界)"));
        assert_eq!(series.name, "完美世界");
        assert!(series.folder.is_some());
    }
}
