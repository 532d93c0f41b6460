//! Series library scanning and title matching.
//!
//! The tracked series are derived from the library directory: each child
//! folder carrying a parenthesized native name, e.g.
//! "Perfect World (完美世界)", contributes that name. Raw titles are then
//! matched to a series by substring containment of the canonical name.

use anyhow::{Context, Result};
use donghua_common::Series;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// The parenthesized native name inside a library folder name.
static FOLDER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("valid pattern"));

/// Scan the library directory for tracked series.
///
/// Every parenthesized group in a child directory name contributes a
/// series keyword, so "Soul Land (Douluo) (斗罗大陆)" is matchable under
/// either name. Folders without one are skipped, as are files at the top
/// level. Results are sorted by name so output is stable across runs.
pub fn scan_series(series_dir: &Path) -> Result<Vec<Series>> {
    let mut series = Vec::new();

    let entries = std::fs::read_dir(series_dir)
        .with_context(|| format!("Failed to read series directory: {:?}", series_dir))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let folder_name = entry.file_name();
        let Some(folder_name) = folder_name.to_str() else {
            continue;
        };
        for caps in FOLDER_NAME.captures_iter(folder_name) {
            let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            if !name.is_empty() {
                series.push(Series::from_folder(name, entry.path()));
            }
        }
    }

    series.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = ?series_dir, count = series.len(), "scanned library");
    Ok(series)
}

/// Match a raw title to a tracked series by substring containment.
///
/// The longest matching name wins, so "斗罗大陆2" is not shadowed by
/// "斗罗大陆" when both are tracked.
pub fn match_series<'a>(series: &'a [Series], raw_title: &str) -> Option<&'a Series> {
    series
        .iter()
        .filter(|s| raw_title.contains(s.name.as_str()))
        .max_by_key(|s| s.name.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(names: &[&str]) -> Vec<Series> {
        names.iter().map(|name| Series::new(*name)).collect()
    }

    #[test]
    fn test_scan_series() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Perfect World (完美世界)")).unwrap();
        std::fs::create_dir(dir.path().join("Soul Land (斗罗大陆)")).unwrap();
        std::fs::create_dir(dir.path().join("No Native Name")).unwrap();
        std::fs::write(dir.path().join("stray.txt"), "").unwrap();

        let found = scan_series(dir.path()).unwrap();
        let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["完美世界", "斗罗大陆"]);
        assert!(found[0].folder.is_some());
    }

    #[test]
    fn test_scan_all_parenthesized_groups() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Soul Land (Douluo) (斗罗大陆)")).unwrap();

        let found = scan_series(dir.path()).unwrap();
        let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Douluo", "斗罗大陆"]);
        // Both keywords point at the same folder.
        assert_eq!(found[0].folder, found[1].folder);
    }

    #[test]
    fn test_scan_missing_dir_fails() {
        assert!(scan_series(Path::new("/nonexistent/library")).is_err());
    }

    #[test]
    fn test_match_by_containment() {
        let list = series(&["完美世界", "斗罗大陆"]);
        let matched = match_series(&list, "完美世界 第12集 1080P.mp4").unwrap();
        assert_eq!(matched.name, "完美世界");
        assert!(match_series(&list, "雾山五行 第3集").is_none());
    }

    #[test]
    fn test_longest_name_wins() {
        let list = series(&["斗罗大陆", "斗罗大陆2绝世唐门"]);
        let matched = match_series(&list, "斗罗大陆2绝世唐门 第5集").unwrap();
        assert_eq!(matched.name, "斗罗大陆2绝世唐门");
    }
}
