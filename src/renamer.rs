//! Batch renaming of downloaded episode files.
//!
//! Walks a download directory, matches each video or subtitle file to a
//! tracked series, resolves its title and renames it in place. Subtitle
//! companions resolve to the same stem as their video, so the pair stays
//! associated after renaming. Failure of one file never stops the batch;
//! each outcome is tallied in the summary.

use anyhow::{Context, Result};
use donghua_common::paths::{is_subtitle_file, is_video_file};
use donghua_common::Series;
use donghua_title::Resolver;
use std::path::Path;
use walkdir::WalkDir;

use crate::archive::ResolvedArchive;
use crate::library;

/// Outcome tally of one rename run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenameSummary {
    /// Files renamed (or that would be, in dry-run mode).
    pub renamed: usize,
    /// Files skipped because their resolved title is already archived.
    pub duplicates: usize,
    /// Files skipped because no tracked series matched.
    pub unmatched: usize,
    /// Files whose resolution or rename failed.
    pub failed: usize,
}

/// Rename every matching video file under `dir`.
///
/// In dry-run mode nothing is renamed or recorded; the summary counts
/// what a real run would do.
pub fn rename_directory(
    dir: &Path,
    series: &[Series],
    resolver: &Resolver,
    archive: &mut ResolvedArchive,
    dry_run: bool,
) -> Result<RenameSummary> {
    let mut summary = RenameSummary::default();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read directory entry: {}", e);
                summary.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_video_file(entry.path()) && !is_subtitle_file(entry.path()) {
            continue;
        }

        match rename_one(entry.path(), series, resolver, archive, dry_run) {
            Ok(Outcome::Renamed) => summary.renamed += 1,
            Ok(Outcome::Duplicate) => summary.duplicates += 1,
            Ok(Outcome::Unmatched) => summary.unmatched += 1,
            Err(e) => {
                tracing::warn!(path = ?entry.path(), "Failed to rename: {:#}", e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        renamed = summary.renamed,
        duplicates = summary.duplicates,
        unmatched = summary.unmatched,
        failed = summary.failed,
        "rename run complete"
    );
    Ok(summary)
}

enum Outcome {
    Renamed,
    Duplicate,
    Unmatched,
}

fn rename_one(
    path: &Path,
    series: &[Series],
    resolver: &Resolver,
    archive: &mut ResolvedArchive,
    dry_run: bool,
) -> Result<Outcome> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("non-UTF-8 file name")?;

    let Some(matched) = library::match_series(series, file_name) else {
        tracing::debug!(file = file_name, "no tracked series matched");
        return Ok(Outcome::Unmatched);
    };

    let resolved = resolver
        .resolve(file_name, &matched.name)
        .with_context(|| format!("resolving {:?}", file_name))?;

    if archive.contains(&resolved) {
        tracing::debug!(resolved, "already archived, skipping");
        return Ok(Outcome::Duplicate);
    }

    if resolved == file_name {
        // Already in resolved form; record it so later runs skip it.
        if !dry_run {
            archive.record(&resolved)?;
        }
        return Ok(Outcome::Duplicate);
    }

    let target = path.with_file_name(&resolved);
    if dry_run {
        println!("[DRY RUN] {} -> {}", file_name, resolved);
        return Ok(Outcome::Renamed);
    }

    std::fs::rename(path, &target)
        .with_context(|| format!("renaming {:?} to {:?}", path, target))?;
    archive.record(&resolved)?;
    println!("{} -> {}", file_name, resolved);
    Ok(Outcome::Renamed)
}
