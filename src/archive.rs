//! Deduplication archive.
//!
//! A line-delimited text file of resolved titles that have already been
//! processed. The file is append-only: entries are never rewritten or
//! removed, so a crash mid-run loses at most the entry being written and
//! never corrupts earlier history. Membership lookups run against an
//! in-memory set loaded once at startup.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The set of resolved titles already downloaded.
#[derive(Debug)]
pub struct ResolvedArchive {
    path: PathBuf,
    entries: HashSet<String>,
}

impl ResolvedArchive {
    /// Load the archive from disk, or start empty if the file does not
    /// exist yet (it is created on the first [`record`](Self::record)).
    pub fn load(path: &Path) -> Result<Self> {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read archive: {:?}", path))
            }
        };

        tracing::debug!(path = ?path, entries = entries.len(), "loaded archive");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Whether a resolved title has been processed before.
    pub fn contains(&self, resolved: &str) -> bool {
        self.entries.contains(resolved)
    }

    /// Number of archived titles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a resolved title to the archive file and the in-memory set.
    ///
    /// Recording an already-present title is a no-op, keeping the file
    /// duplicate-free even if callers forget to check first.
    pub fn record(&mut self, resolved: &str) -> Result<()> {
        if !self.entries.insert(resolved.to_string()) {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open archive for append: {:?}", self.path))?;
        writeln!(file, "{resolved}")
            .with_context(|| format!("Failed to append to archive: {:?}", self.path))?;

        tracing::debug!(resolved, "recorded in archive");
        Ok(())
    }
}
