//! Donghua: episode title normalization and renaming for Chinese-language
//! animated series.
//!
//! The heavy lifting lives in the `donghua-title` crate; this crate wires
//! it to a series library on disk, a line-delimited deduplication archive
//! and a batch renamer, all exposed through the CLI in the binary.

pub mod archive;
pub mod config;
pub mod library;
pub mod renamer;
