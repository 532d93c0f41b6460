//! Donghua-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across donghua:
//!
//! - **Core Types**: The [`Series`] record tying a canonical series name to
//!   its library folder
//! - **Path Utilities**: Functions to detect file types by extension
//!
//! # Examples
//!
//! ```
//! use donghua_common::Series;
//! use donghua_common::paths::is_video_file;
//! use std::path::Path;
//!
//! assert!(is_video_file(Path::new("episode.mp4")));
//!
//! let series = Series::new("完美世界");
//! assert!(series.folder.is_none());
//! ```

pub mod paths;
pub mod types;

pub use types::*;
