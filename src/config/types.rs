use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use donghua_title::ResolverConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub library: LibraryConfig,
    pub archive: ArchiveConfig,
    pub resolver: ResolverConfig,
}

/// Where the series library lives and which extra names to track.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Directory whose child folders name the tracked series. A folder
    /// named "Perfect World (完美世界)" contributes the series 完美世界.
    pub series_dir: PathBuf,

    /// Series names tracked in addition to the library folders.
    pub extra_series: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            series_dir: PathBuf::from("."),
            extra_series: Vec::new(),
        }
    }
}

/// Deduplication archive location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Line-delimited file of already-processed resolved titles.
    pub file: PathBuf,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("resolved_names_download_archive.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.library.series_dir, PathBuf::from("."));
        assert!(config.library.extra_series.is_empty());
        assert_eq!(
            config.archive.file,
            PathBuf::from("resolved_names_download_archive.txt")
        );
        assert_eq!(config.resolver.noise_tokens, vec!["1080P", "4K"]);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [library]
            series_dir = "/library"
            extra_series = ["雾山五行"]

            [archive]
            file = "/data/archive.txt"

            [resolver]
            noise_tokens = ["1080P", "4K", "BDRip"]
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.library.series_dir, PathBuf::from("/library"));
        assert_eq!(config.library.extra_series, vec!["雾山五行"]);
        assert_eq!(config.archive.file, PathBuf::from("/data/archive.txt"));
        assert_eq!(config.resolver.noise_tokens.len(), 3);
        // Unspecified resolver fields keep their defaults.
        assert!(config.resolver.parse_suffixes);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[library]\nseries_dir = \"/x\"").unwrap();
        assert_eq!(config.library.series_dir, PathBuf::from("/x"));
        assert_eq!(
            config.archive.file,
            PathBuf::from("resolved_names_download_archive.txt")
        );
    }
}
