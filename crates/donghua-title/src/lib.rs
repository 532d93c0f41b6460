//! Title resolution for Chinese-language animated series.
//!
//! Takes a raw, inconsistently formatted episode title (mixed
//! Chinese/English text, Chinese numerals, varied season/episode notations,
//! numeric ranges, file suffixes) plus a canonical series name, and produces
//! a normalized `"{name} [S{n}] EP{m}"` title. The output doubles as the
//! target filename and the deduplication key, so resolution is strictly
//! deterministic: same inputs, same output, every run.
//!
//! The pipeline is four stages in fixed order: suffix split, noise filter
//! (marker canonicalization), number extraction over an ordered rule table,
//! and formatting. The resolver is stateless apart from its configuration
//! and the process-wide compiled pattern tables, and performs no I/O, so it
//! can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use donghua_title::Resolver;
//!
//! let resolver = Resolver::new();
//! assert_eq!(
//!     resolver.resolve("完美世界 第十二集 1080P.mp4", "完美世界").unwrap(),
//!     "完美世界 EP12.mp4"
//! );
//! assert_eq!(resolver.resolve("Show S02E07", "Show").unwrap(), "Show S2 EP7");
//! ```

pub mod config;
pub mod numeral;

mod extract;
mod filter;
mod format;
mod model;

pub use config::ResolverConfig;
pub use model::NumberSet;
pub use numeral::NumeralError;

/// Error resolving a title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A Chinese numeral run in the title could not be converted.
    #[error("unconvertible numeral: {0}")]
    Numeral(#[from] NumeralError),
}

/// Stateless title resolver.
///
/// Cheap to clone; construct once and reuse across calls and threads.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with the given configuration.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The resolver's configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a raw title against a canonical series name.
    ///
    /// `raw` may be a bare title or a filesystem path; a recognized file
    /// suffix group is detached before analysis and reattached to the
    /// result. A title with no discernible episode information resolves to
    /// the original name unchanged (suffix included), which is a valid
    /// outcome rather than an error.
    pub fn resolve(&self, raw: &str, base_name: &str) -> Result<String, ResolveError> {
        let split = model::split_suffix(raw, self.config.parse_suffixes);
        let filtered = filter::filter(&split.stem, &self.config.noise_tokens)?;
        let numbers = extract::extract(&filtered, &split.stem);
        let resolved = format::render(base_name, &numbers, &split.suffix, &split.stem);
        tracing::debug!(raw, base = base_name, resolved, "resolved title");
        Ok(resolved)
    }

    /// Resolve and return the extracted numeric fields alongside the title.
    ///
    /// Useful to callers that key downloads by episode number rather than
    /// the full resolved string.
    pub fn resolve_numbers(&self, raw: &str) -> Result<NumberSet, ResolveError> {
        let split = model::split_suffix(raw, self.config.parse_suffixes);
        let filtered = filter::filter(&split.stem, &self.config.noise_tokens)?;
        Ok(extract::extract(&filtered, &split.stem))
    }
}

/// Resolve a single title with default configuration.
///
/// Convenience for one-off calls; construct a [`Resolver`] when resolving
/// in a loop.
pub fn resolve(raw: &str, base_name: &str) -> Result<String, ResolveError> {
    Resolver::new().resolve(raw, base_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_convenience() {
        assert_eq!(resolve("Show 第5集", "Show").unwrap(), "Show EP5");
    }

    #[test]
    fn test_resolver_reuse() {
        let resolver = Resolver::new();
        assert_eq!(resolver.resolve("第3集", "A").unwrap(), "A EP3");
        assert_eq!(resolver.resolve("第4集", "B").unwrap(), "B EP4");
    }

    #[test]
    fn test_custom_noise_tokens() {
        let resolver = Resolver::with_config(
            ResolverConfig::new().with_noise_token("BDRip"),
        );
        assert_eq!(
            resolver.resolve("Show BDRip 第2集", "Show").unwrap(),
            "Show EP2"
        );
    }

    #[test]
    fn test_resolve_numbers() {
        let resolver = Resolver::new();
        let set = resolver.resolve_numbers("Show S02E07").unwrap();
        assert_eq!(set.season.as_deref(), Some("2"));
        assert_eq!(set.episode.as_deref(), Some("7"));
    }

    #[test]
    fn test_unconvertible_numeral_surfaces() {
        assert!(matches!(
            resolve("第超集", "Show"),
            Err(ResolveError::Numeral(NumeralError::UnrecognizedChar('超')))
        ));
    }
}
