//! Resolver configuration.

/// Configuration for title resolution.
///
/// The defaults reproduce the behavior of the download sites the resolver
/// was built against; the knobs exist for libraries whose naming habits
/// differ (extra noise tokens, titles that legitimately contain dots).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Tokens removed verbatim from the stem before numeric extraction.
    /// Matched case-sensitively, anywhere in the stem.
    pub noise_tokens: Vec<String>,

    /// Whether to split a trailing file-extension group off the title
    /// before analysis and reattach it to the result.
    pub parse_suffixes: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            noise_tokens: vec!["1080P".to_string(), "4K".to_string()],
            parse_suffixes: true,
        }
    }
}

impl ResolverConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the noise token list.
    #[must_use]
    pub fn with_noise_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single noise token to the list.
    #[must_use]
    pub fn with_noise_token<S: Into<String>>(mut self, token: S) -> Self {
        self.noise_tokens.push(token.into());
        self
    }

    /// Enable or disable file-suffix splitting.
    #[must_use]
    pub fn with_parse_suffixes(mut self, enabled: bool) -> Self {
        self.parse_suffixes = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.noise_tokens, vec!["1080P", "4K"]);
        assert!(config.parse_suffixes);
    }

    #[test]
    fn test_builder() {
        let config = ResolverConfig::new()
            .with_noise_token("BDRip")
            .with_parse_suffixes(false);
        assert_eq!(config.noise_tokens, vec!["1080P", "4K", "BDRip"]);
        assert!(!config.parse_suffixes);
    }

    #[test]
    fn test_with_noise_tokens_replaces() {
        let config = ResolverConfig::new().with_noise_tokens(["720P"]);
        assert_eq!(config.noise_tokens, vec!["720P"]);
    }
}
