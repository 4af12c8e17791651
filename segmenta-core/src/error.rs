//! Error types for the rule-based splitters

use thiserror::Error;

/// Errors raised while building splitters or loading language rules.
///
/// Splitting itself never fails; every error here is a construction-time
/// problem with configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No embedded rules exist for the requested language code
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A language configuration failed to parse or validate
    #[error("invalid language configuration: {0}")]
    LanguageConfig(String),

    /// A section pattern is not a valid regular expression
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern as supplied
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// I/O error while reading a language configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::LanguageConfig(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let error = CoreError::UnsupportedLanguage("xx".to_string());
        assert_eq!(error.to_string(), "unsupported language: xx");
    }

    #[test]
    fn test_pattern_error_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = CoreError::Pattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("invalid pattern '('"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_toml_error_conversion() {
        let err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let error: CoreError = err.into();
        assert!(matches!(error, CoreError::LanguageConfig(_)));
    }
}
