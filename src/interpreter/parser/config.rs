use crate::error::ParseError;

/// The separator written between tokens unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = "|";
/// The deepest tree accepted unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Characters that may begin or continue a token, and so cannot appear in a
/// separator.
const TOKEN_PUNCTUATION: &[char] = &['_', '.', '+', '-', '*', '/'];

/// Settings for [`parse_with`](crate::interpreter::parser::core::parse_with).
///
/// ## Example
/// ```
/// use polexpr::interpreter::parser::config::ParserConfig;
///
/// let config = ParserConfig::default().with_separator(", ").with_max_depth(8);
/// assert_eq!(config.separator, ", ");
/// assert_eq!(config.max_depth, 8);
/// assert!(config.validate().is_ok());
/// assert!(ParserConfig::default().with_separator("x").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Skipped between tokens, in addition to whitespace and `|`.
    pub separator: String,
    /// The deepest tree accepted. The root is at depth 1.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR.to_string(),
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

impl ParserConfig {
    /// Replaces the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replaces the depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks that the separator can be told apart from tokens.
    ///
    /// # Errors
    /// Returns `InvalidSeparator` if the separator is empty or contains an
    /// ASCII letter, digit, `_`, `.`, `+`, `-`, `*` or `/`.
    pub fn validate(&self) -> Result<(), ParseError> {
        let clashes = self.separator
                          .chars()
                          .any(|c| c.is_ascii_alphanumeric() || TOKEN_PUNCTUATION.contains(&c));
        if self.separator.is_empty() || clashes {
            return Err(ParseError::InvalidSeparator { separator: self.separator.clone() });
        }
        Ok(())
    }
}
