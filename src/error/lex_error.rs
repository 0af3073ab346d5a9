#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing prefix notation.
///
/// Columns are 1-based and counted in characters.
pub enum LexError {
    /// A numeric literal contained more than one decimal point.
    MalformedNumber {
        /// The column of the offending `.`.
        column: usize,
    },
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// The column where the character was found.
        column:    usize,
    },
}

impl LexError {
    /// Gets the column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::MalformedNumber { column } | Self::UnexpectedCharacter { column, .. } => *column,
        }
    }

    /// Renders a diagnostic pointing at the offending column of `source`.
    ///
    /// The output has three lines: the message, the source text and a caret
    /// under the column.
    ///
    /// ## Example
    /// ```
    /// use polexpr::error::LexError;
    ///
    /// let err = LexError::MalformedNumber { column: 5 };
    /// assert_eq!(err.render("12.3.4"),
    ///            "Invalid expression near column: 5\n12.3.4\n    ^");
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let column = self.column();
        let padding = " ".repeat(column.saturating_sub(1));
        format!("Invalid expression near column: {column}\n{source}\n{padding}^")
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { column } => write!(f,
                                                       "Error at column {column}: Numeric literal contains a second decimal point."),
            Self::UnexpectedCharacter { character, column } => {
                write!(f, "Error at column {column}: Unexpected character '{character}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
