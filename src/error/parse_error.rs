use crate::error::{LexError, NodeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing prefix notation.
pub enum ParseError {
    /// The lexer rejected the input. No partial tree is produced.
    Lex(LexError),
    /// Reached the end of input before every operator received its operands.
    UnexpectedEndOfInput {
        /// The column just past the end of the input.
        column: usize,
    },
    /// Found extra tokens after a complete tree was parsed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The column where the extra token starts.
        column: usize,
    },
    /// The tree nests deeper than the configured limit.
    DepthExceeded {
        /// The configured maximum depth.
        limit:  usize,
        /// The column of the token that would exceed the limit.
        column: usize,
    },
    /// The separator cannot be told apart from the tokens it separates.
    InvalidSeparator {
        /// The rejected separator.
        separator: String,
    },
    /// A node could not be assembled from its parsed children.
    Node(NodeError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },
            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after expression, starting with '{token}'."),
            Self::DepthExceeded { limit, column } => write!(f,
                                                            "Error at column {column}: Expression nests deeper than the limit of {limit}."),
            Self::InvalidSeparator { separator } => {
                write!(f, "Separator '{separator}' is empty or clashes with token characters.")
            },
            Self::Node(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Node(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<NodeError> for ParseError {
    fn from(value: NodeError) -> Self {
        Self::Node(value)
    }
}
