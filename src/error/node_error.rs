#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents misuse of the node constructors and child slots.
///
/// These signal a contract violation by the caller rather than bad input.
pub enum NodeError {
    /// A child slot at or beyond the node's arity was addressed.
    ChildIndexOutOfRange {
        /// The requested slot.
        index: usize,
        /// The arity of the node.
        arity: usize,
    },
    /// A shell was finished before all of its slots were filled.
    MissingChild {
        /// The first empty slot.
        index: usize,
        /// The arity of the node.
        arity: usize,
    },
    /// A variable name would not read back as the same variable.
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChildIndexOutOfRange { index, arity } => write!(f,
                                                                  "Child index out of range. Arity is {arity}, but found {index} instead."),
            Self::MissingChild { index, arity } => {
                write!(f, "Child {index} of a node with arity {arity} was never set.")
            },
            Self::InvalidVariableName { name } => write!(f, "'{name}' is not a valid variable name."),
        }
    }
}

impl std::error::Error for NodeError {}
