#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Arithmetic never fails: division by zero follows IEEE 754 and yields an
/// infinity or NaN.
pub enum EvalError {
    /// A variable had no bound literal and no entry in the context.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "Unbound variable '{name}'."),
        }
    }
}

impl std::error::Error for EvalError {}
