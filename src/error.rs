/// Lexing errors.
///
/// Defines the errors raised while turning prefix notation into tokens. These
/// are the hard-stop failures of the pipeline: a malformed numeric literal or
/// a character that cannot begin any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while rebuilding a tree from a
/// token stream, such as running out of tokens before an operator received
/// all of its operands.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while folding a tree into a number.
pub mod eval_error;
/// Node access errors.
///
/// Raised when a child slot is addressed outside a node's arity or when an
/// incomplete shell is finished.
pub mod node_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use node_error::NodeError;
pub use parse_error::ParseError;
