/// Core evaluation logic and context management.
///
/// Contains the evaluation context that resolves variables and the tree fold
/// that dispatches on node kind.
pub mod core;

/// Function and operator application.
///
/// Implements the numeric meaning of every unary function and binary
/// operator.
pub mod function;
