//! # polexpr
//!
//! polexpr models arithmetic expressions as trees. It evaluates them, writes
//! them out in prefix ("Polish") notation and reads that notation back into
//! the same tree.
//!
//! ```
//! use polexpr::{Context, parse, to_prefix_notation};
//!
//! let tree = parse("+|sin|var0|2.000000").unwrap();
//! let context = Context::from_values([0.0]);
//!
//! assert_eq!(tree.evaluate(&context).unwrap(), 2.0);
//! assert_eq!(to_prefix_notation(&tree, "|"), "+|sin|var0|2.000000");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of expression trees.
///
/// This module declares the `Node` enum and the operator and function
/// symbols it is built from. Trees are built through factory functions or by
/// the parser, and traversed by the evaluator and serializers.
///
/// # Responsibilities
/// - Defines node kinds and their fixed arities.
/// - Provides arity-checked child access.
/// - Provides `Shell`, the only representation of a partially built node.
pub mod ast;
/// Provides error types for every phase.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// evaluating or manipulating nodes, each carrying the source column or name
/// needed to point the user at the problem.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and serialization.
///
/// # Responsibilities
/// - Coordinates the pipeline text, tokens, tree, then number or text.
/// - Provides entry points for each stage.
pub mod interpreter;
/// General utilities for numeric literal formatting.
pub mod util;

pub use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::Context,
        parser::core::{parse, parse_with},
        serializer::prefix::to_prefix_notation,
    },
};

/// Parses prefix notation and evaluates it against `context`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use polexpr::{Context, evaluate_prefix};
///
/// assert_eq!(evaluate_prefix("-|3|4", &Context::new()).unwrap(), -1.0);
///
/// // 'var5' is not bound.
/// assert!(evaluate_prefix("var5", &Context::new()).is_err());
/// ```
pub fn evaluate_prefix(source: &str, context: &Context) -> Result<f64, Box<dyn std::error::Error>> {
    let tree = parse(source)?;
    Ok(tree.evaluate(context)?)
}
