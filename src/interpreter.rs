/// The evaluator module folds a tree into a number.
///
/// The evaluator walks a tree depth-first, resolving variables through a
/// caller-supplied context and applying functions and operators to the
/// values of their children.
///
/// # Responsibilities
/// - Defines the evaluation `Context`.
/// - Dispatches on node kind and applies arithmetic.
/// - Reports variables that cannot be resolved.
pub mod evaluator;
/// The lexer module tokenizes prefix notation.
///
/// The lexer reads the raw text and produces a stream of tokens: numeric
/// literals, identifiers and operator symbols, each with its source column.
///
/// # Responsibilities
/// - Skips separators between tokens.
/// - Tells a negative literal apart from the minus operator.
/// - Rejects malformed literals and unknown characters.
pub mod lexer;
/// The parser module rebuilds trees from tokens.
///
/// The parser reads one symbol at a time and uses the arity of each symbol to
/// decide how many subtrees follow it, so no brackets are needed.
///
/// # Responsibilities
/// - Converts tokens into nodes, attaching children slot by slot.
/// - Reports truncated input, trailing input and excessive nesting.
pub mod parser;
/// The serializer module writes trees back out as text.
///
/// # Responsibilities
/// - Writes prefix notation that the parser reads back into the same tree.
/// - Writes Graphviz digraphs for inspection.
pub mod serializer;
