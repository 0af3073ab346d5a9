/// Core tree construction.
///
/// Turns the token stream into a tree by reading one symbol, then recursively
/// reading exactly as many subtrees as that symbol's arity requires.
pub mod core;

/// Parser configuration.
///
/// Holds the separator accepted between tokens and the recursion limit, and
/// validates them before any input is read.
pub mod config;
