/// Prefix notation output.
///
/// Writes a tree back out as the text the parser reads, the exact inverse of
/// parsing for a fixed separator.
pub mod prefix;

/// Graphviz output.
///
/// Writes a tree as a DOT digraph for visual inspection.
pub mod graphviz;
