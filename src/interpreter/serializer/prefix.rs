use crate::{
    ast::Node,
    interpreter::parser::config::DEFAULT_SEPARATOR,
    util::num::NumberFormat,
};

/// Settings for [`to_prefix_notation_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeConfig {
    /// Written between a node's label and each of its subtrees.
    pub separator:     String,
    /// How constants are rendered.
    pub number_format: NumberFormat,
}

impl Default for SerializeConfig {
    fn default() -> Self {
        Self { separator:     DEFAULT_SEPARATOR.to_string(),
               number_format: NumberFormat::default(), }
    }
}

impl SerializeConfig {
    /// Replaces the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replaces the number format.
    #[must_use]
    pub const fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}

/// Writes `node` in prefix notation with constants in the default format.
///
/// The output is the node's label followed, for each child in slot order,
/// by `separator` and the child's own prefix notation.
///
/// ## Example
/// ```
/// use polexpr::{
///     ast::{BinaryOperator, Node, UnaryFunction},
///     interpreter::serializer::prefix::to_prefix_notation,
/// };
///
/// let tree = Node::binary(BinaryOperator::Plus,
///                         Node::unary(UnaryFunction::Sin, Node::indexed_variable(0)),
///                         Node::constant(2.0));
///
/// assert_eq!(to_prefix_notation(&tree, "|"), "+|sin|var0|2.000000");
/// assert_eq!(to_prefix_notation(&tree, " "), "+ sin var0 2.000000");
/// ```
#[must_use]
pub fn to_prefix_notation(node: &Node, separator: &str) -> String {
    let mut out = String::new();
    write_node(&mut out, node, separator, NumberFormat::default());
    out
}

/// Writes `node` in prefix notation according to `config`.
///
/// ## Example
/// ```
/// use polexpr::{
///     ast::{BinaryOperator, Node},
///     interpreter::serializer::prefix::{SerializeConfig, to_prefix_notation_with},
///     util::num::NumberFormat,
/// };
///
/// let tree = Node::binary(BinaryOperator::Divide, Node::constant(1.0), Node::constant(0.1));
/// let config = SerializeConfig::default().with_number_format(NumberFormat::Shortest);
///
/// assert_eq!(to_prefix_notation_with(&tree, &config), "/|1|0.1");
/// ```
#[must_use]
pub fn to_prefix_notation_with(node: &Node, config: &SerializeConfig) -> String {
    let mut out = String::new();
    write_node(&mut out, node, &config.separator, config.number_format);
    out
}

fn write_node(out: &mut String, node: &Node, separator: &str, format: NumberFormat) {
    out.push_str(&node.label_with(format));
    for child in node.children() {
        out.push_str(separator);
        write_node(out, child, separator, format);
    }
}

impl std::fmt::Display for Node {
    /// Formats the tree in prefix notation with the default separator and
    /// number format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_prefix_notation(self, DEFAULT_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, UnaryFunction};

    #[test]
    fn terminals_have_no_separator() {
        assert_eq!(to_prefix_notation(&Node::constant(-1.5), "|"), "-1.500000");
        assert_eq!(to_prefix_notation(&Node::variable("x").unwrap(), "|"), "x");
    }

    #[test]
    fn bound_variables_write_their_name() {
        let tree = Node::unary(UnaryFunction::Cos, Node::bound_variable("t", 3.0).unwrap());
        assert_eq!(tree.to_string(), "cos|t");
    }

    #[test]
    fn output_is_deterministic() {
        let tree = Node::binary(BinaryOperator::Multiply,
                                Node::binary(BinaryOperator::Plus,
                                             Node::indexed_variable(10),
                                             Node::constant(1.0)),
                                Node::unary(UnaryFunction::Sin, Node::indexed_variable(10)));
        let first = to_prefix_notation(&tree, "|");
        assert_eq!(first, "*|+|var10|1.000000|sin|var10");
        assert_eq!(first, to_prefix_notation(&tree, "|"));
    }

    #[test]
    fn multi_character_separator() {
        let tree = Node::binary(BinaryOperator::Minus, Node::constant(3.0), Node::constant(4.0));
        let config = SerializeConfig::default().with_separator(", ")
                                               .with_number_format(NumberFormat::Fixed(1));
        assert_eq!(to_prefix_notation_with(&tree, &config), "-, 3.0, 4.0");
    }
}
