use crate::ast::Node;

/// Writes `node` as a Graphviz digraph.
///
/// Nodes are numbered in pre-order starting from 0, each declared with its
/// label and linked to its children in slot order.
///
/// ## Example
/// ```
/// use polexpr::{
///     ast::{Node, UnaryFunction},
///     interpreter::serializer::graphviz::to_graphviz,
/// };
///
/// let tree = Node::unary(UnaryFunction::Sin, Node::indexed_variable(0));
/// assert_eq!(to_graphviz(&tree),
///            "digraph G\n{\nNODE0 [ label = \"sin\" ]\nNODE0 -> NODE1\nNODE1 [ label = \"var0\" ]\n}\n");
/// ```
#[must_use]
pub fn to_graphviz(node: &Node) -> String {
    let mut out = String::from("digraph G\n{\n");
    let mut index = 0;
    write_node(&mut out, node, &mut index);
    out.push_str("}\n");
    out
}

fn write_node(out: &mut String, node: &Node, index: &mut usize) {
    let current = *index;
    out.push_str(&format!("NODE{current} [ label = \"{}\" ]\n", node.label()));
    for child in node.children() {
        *index += 1;
        out.push_str(&format!("NODE{current} -> NODE{index}\n"));
        write_node(out, child, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    #[test]
    fn numbering_is_pre_order() {
        let tree = Node::binary(BinaryOperator::Plus,
                                Node::binary(BinaryOperator::Minus,
                                             Node::constant(1.0),
                                             Node::constant(2.0)),
                                Node::variable("x").unwrap());
        let dot = to_graphviz(&tree);
        let edges: Vec<_> = dot.lines().filter(|l| l.contains("->")).collect();
        assert_eq!(edges,
                   ["NODE0 -> NODE1", "NODE1 -> NODE2", "NODE1 -> NODE3", "NODE0 -> NODE4"]);
        assert!(dot.contains("NODE4 [ label = \"x\" ]"));
    }
}
