use polexpr::{
    Context,
    ast::{BinaryOperator, Node, UnaryFunction},
    interpreter::{
        parser::config::ParserConfig,
        serializer::prefix::{SerializeConfig, to_prefix_notation_with},
    },
    parse, parse_with, to_prefix_notation,
    util::num::NumberFormat,
};
use proptest::prelude::*;

fn unary_function() -> impl Strategy<Value = UnaryFunction> {
    prop::sample::select(UnaryFunction::SYMBOLS.iter().map(|(_, f)| *f).collect::<Vec<_>>())
}

fn binary_operator() -> impl Strategy<Value = BinaryOperator> {
    prop::sample::select(BinaryOperator::SYMBOLS.iter().map(|(_, op)| *op).collect::<Vec<_>>())
}

fn finite_constant() -> impl Strategy<Value = Node> {
    any::<f64>().prop_filter("finite", |v| v.is_finite()).prop_map(Node::constant)
}

fn tree_with(leaf: impl Strategy<Value = Node> + 'static) -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![leaf, (0usize..4).prop_map(Node::indexed_variable)];
    leaf.prop_recursive(8, 64, 2, |inner| {
            prop_oneof![(unary_function(), inner.clone()).prop_map(|(f, c)| Node::unary(f, c)),
                        (binary_operator(), inner.clone(), inner).prop_map(|(op, l, r)| {
                                                                      Node::binary(op, l, r)
                                                                  }),]
        })
}

fn context() -> Context {
    Context::from_values([0.5, -1.25, 3.0, 10.0])
}

fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn default_format_round_trips(tree in tree_with(finite_constant())) {
        let reparsed = parse(&to_prefix_notation(&tree, "|")).unwrap();

        prop_assert!(reparsed.same_shape(&tree));
        prop_assert_eq!(&reparsed, &tree);

        let expected = tree.evaluate(&context()).unwrap();
        let actual = reparsed.evaluate(&context()).unwrap();
        prop_assert!(same_value(actual, expected));
    }

    #[test]
    fn shortest_format_round_trips_any_constant(tree in tree_with((-1e9f64..1e9).prop_map(Node::constant)),
                                                separator in prop::sample::select(vec!["|", " ", ", ", ";"])) {
        let config = SerializeConfig::default().with_separator(separator)
                                               .with_number_format(NumberFormat::Shortest);
        let text = to_prefix_notation_with(&tree, &config);
        let reparsed = parse_with(&text, &ParserConfig::default().with_separator(separator)).unwrap();

        prop_assert_eq!(reparsed, tree);
    }

    #[test]
    fn any_constant_round_trips_in_the_default_format(value in any::<f64>()) {
        let tree = Node::unary(UnaryFunction::Sin, Node::constant(value));
        prop_assert_eq!(parse(&to_prefix_notation(&tree, "|")).unwrap(), tree);
    }

    #[test]
    fn parsed_trees_keep_the_arity_invariant(tree in tree_with(finite_constant())) {
        fn check(node: &Node) -> bool {
            node.children().count() == node.arity() && node.children().all(check)
        }

        let reparsed = parse(&tree.to_string()).unwrap();
        prop_assert!(check(&reparsed));
        prop_assert_eq!(reparsed.size(), tree.size());
        prop_assert_eq!(reparsed.depth(), tree.depth());
    }

    #[test]
    fn arbitrary_input_never_panics(source in "[-+*/|. a-z0-9_]{0,40}") {
        if let Ok(tree) = parse(&source) {
            let exact = SerializeConfig::default().with_number_format(NumberFormat::Shortest);
            let reparsed = parse(&to_prefix_notation_with(&tree, &exact)).unwrap();
            prop_assert_eq!(reparsed, tree);
        }
    }
}
