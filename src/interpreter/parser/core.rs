use crate::{
    ast::{BinaryOperator, Node, Shell, Variable},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::config::ParserConfig,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses prefix notation into a tree using the default configuration.
///
/// # Errors
/// See [`parse_with`].
///
/// ## Example
/// ```
/// use polexpr::{
///     ast::{BinaryOperator, Node, UnaryFunction},
///     interpreter::parser::core::parse,
/// };
///
/// let tree = parse("+|sin|var0|2.000000").unwrap();
/// assert_eq!(tree,
///            Node::binary(BinaryOperator::Plus,
///                         Node::unary(UnaryFunction::Sin, Node::indexed_variable(0)),
///                         Node::constant(2.0)));
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    parse_with(source, &ParserConfig::default())
}

/// Parses prefix notation into a tree.
///
/// No brackets delimit subtrees. Each symbol is read into a [`Shell`] and
/// then exactly [`Shell::arity`] subtrees are read, depth-first and left to
/// right, and attached slot by slot. A lone constant or variable is a
/// complete tree.
///
/// The whole input must form a single tree.
///
/// # Errors
/// - `InvalidSeparator` if the configured separator clashes with tokens.
/// - `Lex` if tokenizing fails. No partial tree is returned.
/// - `UnexpectedEndOfInput` if the input ends before every operator has all
///   of its operands, including when the input is empty.
/// - `DepthExceeded` if the tree nests deeper than `config.max_depth`.
/// - `UnexpectedTrailingTokens` if tokens remain after the tree is complete.
#[tracing::instrument(level = "debug", skip(config), fields(separator = %config.separator))]
pub fn parse_with(source: &str, config: &ParserConfig) -> ParseResult<Node> {
    config.validate()?;

    let mut lexer = Lexer::with_separator(source, &config.separator);
    let root = parse_node(&mut lexer, 1, config.max_depth)?;

    let trailing = lexer.next_token()?;
    if !trailing.is_end() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  trailing.lexeme,
                                                          column: trailing.column, });
    }

    tracing::debug!(size = root.size(), depth = root.depth(), "parsed tree");
    Ok(root)
}

/// Reads one symbol and, recursively, all of its subtrees.
fn parse_node(lexer: &mut Lexer<'_>, depth: usize, max_depth: usize) -> ParseResult<Node> {
    let token = lexer.next_token()?.disambiguate();
    let column = token.column;
    let mut shell = shell_from_token(token)?;
    if depth > max_depth {
        return Err(ParseError::DepthExceeded { limit: max_depth,
                                               column });
    }

    for slot in 0..shell.arity() {
        let child = parse_node(lexer, depth + 1, max_depth)?;
        shell.set_child(slot, child)?;
    }

    let node = shell.finish()?;
    tracing::trace!(label = %node.label(), depth, "node complete");
    Ok(node)
}

/// Creates the shell for a symbol token.
///
/// Identifiers that name a function must already be disambiguated.
fn shell_from_token(token: Token) -> ParseResult<Shell> {
    let shell = match token.kind {
        TokenKind::Constant(value) => Shell::constant(value),
        TokenKind::Variable => Shell::variable(Variable::new(token.lexeme)?),
        TokenKind::UnaryFunction(function) => Shell::unary(function),
        TokenKind::Plus => Shell::binary(BinaryOperator::Plus),
        TokenKind::Minus => Shell::binary(BinaryOperator::Minus),
        TokenKind::Multiply => Shell::binary(BinaryOperator::Multiply),
        TokenKind::Divide => Shell::binary(BinaryOperator::Divide),
        TokenKind::EndOfInput => {
            return Err(ParseError::UnexpectedEndOfInput { column: token.column });
        },
    };
    Ok(shell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::UnaryFunction, error::LexError};

    #[test]
    fn single_terminal_is_a_whole_tree() {
        assert_eq!(parse("4.5").unwrap(), Node::constant(4.5));
        assert_eq!(parse("var7").unwrap(), Node::indexed_variable(7));
    }

    #[test]
    fn arity_decides_the_shape() {
        let tree = parse("*|+|var10|1|+|+|11|var1|sin|var10").unwrap();
        let expected =
            Node::binary(BinaryOperator::Multiply,
                         Node::binary(BinaryOperator::Plus,
                                      Node::indexed_variable(10),
                                      Node::constant(1.0)),
                         Node::binary(BinaryOperator::Plus,
                                      Node::binary(BinaryOperator::Plus,
                                                   Node::constant(11.0),
                                                   Node::indexed_variable(1)),
                                      Node::unary(UnaryFunction::Sin,
                                                  Node::indexed_variable(10))));
        assert_eq!(tree, expected);
    }

    #[test]
    fn running_out_of_operands_fails() {
        assert_eq!(parse("+|1"), Err(ParseError::UnexpectedEndOfInput { column: 4 }));
        assert_eq!(parse("cos"), Err(ParseError::UnexpectedEndOfInput { column: 4 }));
        assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput { column: 1 }));
    }

    #[test]
    fn trailing_tokens_fail() {
        assert_eq!(parse("1|2"),
                   Err(ParseError::UnexpectedTrailingTokens { token:  "2".to_string(),
                                                              column: 3, }));
    }

    #[test]
    fn lexer_errors_abort_parsing() {
        assert_eq!(parse("+|1.2.3|4"),
                   Err(ParseError::Lex(LexError::MalformedNumber { column: 6 })));
    }

    #[test]
    fn depth_is_capped() {
        let config = ParserConfig::default().with_max_depth(3);
        assert!(parse_with("sin|sin|1", &config).is_ok());
        assert_eq!(parse_with("sin|sin|sin|1", &config),
                   Err(ParseError::DepthExceeded { limit: 3, column: 13 }));

        let deep = format!("{}1", "sin|".repeat(10_000));
        assert!(matches!(parse(&deep), Err(ParseError::DepthExceeded { limit: 256, .. })));
    }

    #[test]
    fn custom_separator() {
        let config = ParserConfig::default().with_separator(", ");
        let tree = parse_with("-, 3, 4", &config).unwrap();
        assert_eq!(tree,
                   Node::binary(BinaryOperator::Minus, Node::constant(3.0), Node::constant(4.0)));

        let bad = ParserConfig::default().with_separator("");
        assert_eq!(parse_with("1", &bad),
                   Err(ParseError::InvalidSeparator { separator: String::new() }));
    }
}
