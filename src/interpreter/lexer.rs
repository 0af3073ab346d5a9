use logos::Logos;

use crate::{
    ast::UnaryFunction,
    error::LexError,
    util::num::{column_at, non_finite},
};

/// Failures reported by the generated lexer, before they are placed in the
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RawError {
    /// No token pattern matched.
    #[default]
    Unrecognized,
    /// A second decimal point at `offset` bytes into the lexed slice.
    MalformedNumber { offset: usize },
}

/// Raw tokens recognized by the generated lexer.
///
/// Whitespace and the `|` separator are skipped here; a custom separator is
/// skipped by [`Lexer`] before the generated lexer sees the input.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n\f|]+")]
enum RawToken {
    /// Numeric literals such as `3`, `2.5` or `-0.25`. A `-` glued to a
    /// digit belongs to the literal.
    #[regex(r"-?[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// Identifiers such as `var0`, `x_1` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// Parses a numeric literal, rejecting a second decimal point.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Result<f64, RawError> {
    let slice = lex.slice();
    if let Some(offset) = slice.match_indices('.').nth(1).map(|(i, _)| i) {
        return Err(RawError::MalformedNumber { offset: lex.span().start + offset });
    }
    slice.parse().map_err(|_| RawError::Unrecognized)
}

/// Extends a `-` ending at byte `end` over an `inf` written directly after
/// it, returning the new end.
fn glued_infinity(raw: &mut logos::Lexer<RawToken>, end: usize) -> Option<usize> {
    let next = raw.next()?;
    let glued = matches!(next, Ok(RawToken::Identifier))
                && raw.span().start == end
                && raw.slice() == "inf";
    glued.then(|| raw.span().end)
}

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A numeric literal with its value, including `inf`, `-inf` and `NaN`.
    Constant(f64),
    /// An identifier.
    Variable,
    /// `+`
    Plus,
    /// `-` not followed by a digit.
    Minus,
    /// `/`
    Divide,
    /// `*`
    Multiply,
    /// An identifier naming a known function, see [`Token::disambiguate`].
    UnaryFunction(UnaryFunction),
    /// The end of the input. Returned again on every further request.
    EndOfInput,
}

/// A classified piece of prefix notation.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The source text of the token. Empty for [`TokenKind::EndOfInput`].
    pub lexeme: String,
    /// The category of the token.
    pub kind:   TokenKind,
    /// The 1-based character column where the token starts.
    pub column: usize,
}

impl Token {
    /// Reclassifies an identifier naming a known function as
    /// [`TokenKind::UnaryFunction`]. Every other token is returned unchanged.
    ///
    /// ## Example
    /// ```
    /// use polexpr::{
    ///     ast::UnaryFunction,
    ///     interpreter::lexer::{TokenKind, tokenize},
    /// };
    ///
    /// let tokens = tokenize("sin|sine").unwrap();
    /// assert_eq!(tokens[0].kind, TokenKind::Variable);
    /// assert_eq!(tokens[0].clone().disambiguate().kind,
    ///            TokenKind::UnaryFunction(UnaryFunction::Sin));
    /// assert_eq!(tokens[1].clone().disambiguate().kind, TokenKind::Variable);
    /// ```
    #[must_use]
    pub fn disambiguate(self) -> Self {
        match self.kind {
            TokenKind::Variable => match UnaryFunction::from_symbol(&self.lexeme) {
                Some(function) => Self { kind: TokenKind::UnaryFunction(function),
                                         ..self },
                None => self,
            },
            _ => self,
        }
    }

    /// Tests whether this token marks the end of the input.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}

/// Splits prefix notation into tokens, one per call to
/// [`Lexer::next_token`].
///
/// Whitespace and `|` are always skipped between tokens. An additional
/// separator can be supplied with [`Lexer::with_separator`].
pub struct Lexer<'a> {
    source:    &'a str,
    separator: Option<&'a str>,
    offset:    usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` using the default separator.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               separator: None,
               offset: 0 }
    }

    /// Creates a lexer over `source` that also skips `separator` between
    /// tokens. An empty separator is ignored.
    #[must_use]
    pub fn with_separator(source: &'a str, separator: &'a str) -> Self {
        let separator = (!separator.is_empty()).then_some(separator);
        Self { source,
               separator,
               offset: 0 }
    }

    /// Gets the source being tokenized.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Produces the next token.
    ///
    /// At the end of the input this returns an `EndOfInput` token, and keeps
    /// returning it on every further call.
    ///
    /// # Errors
    /// - `MalformedNumber` if a numeric literal has a second decimal point.
    /// - `UnexpectedCharacter` if a character cannot start any token.
    ///
    /// Errors do not advance the lexer.
    ///
    /// ## Example
    /// ```
    /// use polexpr::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("-2.5");
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Constant(-2.5));
    /// assert!(lexer.next_token().unwrap().is_end());
    /// assert!(lexer.next_token().unwrap().is_end());
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_separator();

        let rest = &self.source[self.offset..];
        let mut raw = RawToken::lexer(rest);

        let Some(result) = raw.next() else {
            self.offset = self.source.len();
            return Ok(Token { lexeme: String::new(),
                              kind:   TokenKind::EndOfInput,
                              column: column_at(self.source, self.source.len()), });
        };

        let mut span = raw.span();
        let start = self.offset + span.start;

        let kind = match result {
            Ok(RawToken::Number(value)) => TokenKind::Constant(value),
            Ok(RawToken::Identifier) => {
                non_finite(raw.slice()).map_or(TokenKind::Variable, TokenKind::Constant)
            },
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Minus) => match glued_infinity(&mut raw, span.end) {
                Some(end) => {
                    span.end = end;
                    TokenKind::Constant(f64::NEG_INFINITY)
                },
                None => TokenKind::Minus,
            },
            Ok(RawToken::Star) => TokenKind::Multiply,
            Ok(RawToken::Slash) => TokenKind::Divide,
            Err(RawError::MalformedNumber { offset }) => {
                let column = column_at(self.source, self.offset + offset);
                tracing::debug!(column, "malformed numeric literal");
                return Err(LexError::MalformedNumber { column });
            },
            Err(RawError::Unrecognized) => {
                let character = rest[span.start..].chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character,
                                                           column: column_at(self.source,
                                                                             start) });
            },
        };

        let token = Token { lexeme: rest[span.clone()].to_string(),
                            kind,
                            column: column_at(self.source, start) };
        self.offset += span.end;

        tracing::trace!(lexeme = %token.lexeme, column = token.column, "token");
        Ok(token)
    }

    /// Advances past any run of whitespace, `|` and the custom separator.
    fn skip_separator(&mut self) {
        loop {
            let rest = &self.source[self.offset..];
            let trimmed = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '|');
            let trimmed = match self.separator {
                Some(separator) => trimmed.strip_prefix(separator).unwrap_or(trimmed),
                None => trimmed,
            };
            if trimmed.len() == rest.len() {
                break;
            }
            self.offset += rest.len() - trimmed.len();
        }
    }
}

/// Tokenizes all of `source` using the default separator.
///
/// The returned tokens always end with exactly one `EndOfInput` token.
///
/// # Errors
/// Returns the first [`LexError`]; no tokens are returned in that case.
///
/// ## Example
/// ```
/// use polexpr::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("-|3|4").unwrap().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Minus,
///             TokenKind::Constant(3.0),
///             TokenKind::Constant(4.0),
///             TokenKind::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let end = token.is_end();
        tokens.push(token);
        if end {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn operators_and_operands() {
        assert_eq!(kinds("+|sin|var0|2.000000"),
                   [TokenKind::Plus,
                    TokenKind::Variable,
                    TokenKind::Variable,
                    TokenKind::Constant(2.0),
                    TokenKind::EndOfInput]);
        assert_eq!(kinds("* / x y"),
                   [TokenKind::Multiply,
                    TokenKind::Divide,
                    TokenKind::Variable,
                    TokenKind::Variable,
                    TokenKind::EndOfInput]);
    }

    #[test]
    fn minus_glued_to_digit_is_a_literal() {
        assert_eq!(kinds("-2.5"), [TokenKind::Constant(-2.5), TokenKind::EndOfInput]);
        assert_eq!(kinds("- 2.5"),
                   [TokenKind::Minus, TokenKind::Constant(2.5), TokenKind::EndOfInput]);
        assert_eq!(kinds("-x"),
                   [TokenKind::Minus, TokenKind::Variable, TokenKind::EndOfInput]);
    }

    #[test]
    fn non_finite_spellings_are_constants() {
        let tokens = tokenize("-inf|inf|NaN|info|- inf").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Constant(f64::NEG_INFINITY));
        assert_eq!(tokens[0].lexeme, "-inf");
        assert_eq!(tokens[1].kind, TokenKind::Constant(f64::INFINITY));
        assert!(matches!(tokens[2].kind, TokenKind::Constant(v) if v.is_nan()));
        assert_eq!(tokens[3].kind, TokenKind::Variable);
        assert_eq!(tokens[4].kind, TokenKind::Minus);
        assert_eq!(tokens[5].kind, TokenKind::Constant(f64::INFINITY));
        assert_eq!(tokens[5].column, 21);
    }

    #[test]
    fn columns_are_one_based() {
        let tokens = tokenize("+|var_1|10").unwrap();
        let columns: Vec<_> = tokens.iter().map(|t| t.column).collect();
        assert_eq!(columns, [1, 3, 9, 11]);
        assert_eq!(tokens[1].lexeme, "var_1");
    }

    #[test]
    fn second_decimal_point_is_reported_at_its_column() {
        assert_eq!(tokenize("12.3.4"), Err(LexError::MalformedNumber { column: 5 }));
        assert_eq!(tokenize("+|1|-0.5.5"), Err(LexError::MalformedNumber { column: 9 }));
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert_eq!(tokenize("+|1|#"),
                   Err(LexError::UnexpectedCharacter { character: '#',
                                                       column:    5, }));
        assert!(matches!(tokenize(".5"), Err(LexError::UnexpectedCharacter { column: 1, .. })));
    }

    #[test]
    fn end_of_input_repeats() {
        let mut lexer = Lexer::new("  | ");
        for _ in 0..3 {
            let token = lexer.next_token().unwrap();
            assert!(token.is_end());
            assert_eq!(token.column, 5);
        }
    }

    #[test]
    fn custom_separator_is_skipped() {
        let mut lexer = Lexer::with_separator("+, 1,,2", ",");
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.is_end() {
                break;
            }
            kinds.push(token.kind);
        }
        assert_eq!(kinds,
                   [TokenKind::Plus, TokenKind::Constant(1.0), TokenKind::Constant(2.0)]);
    }

    #[test]
    fn errors_do_not_advance() {
        let mut lexer = Lexer::new("1..2");
        assert_eq!(lexer.next_token(), Err(LexError::MalformedNumber { column: 3 }));
        assert_eq!(lexer.next_token(), Err(LexError::MalformedNumber { column: 3 }));
    }
}
