pub mod token;

use logos::Logos;
pub use token::{Token, TokenKind};

/// Returns the raw tokenizer over the token kinds of the input, including whitespace.
pub fn tokenize(input: &str) -> logos::Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the non-whitespace tokens of the input, excluding the
/// [`TokenKind::End`] marker. This allows us to backtrack in case of an error.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        if token.is_end() {
            break;
        }
        tokens.push(token);
    }

    tokens.into_boxed_slice()
}

/// A restartable stream of tokens over some input.
///
/// Whitespace is skipped silently. Characters that do not start any token are produced as
/// [`TokenKind::Invalid`] tokens instead of errors; it is up to the parser to reject them. Once
/// the input is exhausted, every call to [`Lexer::next_token`] returns a [`TokenKind::End`] token
/// located at the end of the input.
#[derive(Clone)]
pub struct Lexer<'source> {
    /// The input being tokenized.
    source: &'source str,

    /// The underlying tokenizer.
    inner: logos::Lexer<'source, TokenKind>,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            inner: tokenize(source),
        }
    }

    /// Returns the next token of the input.
    pub fn next_token(&mut self) -> Token<'source> {
        loop {
            match self.inner.next() {
                Some(Ok(TokenKind::Whitespace)) => continue,
                Some(kind) => {
                    return Token {
                        span: self.inner.span(),
                        kind: kind.unwrap_or(TokenKind::Invalid),
                        lexeme: self.inner.slice(),
                    };
                },
                None => {
                    let end = self.source.len();
                    return Token {
                        span: end..end,
                        kind: TokenKind::End,
                        lexeme: "",
                    };
                },
            }
        }
    }

    /// Rewinds the lexer to the start of the input.
    pub fn reset(&mut self) {
        self.inner = tokenize(self.source);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the lexer to the raw expected tokens. The lexer must
    /// produce the [`TokenKind::End`] token afterwards.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = Lexer::new(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            let token = lexer.next_token();
            assert_eq!((token.kind, token.lexeme), (expected_kind, expected_lexeme));
        }

        assert_eq!(lexer.next_token().kind, TokenKind::End);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Plus, "+"),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn every_operator() {
        compare_tokens(
            "(a+b-c*d/e^f),g",
            [
                (TokenKind::LParen, "("),
                (TokenKind::Variable, "a"),
                (TokenKind::Plus, "+"),
                (TokenKind::Variable, "b"),
                (TokenKind::Minus, "-"),
                (TokenKind::Variable, "c"),
                (TokenKind::Star, "*"),
                (TokenKind::Variable, "d"),
                (TokenKind::Slash, "/"),
                (TokenKind::Variable, "e"),
                (TokenKind::Caret, "^"),
                (TokenKind::Variable, "f"),
                (TokenKind::RParen, ")"),
                (TokenKind::Comma, ","),
                (TokenKind::Variable, "g"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_tokens(
            "3.14 .5 2. 1e10 6.02E+23 1.5e-3",
            [
                (TokenKind::Number, "3.14"),
                (TokenKind::Number, ".5"),
                (TokenKind::Number, "2."),
                (TokenKind::Number, "1e10"),
                (TokenKind::Number, "6.02E+23"),
                (TokenKind::Number, "1.5e-3"),
            ],
        );
    }

    #[test]
    fn exponent_without_digits() {
        compare_tokens(
            "2e",
            [
                (TokenKind::Number, "2"),
                (TokenKind::Variable, "e"),
            ],
        );
    }

    #[test]
    fn functions_and_variables() {
        compare_tokens(
            "sin cos tan log ln sqrt abs sinx x_1 _tmp",
            [
                (TokenKind::Function, "sin"),
                (TokenKind::Function, "cos"),
                (TokenKind::Function, "tan"),
                (TokenKind::Function, "log"),
                (TokenKind::Function, "ln"),
                (TokenKind::Function, "sqrt"),
                (TokenKind::Function, "abs"),
                (TokenKind::Variable, "sinx"),
                (TokenKind::Variable, "x_1"),
                (TokenKind::Variable, "_tmp"),
            ],
        );
    }

    #[test]
    fn implicit_multiplication_tokens() {
        compare_tokens(
            "2x sin(x)",
            [
                (TokenKind::Number, "2"),
                (TokenKind::Variable, "x"),
                (TokenKind::Function, "sin"),
                (TokenKind::LParen, "("),
                (TokenKind::Variable, "x"),
                (TokenKind::RParen, ")"),
            ],
        );
    }

    #[test]
    fn invalid_characters() {
        compare_tokens(
            "1 $ 2 . #",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Invalid, "$"),
                (TokenKind::Number, "2"),
                (TokenKind::Invalid, "."),
                (TokenKind::Invalid, "#"),
            ],
        );
    }

    #[test]
    fn end_token_repeats() {
        let mut lexer = Lexer::new("x  ");
        assert_eq!(lexer.next_token().kind, TokenKind::Variable);

        let end = lexer.next_token();
        assert_eq!(end.kind, TokenKind::End);
        assert_eq!(end.span, 3..3);
        assert_eq!(lexer.next_token().kind, TokenKind::End);
    }

    #[test]
    fn reset_rewinds() {
        let mut lexer = Lexer::new("a + b");
        lexer.next_token();
        lexer.next_token();
        lexer.reset();

        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Variable);
        assert_eq!(token.lexeme, "a");
        assert_eq!(token.span, 0..1);
    }

    #[test]
    fn complete_excludes_whitespace_and_end() {
        let tokens = tokenize_complete("  x * 2 ");
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![TokenKind::Variable, TokenKind::Star, TokenKind::Number]);
        assert_eq!(tokens[2].span, 6..7);
    }
}
