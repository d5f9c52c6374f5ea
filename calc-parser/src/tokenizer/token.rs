use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+", lex_exponent)]
    Number,

    #[token("sin")]
    #[token("cos")]
    #[token("tan")]
    #[token("log")]
    #[token("ln")]
    #[token("sqrt")]
    #[token("abs")]
    Function,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("^")]
    Caret,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    /// The end of the input. Never produced by the raw tokenizer; [`Lexer`](super::Lexer) emits
    /// it once the input is exhausted.
    End,

    #[regex(r".", priority = 0)]
    Invalid,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if a token of this kind can begin a power, i.e. it can follow another power
    /// to form an implicit multiplication such as `2x` or `x(y + 1)`.
    pub fn starts_power(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Variable | TokenKind::Function | TokenKind::LParen
        )
    }
}

/// Extends a number token with its exponent suffix (`e` or `E`, an optional sign, then at least
/// one digit). Input such as `2e` or `2e+` has no exponent, and the `e` is left for the next
/// token.
fn lex_exponent(lex: &mut logos::Lexer<TokenKind>) {
    let rest = lex.remainder().as_bytes();
    if !matches!(rest.first(), Some(b'e' | b'E')) {
        return;
    }

    let sign_len = usize::from(matches!(rest.get(1), Some(b'+' | b'-')));
    let digits = rest[1 + sign_len..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits > 0 {
        lex.bump(1 + sign_len + digits);
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    /// Returns true if the token marks the end of the input.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}
