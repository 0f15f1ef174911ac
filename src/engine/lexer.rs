use logos::Logos;

/// Represents a raw lexical unit of an expression.
///
/// Lexemes are the scanner's view of the text: the seven symbol characters,
/// runs of whitespace and runs of everything else. The tokenizer assembles them into [`Token`]s, which
/// is where context such as unary minus and `**` is resolved.
///
/// [`Token`]: crate::engine::token::Token
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
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
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any run of characters that is neither a symbol nor whitespace, such as
    /// `20`, `5.5`, `a` or `asdf3`.
    #[regex(r"[^+\-*/%() \t\r\n\f]+")]
    Text,
    /// Spaces, tabs, newlines and feeds. Separates literals but emits nothing.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
}

impl Lexeme {
    /// Returns `true` for operator and parenthesis characters.
    #[must_use]
    pub const fn is_symbol(self) -> bool {
        !matches!(self, Self::Text | Self::Whitespace)
    }
}

/// Recognises a complete decimal literal: an optional leading `-`, digits, and
/// an optional `.` followed by optional digits.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum NumberLiteral {
    #[regex(r"-?[0-9]+(\.[0-9]*)?")]
    Number,
}

/// Checks whether `text` is exactly one decimal literal.
///
/// # Example
/// ```
/// use stepcalc::engine::lexer::is_number_literal;
///
/// assert!(is_number_literal("-200.55"));
/// assert!(is_number_literal("5."));
/// assert!(!is_number_literal(".5"));
/// assert!(!is_number_literal("asdf3"));
/// assert!(!is_number_literal("1.2.3"));
/// ```
#[must_use]
pub fn is_number_literal(text: &str) -> bool {
    let mut lexer = NumberLiteral::lexer(text);

    matches!(lexer.next(), Some(Ok(NumberLiteral::Number))) && lexer.span().end == text.len()
}
