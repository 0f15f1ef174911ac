use serde::Serialize;

use crate::engine::operator::Operator;

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A numeric literal, a substituted variable, or a reduction result.
    Number,
    /// One of `** * / % + -`.
    Operator,
    /// `(` or `)`.
    Parenthesis,
    /// Carries the message of a failed parse.
    Error,
}

/// A classified lexical unit of an expression.
///
/// The value is kept as text. Number tokens are rewritten in place while a
/// block is reduced: the left operand receives the result and the operator and
/// right operand are removed from the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// What the token represents.
    pub kind:  TokenKind,
    /// The token text.
    pub value: String,
}

impl Token {
    #[must_use]
    pub fn number(value: impl Into<String>) -> Self {
        Self { kind:  TokenKind::Number,
               value: value.into(), }
    }

    #[must_use]
    pub fn operator(operator: Operator) -> Self {
        Self { kind:  TokenKind::Operator,
               value: operator.symbol().to_string(), }
    }

    #[must_use]
    pub fn open() -> Self {
        Self { kind:  TokenKind::Parenthesis,
               value: "(".to_string(), }
    }

    #[must_use]
    pub fn close() -> Self {
        Self { kind:  TokenKind::Parenthesis,
               value: ")".to_string(), }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind:  TokenKind::Error,
               value: message.into(), }
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    #[must_use]
    pub fn is_parenthesis(&self) -> bool {
        self.kind == TokenKind::Parenthesis
    }

    /// Returns `true` for a `(` token.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_parenthesis() && self.value == "("
    }

    /// Returns `true` for a `)` token.
    #[must_use]
    pub fn is_close(&self) -> bool {
        self.is_parenthesis() && self.value == ")"
    }

    /// The operator this token stands for, if it is an operator token.
    #[must_use]
    pub fn as_operator(&self) -> Option<Operator> {
        if self.is_operator() {
            Operator::from_symbol(&self.value)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Joins token values with single spaces, e.g. `20 + ( 10 * 10 )`.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
