use logos::Logos;

use crate::{
    engine::{bindings::Variables, lexer::Lexeme, operator::Operator, token::Token},
    util::num::format_number,
};

/// Converts an expression into its token sequence.
///
/// Every run of text between two symbol or whitespace characters becomes one
/// number token; whether it really is a number is decided later by the
/// validator. Single letters with a binding in `variables` are replaced by the
/// bound value. Whitespace ends a literal and emits nothing.
///
/// A `-` becomes part of the following literal instead of an operator when it
/// opens the expression, or when it follows an operator or `(` and is directly
/// followed by a digit. After `)` it always subtracts.
///
/// Two directly adjacent `*` form the power operator `**`.
///
/// # Example
/// ```
/// use stepcalc::engine::{bindings::Variables, tokenizer::tokenize};
///
/// let values: Vec<String> = tokenize("2*(-8)-a", &[('a', 6.0)].into_iter().collect())
///     .into_iter()
///     .map(|t| t.value)
///     .collect();
/// assert_eq!(values, ["2", "*", "(", "-8", ")", "-", "6"]);
///
/// let values: Vec<String> = tokenize("2**3", &Variables::new()).into_iter()
///                                                              .map(|t| t.value)
///                                                              .collect();
/// assert_eq!(values, ["2", "**", "3"]);
/// ```
#[must_use]
pub fn tokenize(expression: &str, variables: &Variables) -> Vec<Token> {
    let lexemes: Vec<(Lexeme, &str)> =
        Lexeme::lexer(expression).spanned()
                                 .map(|(lexeme, span)| {
                                     (lexeme.unwrap_or(Lexeme::Text), &expression[span])
                                 })
                                 .collect();

    let mut tokens = Vec::new();
    let mut pending = String::new();

    for (index, (lexeme, text)) in lexemes.iter().enumerate() {
        match lexeme {
            Lexeme::Text => pending.push_str(text),
            Lexeme::Whitespace => flush(&mut pending, &mut tokens, variables),
            Lexeme::Minus if is_sign(&lexemes, index) => pending.push('-'),
            symbol => {
                flush(&mut pending, &mut tokens, variables);
                let joined = index.checked_sub(1).is_some_and(|i| lexemes[i].0 == *symbol);
                push_symbol(&mut tokens, *symbol, joined);
            },
        }
    }
    flush(&mut pending, &mut tokens, variables);

    tokens
}

/// Decides whether the `-` at `index` is the sign of a literal. Whitespace
/// before the `-` is looked through, whitespace after it is not.
fn is_sign(lexemes: &[(Lexeme, &str)], index: usize) -> bool {
    let Some(previous) = lexemes[..index].iter()
                                         .rev()
                                         .map(|(lexeme, _)| *lexeme)
                                         .find(|lexeme| *lexeme != Lexeme::Whitespace)
    else {
        return true;
    };

    let starts_number = lexemes.get(index + 1).is_some_and(|(lexeme, text)| {
                                                  *lexeme == Lexeme::Text
                                                  && text.starts_with(|c: char| c.is_ascii_digit())
                                              });

    previous.is_symbol() && previous != Lexeme::RParen && starts_number
}

/// Emits the collected literal text as a number token, substituting a bound
/// variable if there is one.
fn flush(pending: &mut String, tokens: &mut Vec<Token>, variables: &Variables) {
    if pending.is_empty() {
        return;
    }

    let text = std::mem::take(pending);
    let value = match variables.resolve(&text) {
        Some(value) => {
            log::trace!("substituting {text} = {value}");
            format_number(value)
        },
        None => text,
    };

    tokens.push(Token::number(value));
}

/// Emits the token for `symbol`. `joined` tells whether the previous lexeme
/// was the same symbol with nothing in between.
fn push_symbol(tokens: &mut Vec<Token>, symbol: Lexeme, joined: bool) {
    let token = match symbol {
        Lexeme::Plus => Token::operator(Operator::Add),
        Lexeme::Minus => Token::operator(Operator::Subtract),
        Lexeme::Star => {
            if joined && tokens.last().and_then(Token::as_operator) == Some(Operator::Multiply) {
                tokens.pop();
                Token::operator(Operator::Power)
            } else {
                Token::operator(Operator::Multiply)
            }
        },
        Lexeme::Slash => Token::operator(Operator::Divide),
        Lexeme::Percent => Token::operator(Operator::Remainder),
        Lexeme::LParen => Token::open(),
        Lexeme::RParen => Token::close(),
        Lexeme::Text | Lexeme::Whitespace => return,
    };

    tokens.push(token);
}
