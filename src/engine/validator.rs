use crate::{
    engine::{lexer::is_number_literal, token::Token},
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Checks the structure of a token sequence.
///
/// Checks run in a fixed order and the first violation is returned:
///
/// 1. the sequence is not empty;
/// 2. every number token is a decimal literal;
/// 3. the first token is not an operator;
/// 4. the last token is not an operator;
/// 5. no two operators are adjacent;
/// 6. the number of parentheses is even;
/// 7. every `)` closes an open `(`;
/// 8. operators and operands alternate around parentheses, and no `()` is
///    empty.
///
/// A sequence that passes can always be reduced to a single number.
///
/// # Errors
/// Returns the [`ParseError`] describing the first violation.
///
/// # Example
/// ```
/// use stepcalc::{
///     engine::{bindings::Variables, tokenizer::tokenize, validator::validate},
///     error::ParseError,
/// };
///
/// let vars = Variables::new();
/// assert!(validate(&tokenize("2+2*10", &vars)).is_ok());
/// assert_eq!(validate(&tokenize("20+20-", &vars)), Err(ParseError::MisplacedOperatorLast));
/// ```
pub fn validate(tokens: &[Token]) -> ParseResult<()> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(ParseError::EmptyExpression);
    };

    if let Some(token) = tokens.iter().find(|t| t.is_number() && !is_number_literal(&t.value)) {
        return Err(ParseError::NotANumber { value: token.value.clone() });
    }

    if first.is_operator() {
        return Err(ParseError::MisplacedOperatorFirst);
    }
    if last.is_operator() {
        return Err(ParseError::MisplacedOperatorLast);
    }
    if tokens.windows(2).any(|pair| pair[0].is_operator() && pair[1].is_operator()) {
        return Err(ParseError::MisplacedOperator);
    }

    if tokens.iter().filter(|t| t.is_parenthesis()).count() % 2 != 0 {
        return Err(ParseError::OddParenthesis);
    }
    check_balance(tokens)?;

    tokens.windows(2).try_for_each(|pair| check_neighbours(&pair[0], &pair[1]))
}

fn check_balance(tokens: &[Token]) -> ParseResult<()> {
    let mut depth = 0usize;

    for token in tokens {
        if token.is_open() {
            depth += 1;
        } else if token.is_close() {
            depth = depth.checked_sub(1).ok_or(ParseError::UnbalancedParenthesis)?;
        }
    }

    if depth == 0 { Ok(()) } else { Err(ParseError::UnbalancedParenthesis) }
}

/// Operands are numbers and parenthesised groups: a group starts like an
/// operand with `(` and ends like one with `)`.
fn check_neighbours(left: &Token, right: &Token) -> ParseResult<()> {
    let left_ends_operand = left.is_number() || left.is_close();
    let right_starts_operand = right.is_number() || right.is_open();

    if left.is_open() && right.is_close() {
        Err(ParseError::EmptyParenthesis)
    } else if (left.is_open() && right.is_operator()) || (left.is_operator() && right.is_close()) {
        Err(ParseError::MisplacedOperator)
    } else if left_ends_operand && right_starts_operand {
        Err(ParseError::MissingOperator { left:  left.value.clone(),
                                          right: right.value.clone(), })
    } else {
        Ok(())
    }
}
