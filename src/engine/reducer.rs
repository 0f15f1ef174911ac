use std::ops::Range;

use crate::{
    engine::{
        block::Block,
        operator::{Operator, Tier},
        token::Token,
    },
    error::RuntimeError,
    util::num::{format_number, parse_number},
};

/// Result type used by the reduction steps.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Collapses one block of `tokens` into a single number token.
///
/// When the block is wrapped in parentheses they are removed first. The
/// operators are then reduced one at a time: each pass looks for the leftmost
/// operator of the highest tier still present in the block, so `**` goes
/// before `* / %`, which go before `+ -`. Within a tier reduction is strictly
/// left to right, including for `**`: `2**3**2` is `(2**3)**2`.
///
/// Every reduction writes the result into the left operand and removes the
/// operator and the right operand, so `tokens` shrinks by two each time. Any
/// block computed before the call is stale afterwards.
///
/// Returns the value of the remaining token.
///
/// # Errors
/// [`RuntimeError::MalformedBlock`] if the block is empty or an operator in it
/// lacks an operand.
///
/// # Example
/// ```
/// use stepcalc::engine::{
///     bindings::Variables, block::extract_blocks, reducer::reduce_block, tokenizer::tokenize,
/// };
///
/// let mut tokens = tokenize("2+3*4**2", &Variables::new());
/// let block = extract_blocks(&tokens)[0].clone();
///
/// assert_eq!(reduce_block(&mut tokens, &block).unwrap(), "50");
/// assert_eq!(tokens.len(), 1);
/// ```
pub fn reduce_block(tokens: &mut Vec<Token>, block: &Block) -> EvalResult<String> {
    let malformed = || RuntimeError::MalformedBlock { start: block.start,
                                                      end:   block.end, };

    let Range { start, end } = block.span();
    let mut end = end.min(tokens.len());

    if end >= start + 2 && tokens[start].is_parenthesis() && tokens[end - 1].is_parenthesis() {
        tokens.remove(end - 1);
        tokens.remove(start);
        end -= 2;
    }

    if start >= end {
        return Err(malformed());
    }

    let mut pending = tokens[start..end].iter().filter(|t| t.is_operator()).count();

    while pending > 0 {
        let Some((index, operator)) = next_operator(&tokens[start..end]) else {
            break;
        };
        let index = start + index;

        if index == start || index + 1 >= end {
            return Err(malformed());
        }

        let left = parse_number(&tokens[index - 1].value);
        let right = parse_number(&tokens[index + 1].value);
        let result = operator.apply(left, right);
        log::trace!("{left} {operator} {right} = {result}");

        tokens[index - 1].value = format_number(result);
        tokens.drain(index..=index + 1);
        end -= 2;
        pending -= 1;
    }

    Ok(tokens[start].value.clone())
}

/// Finds the leftmost operator of the highest tier present in `tokens`.
fn next_operator(tokens: &[Token]) -> Option<(usize, Operator)> {
    Tier::ALL.iter().find_map(|tier| {
                        tokens.iter()
                              .enumerate()
                              .filter_map(|(index, token)| {
                                  token.as_operator().map(|operator| (index, operator))
                              })
                              .find(|(_, operator)| operator.tier() == *tier)
                    })
}
