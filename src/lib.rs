//! # stepcalc
//!
//! stepcalc evaluates arithmetic expressions without handing them to a host
//! evaluator. An expression is tokenized, validated, split into blocks by
//! parenthesis depth, and then reduced one block at a time, deepest block
//! first, until a single number is left. Every intermediate step can be
//! observed.
//!
//! Supported are `+ - * / % **`, parentheses, negative literals and
//! single-letter variables bound through a JSON suffix such as
//! `20*a+(50/44),{"a":6}`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::engine::expression::Expression;

/// Tokenizing, validation and stepwise reduction of expressions.
///
/// This module holds the complete expression engine. Text flows through the
/// lexer and tokenizer into a token sequence, is checked by the validator, and
/// is then reduced block by block inside an
/// [`Expression`](engine::expression::Expression).
///
/// # Responsibilities
/// - Converts expression text and variable bindings into tokens.
/// - Rejects malformed token sequences with a descriptive error.
/// - Extracts blocks and reduces them in precedence order.
/// - Exposes stepwise and full evaluation.
pub mod engine;
/// Provides the error types for parsing and evaluation.
///
/// Parse errors describe why an input was rejected; runtime errors describe
/// why a parsed expression could not be reduced.
pub mod error;
/// Conversions between numbers and token text.
pub mod util;

/// Parses `source` and reduces it to a single value.
///
/// `source` may carry variable bindings after its first comma.
///
/// # Errors
/// Returns an error if parsing fails or a reduction step cannot be carried
/// out.
///
/// # Examples
/// ```
/// use stepcalc::evaluate;
///
/// assert_eq!(evaluate("2+2*10").unwrap(), 22.0);
/// assert_eq!(evaluate(r#"20*a-b,{"a":6,"b":20}"#).unwrap(), 100.0);
///
/// // Unbound variable.
/// assert!(evaluate("x+1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let mut expression = Expression::parse(source)?;

    Ok(expression.evaluate_all()?.value)
}
