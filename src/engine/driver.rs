use serde::Serialize;

use crate::{
    engine::{
        block::Block,
        expression::{Evaluation, Expression},
        reducer::EvalResult,
        token::Token,
    },
    error::{ParseError, RuntimeError},
};

/// Message reported by a successful parse.
pub const PARSE_COMPLETE: &str = "Parsing complete.";

/// Outcome of [`Engine::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub success: bool,
    pub message: String,
}

/// Lifecycle of an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineState {
    /// Nothing parsed yet, or the last parse failed.
    Empty,
    /// Parsed and not reduced yet.
    Parsed,
    /// At least one step taken, more than one token left.
    Reducing,
    /// A single token remains.
    Complete,
}

/// Stateful driver around an [`Expression`].
///
/// The engine keeps the most recent expression and answers with plain result
/// records instead of `Result`s on parse, which suits front ends that render
/// whatever happened. A failed parse leaves the engine empty; its token
/// snapshot then holds one error token with the message.
///
/// # Example
/// ```
/// use stepcalc::engine::driver::{Engine, EngineState};
///
/// let mut engine = Engine::new();
///
/// let outcome = engine.parse("20*10-50");
/// assert!(outcome.success);
/// assert_eq!(outcome.message, "Parsing complete.");
///
/// let result = engine.evaluate_all().unwrap();
/// assert_eq!(result.value, 150.0);
/// assert_eq!(engine.state(), EngineState::Complete);
///
/// let outcome = engine.parse("*20+20");
/// assert!(!outcome.success);
/// assert_eq!(outcome.message, "Misplaced operator at first index.");
/// assert_eq!(engine.state(), EngineState::Empty);
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    source:     String,
    expression: Option<Expression>,
    error:      Option<ParseError>,
    failure:    Vec<Token>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `input`, replacing whatever the engine held before.
    pub fn parse(&mut self, input: &str) -> ParseOutcome {
        *self = Self { source: input.to_string(),
                       ..Self::default() };

        match Expression::parse(input) {
            Ok(expression) => {
                self.expression = Some(expression);
                ParseOutcome { success: true,
                               message: PARSE_COMPLETE.to_string(), }
            },
            Err(error) => {
                log::debug!("rejected {input:?}: {error}");
                let message = error.to_string();
                self.failure = vec![Token::error(message.clone())];
                self.error = Some(error);
                ParseOutcome { success: false,
                               message }
            },
        }
    }

    /// Takes one reduction step.
    ///
    /// # Errors
    /// [`RuntimeError::NotParsed`] when the engine is empty, otherwise any
    /// error raised by [`Expression::evaluate_next`].
    pub fn evaluate_next(&mut self) -> EvalResult<Evaluation> {
        self.expression.as_mut().ok_or(RuntimeError::NotParsed)?.evaluate_next()
    }

    /// Reduces until a single token remains.
    ///
    /// # Errors
    /// [`RuntimeError::NotParsed`] when the engine is empty, otherwise any
    /// error raised by [`Expression::evaluate_all`].
    pub fn evaluate_all(&mut self) -> EvalResult<Evaluation> {
        self.expression.as_mut().ok_or(RuntimeError::NotParsed)?.evaluate_all()
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        match &self.expression {
            None => EngineState::Empty,
            Some(expression) if expression.step_count() == 0 => EngineState::Parsed,
            Some(expression) if expression.is_complete() => EngineState::Complete,
            Some(_) => EngineState::Reducing,
        }
    }

    /// The input of the last parse, successful or not.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        self.expression.as_ref().map_or(self.failure.as_slice(), Expression::tokens)
    }

    /// The tokens of the last successful parse, untouched by reduction.
    #[must_use]
    pub fn source_tokens(&self) -> &[Token] {
        self.expression.as_ref().map(Expression::source_tokens).unwrap_or_default()
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.expression.as_ref().map(Expression::blocks).unwrap_or_default()
    }

    /// Why the last parse failed, if it did.
    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Hands the parsed expression over to the caller.
    #[must_use]
    pub fn into_expression(self) -> Option<Expression> {
        self.expression
    }
}
