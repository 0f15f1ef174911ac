use serde::Serialize;

use crate::{
    engine::{
        bindings::{Variables, split_bindings},
        block::{Block, extract_blocks, select_block},
        reducer::{EvalResult, reduce_block},
        token::{self, Token},
        tokenizer::tokenize,
        validator::{ParseResult, validate},
    },
    error::RuntimeError,
    util::num::parse_number,
};

/// Snapshot taken after one reduction step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// `true` once a single token remains.
    pub complete: bool,
    /// Value of the block reduced by this step.
    pub value:    f64,
    /// The token sequence after the step.
    pub tokens:   Vec<Token>,
    /// The blocks of that sequence.
    pub blocks:   Vec<Block>,
}

impl Evaluation {
    /// The token sequence joined by spaces.
    #[must_use]
    pub fn render(&self) -> String {
        token::render(&self.tokens)
    }
}

/// A parsed expression and its reduction state.
///
/// The expression owns its token sequence and the blocks extracted from it.
/// Each call to [`evaluate_next`](Self::evaluate_next) rewrites the sequence
/// in place and recomputes the blocks, so independent expressions never share
/// state and can be evaluated on different threads.
///
/// # Example
/// ```
/// use stepcalc::engine::expression::Expression;
///
/// let mut expression = Expression::parse("20+(10*(5+5))").unwrap();
///
/// let values: Vec<f64> = expression.steps().map(|step| step.unwrap().value).collect();
/// assert_eq!(values, [10.0, 100.0, 120.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    parsed: Vec<Token>,
    tokens: Vec<Token>,
    blocks: Vec<Block>,
    value:  f64,
    steps:  usize,
}

impl Expression {
    /// Parses `expression[,bindings]`.
    ///
    /// Everything after the first comma is decoded as a JSON object mapping
    /// single letters to numbers.
    ///
    /// # Errors
    /// Returns a [`ParseError`](crate::error::ParseError) when the bindings
    /// cannot be decoded or the token sequence is invalid.
    pub fn parse(input: &str) -> ParseResult<Self> {
        let (expression, bindings) = split_bindings(input);
        let variables = match bindings {
            Some(json) => Variables::from_json(json)?,
            None => Variables::new(),
        };

        let mut parsed = Self::parse_with(expression, &variables)?;
        parsed.source = input.to_string();

        Ok(parsed)
    }

    /// Parses `expression` with variables supplied directly. No comma
    /// splitting takes place.
    ///
    /// # Errors
    /// Returns a [`ParseError`](crate::error::ParseError) when the token
    /// sequence is invalid.
    ///
    /// # Example
    /// ```
    /// use stepcalc::engine::{bindings::Variables, expression::Expression};
    ///
    /// let mut vars = Variables::new();
    /// vars.insert('r', 2.0);
    ///
    /// let mut circle = Expression::parse_with("3.14*r**2", &vars).unwrap();
    /// assert_eq!(circle.evaluate_all().unwrap().value, 12.56);
    /// ```
    pub fn parse_with(expression: &str, variables: &Variables) -> ParseResult<Self> {
        let tokens = tokenize(expression, variables);
        validate(&tokens)?;

        let blocks = extract_blocks(&tokens);
        log::debug!("parsed {expression:?} into {} tokens and {} blocks",
                    tokens.len(),
                    blocks.len());

        let value = match tokens.as_slice() {
            [single] => parse_number(&single.value),
            _ => 0.0,
        };

        Ok(Self { source: expression.to_string(),
                  parsed: tokens.clone(),
                  tokens,
                  blocks,
                  value,
                  steps: 0 })
    }

    /// Reduces the deepest block, the last one in scan order among equals.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] if the selected block cannot be reduced or
    /// the step leaves a multi-token sequence unchanged.
    pub fn evaluate_next(&mut self) -> EvalResult<Evaluation> {
        self.blocks = extract_blocks(&self.tokens);
        let block = select_block(&self.blocks).cloned()
                                              .ok_or(RuntimeError::MalformedBlock { start: 0,
                                                                                    end:   0, })?;

        let before = self.tokens.len();
        let result = reduce_block(&mut self.tokens, &block)?;
        self.blocks = extract_blocks(&self.tokens);

        if self.tokens.len() > 1 && self.tokens.len() >= before {
            return Err(RuntimeError::Stalled { tokens: self.render() });
        }

        self.value = parse_number(&result);
        self.steps += 1;
        log::debug!("step {}: block {} reduced to {result}, {} tokens left",
                    self.steps,
                    block.id,
                    self.tokens.len());

        Ok(self.snapshot())
    }

    /// Reduces until a single token remains and returns the last step.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by a step.
    pub fn evaluate_all(&mut self) -> EvalResult<Evaluation> {
        loop {
            let evaluation = self.evaluate_next()?;
            if evaluation.complete {
                return Ok(evaluation);
            }
        }
    }

    /// Iterates over the remaining reduction steps.
    ///
    /// The iterator ends after the step that completes the expression, or after
    /// the first error.
    pub const fn steps(&mut self) -> Steps<'_> {
        Steps { expression: self,
                done:       false, }
    }

    /// The text this expression was parsed from, including any bindings.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The token sequence as it was right after parsing.
    #[must_use]
    pub fn source_tokens(&self) -> &[Token] {
        &self.parsed
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Value of the most recently reduced block.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Number of reduction steps taken so far.
    #[must_use]
    pub const fn step_count(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tokens.len() == 1
    }

    /// The current tokens joined by spaces.
    #[must_use]
    pub fn render(&self) -> String {
        token::render(&self.tokens)
    }

    fn snapshot(&self) -> Evaluation {
        Evaluation { complete: self.is_complete(),
                     value:    self.value,
                     tokens:   self.tokens.clone(),
                     blocks:   self.blocks.clone(), }
    }
}

/// Iterator returned by [`Expression::steps`].
pub struct Steps<'a> {
    expression: &'a mut Expression,
    done:       bool,
}

impl Iterator for Steps<'_> {
    type Item = EvalResult<Evaluation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let step = self.expression.evaluate_next();
        self.done = !matches!(step, Ok(Evaluation { complete: false, .. }));

        Some(step)
    }
}
