/// Variable bindings.
///
/// Splits the input at its first comma and decodes the JSON object that may
/// follow it into single-letter variable values.
pub mod bindings;
/// Block extraction and selection.
///
/// Splits a token sequence into regions of equal parenthesis depth and picks
/// the region to reduce next. Blocks index into the sequence they were taken
/// from and must be extracted again after every mutation.
pub mod block;
/// The stateful engine.
///
/// Wraps an [`Expression`](expression::Expression) in the
/// empty/parsed/reducing/complete lifecycle and reports parse outcomes as
/// plain records.
pub mod driver;
/// The parsed expression and its reduction drivers.
///
/// # Responsibilities
/// - Runs tokenizing, validation and block extraction for one input.
/// - Owns the token and block buffers of that input.
/// - Reduces one block per step, or all of them.
pub mod expression;
/// The lexer module scans raw expression text.
///
/// Produces lexemes for the tokenizer and recognises decimal literals for the
/// validator.
pub mod lexer;
/// Arithmetic operators and their precedence tiers.
pub mod operator;
/// Block reduction.
///
/// Collapses one block to a single number token, operator by operator, in
/// tier order.
pub mod reducer;
/// Token types shared by every stage.
pub mod token;
/// The tokenizer turns expression text into tokens.
///
/// # Responsibilities
/// - Groups literal text between symbols into number tokens.
/// - Resolves unary minus and the `**` operator.
/// - Substitutes bound variables.
pub mod tokenizer;
/// Structural validation of token sequences.
pub mod validator;
