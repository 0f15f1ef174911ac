/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression,
/// decoding its variable bindings, or validating the resulting token sequence.
/// A parse error is terminal for the `parse` call that produced it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while reducing a parsed
/// expression, such as evaluating before parsing or a block that cannot be
/// reduced.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
