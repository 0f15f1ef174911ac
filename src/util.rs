/// Numeric text helpers.
///
/// Tokens carry their values as text, so every reduction step converts the
/// operands from text to `f64` and writes the result back as text. This module
/// keeps both directions in one place so that the conversion is lossless: a
/// value formatted here always parses back to the identical `f64`.
pub mod num;
