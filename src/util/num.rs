/// Formats a value the way it is stored inside a number token.
///
/// Uses the shortest representation that parses back to the same `f64`, and
/// never switches to exponent notation. Non-finite values become `inf`, `-inf`
/// and `NaN`.
///
/// ## Example
/// ```
/// use stepcalc::util::num::format_number;
///
/// assert_eq!(format_number(150.0), "150");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(-1.0 / 0.0), "-inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Reads the value stored inside a number token.
///
/// Accepts everything [`format_number`] produces as well as validated
/// literals such as `5.` or `-8`. Text that is not a number yields `NaN`, the
/// same way an invalid operand propagates through IEEE arithmetic.
///
/// ## Example
/// ```
/// use stepcalc::util::num::parse_number;
///
/// assert_eq!(parse_number("5."), 5.0);
/// assert_eq!(parse_number("-8"), -8.0);
/// assert!(parse_number("inf").is_infinite());
/// assert!(parse_number("x").is_nan());
/// ```
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}
