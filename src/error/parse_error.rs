#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or validating an
/// expression.
pub enum ParseError {
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// A number token did not hold a valid decimal literal.
    NotANumber {
        /// The offending token text.
        value: String,
    },
    /// The expression starts with an operator.
    MisplacedOperatorFirst,
    /// The expression ends with an operator.
    MisplacedOperatorLast,
    /// An operator sits next to another operator, or on the wrong side of a
    /// parenthesis.
    MisplacedOperator,
    /// The expression holds an odd number of parentheses.
    OddParenthesis,
    /// A `)` closes a group that was never opened.
    UnbalancedParenthesis,
    /// A `()` pair with nothing inside.
    EmptyParenthesis,
    /// Two operands follow each other without an operator between them.
    MissingOperator {
        /// The token on the left.
        left:  String,
        /// The token on the right.
        right: String,
    },
    /// The bindings after the first comma are not a flat JSON object of
    /// numbers.
    MalformedVariableBindings {
        /// Details reported by the JSON decoder.
        details: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression is empty."),
            Self::NotANumber { value } => write!(f, "Not a valid number. ({value})"),
            Self::MisplacedOperatorFirst => write!(f, "Misplaced operator at first index."),
            Self::MisplacedOperatorLast => write!(f, "Misplaced operator at last index."),
            Self::MisplacedOperator => write!(f, "Misplaced operator."),
            Self::OddParenthesis => write!(f, "Odd number of parenthesis."),
            Self::UnbalancedParenthesis => {
                write!(f, "Closing parenthesis ')' without a matching '('.")
            },
            Self::EmptyParenthesis => write!(f, "Empty parenthesis."),
            Self::MissingOperator { left, right } => {
                write!(f, "Missing operator between '{left}' and '{right}'.")
            },
            Self::MalformedVariableBindings { details } => write!(f,
                                                                  "Malformed variable bindings: {details}."),
        }
    }
}

impl std::error::Error for ParseError {}
