#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a parsed expression.
pub enum RuntimeError {
    /// Evaluation was requested before a successful parse.
    NotParsed,
    /// A reduction step left a multi-token sequence unchanged.
    Stalled {
        /// The tokens that could not be reduced, joined by spaces.
        tokens: String,
    },
    /// An operator inside a block is missing one of its operands, or the block
    /// is empty.
    MalformedBlock {
        /// First token index of the block.
        start: usize,
        /// One past the last token index of the block.
        end:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotParsed => write!(f, "Nothing to evaluate. Parse an expression first."),
            Self::Stalled { tokens } => {
                write!(f, "Evaluation made no progress on: {tokens}.")
            },
            Self::MalformedBlock { start, end } => write!(f,
                                                          "Block {start}..{end} cannot be reduced."),
        }
    }
}

impl std::error::Error for RuntimeError {}
