use std::ops::Range;

use serde::Serialize;

use crate::engine::token::Token;

/// A contiguous region of the token sequence at one nesting depth.
///
/// The region covers `start..end` (end exclusive) of the sequence it was
/// extracted from. Indices are only meaningful until the next mutation of that
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Position in scan order, starting at 1.
    pub id:       usize,
    /// Nesting depth at the point the region was closed.
    pub priority: usize,
    /// First token index of the region.
    pub start:    usize,
    /// One past the last token index of the region.
    pub end:      usize,
}

impl Block {
    /// The covered token indices.
    #[must_use]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits a token sequence into blocks.
///
/// A `(` closes the region scanned so far and opens a deeper one that starts
/// at the parenthesis itself. A `)` closes the current region including the
/// parenthesis and returns to the outer depth; scanning resumes after it. The
/// region still open at the last token is closed there.
///
/// A `(` at index 0 closes an empty leading region.
///
/// # Example
/// ```
/// use stepcalc::engine::{bindings::Variables, block::extract_blocks, tokenizer::tokenize};
///
/// let tokens = tokenize("20+(10*(5+5))", &Variables::new());
/// let spans: Vec<_> = extract_blocks(&tokens).iter()
///                                            .map(|b| (b.priority, b.start, b.end))
///                                            .collect();
/// assert_eq!(spans, [(0, 0, 2), (1, 2, 5), (2, 5, 10), (1, 10, 11)]);
/// ```
#[must_use]
pub fn extract_blocks(tokens: &[Token]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut cursor = 0;
    let last = tokens.len().saturating_sub(1);

    for (index, token) in tokens.iter().enumerate() {
        if token.is_open() {
            push_block(&mut blocks, cursor..index, depth);
            cursor = index;
            depth += 1;
        } else if token.is_close() {
            push_block(&mut blocks, cursor..index + 1, depth);
            depth = depth.saturating_sub(1);
            if index != last {
                cursor = index + 1;
            }
        } else if index == last {
            push_block(&mut blocks, cursor..index + 1, depth);
        }
    }

    blocks
}

fn push_block(blocks: &mut Vec<Block>, span: Range<usize>, priority: usize) {
    blocks.push(Block { id: blocks.len() + 1,
                        priority,
                        start: span.start,
                        end: span.end });
}

/// Picks the block to reduce next: the deepest one, and among equally deep
/// blocks the last in scan order.
#[must_use]
pub fn select_block(blocks: &[Block]) -> Option<&Block> {
    blocks.iter().max_by_key(|block| block.priority)
}
