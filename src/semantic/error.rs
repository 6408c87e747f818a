//! Error types for the semantic layer.
//!
//! Malformed source never produces an error here: it degrades to
//! `EntityType::Empty`, empty names or `EntityType::Simple`. These variants
//! only report caller misuse.

use thiserror::Error;

/// Errors raised by source location and extraction queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// The declaration was collected from a different syntax tree than the
    /// one the query was made against.
    #[error("declaration does not belong to this source tree")]
    ForeignDeclaration,

    /// The range does not fit the buffer, or splits a UTF-8 character.
    #[error("range {start}..{end} is out of bounds for a buffer of {len} bytes")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

impl SemanticError {
    /// Create an out-of-bounds error for `start..end` over a buffer of `len` bytes.
    pub fn out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::RangeOutOfBounds { start, end, len }
    }
}

pub type SemanticResult<T> = Result<T, SemanticError>;
