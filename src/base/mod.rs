//! Foundation types for the Sparrow toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`SourceLocation`] - Line/column/offset triples for declarations
//!
//! This module has NO dependencies on other sparrow modules.

mod position;
mod span;

pub use position::{Position, SourceLocation};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
