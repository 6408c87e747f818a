//! Rowan-based lossless parser for Swift source
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! Every byte of the input, whitespace and comments included, ends up in the
//! tree. Declarations and types are parsed in full; statement and expression
//! bodies are kept as balanced token runs, which is all the declaration
//! collector needs.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! semantic → Declarations, entity types, collections
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod grammar;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse, parse_type_text};
pub use syntax_kind::{SwiftLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
