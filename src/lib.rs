//! # sparrow-base
//!
//! Core library for Swift source parsing, type classification, and
//! declaration collection.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! semantic  → Type classifier, declaration model, source tree, locations
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST, typed AST
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Position)
//! ```
//!
//! ## Example
//!
//! ```
//! use sparrow::semantic::{DeclarationKind, EntityType, Named, SourceTree};
//!
//! let mut tree = SourceTree::new("struct Point {\n    var x: [Int]?\n}");
//! tree.collect_children();
//!
//! let point = tree.structures().next().unwrap();
//! let x = point.members().variables().next().unwrap();
//! assert_eq!(x.name(), "x");
//! assert!(matches!(x.ty(), EntityType::Array { is_optional: true, .. }));
//! assert_eq!(tree.recursively_collect(&[DeclarationKind::Variable]).len(), 1);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → semantic)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Position
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Semantic model: type classification and declaration collections
pub mod semantic;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, SourceLocation, TextRange, TextSize};

// Re-export the main entry points
pub use parser::{Parse, SyntaxError, parse};
pub use semantic::{DeclarationCollection, EntityType, SemanticError, SourceTree};
