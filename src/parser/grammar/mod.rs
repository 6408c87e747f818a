//! Grammar modules for Swift parsing
//!
//! This module contains the parsing logic organized by construct:
//! - `attributes` - Attribute and modifier lists, declaration lookahead
//! - `types` - The type grammar (simple, sugared, tuple, function, optional, ...)
//! - `clauses` - Generic clauses, inheritance, parameters, signatures, accessors
//! - `declarations` - Every declaration form
//! - `statements` - Source file / code block items, control flow, `#if`, opaque expressions
//!
//! The parsing functions are generic over [`BaseParser`] so they can be used
//! with any parser implementation.
//!
//! ## Trivia convention
//!
//! Grammar functions may be entered while the cursor sits on trivia. A node is
//! only started after skipping trivia, and trivia is only consumed when the
//! next significant token is known to belong to the current node. Leading and
//! trailing trivia therefore stay outside declaration nodes, so a node's text
//! is exactly its trimmed source.

use crate::parser::syntax_kind::SyntaxKind;
use rowan::Checkpoint;

mod attributes;
mod clauses;
mod declarations;
mod statements;
mod types;

pub use attributes::{at_declaration, parse_attribute_list, parse_modifier_list};
pub use declarations::parse_declaration;
pub use statements::{ItemContext, parse_code_block, parse_source_file, parse_type_root};
pub use types::parse_type;

// =============================================================================
// Constants
// =============================================================================

/// Contextual keywords that act as declaration modifiers
pub const MODIFIER_NAMES: &[&str] = &[
    "public",
    "private",
    "fileprivate",
    "internal",
    "open",
    "package",
    "static",
    "final",
    "override",
    "mutating",
    "nonmutating",
    "convenience",
    "required",
    "lazy",
    "weak",
    "unowned",
    "optional",
    "dynamic",
    "indirect",
    "nonisolated",
    "isolated",
    "distributed",
    "prefix",
    "postfix",
    "infix",
    "consuming",
    "borrowing",
];

/// Keywords that introduce a declaration
pub const DECLARATION_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::ASSOCIATEDTYPE_KW,
    SyntaxKind::CLASS_KW,
    SyntaxKind::DEINIT_KW,
    SyntaxKind::ENUM_KW,
    SyntaxKind::EXTENSION_KW,
    SyntaxKind::FUNC_KW,
    SyntaxKind::IMPORT_KW,
    SyntaxKind::INIT_KW,
    SyntaxKind::LET_KW,
    SyntaxKind::OPERATOR_KW,
    SyntaxKind::PRECEDENCEGROUP_KW,
    SyntaxKind::PROTOCOL_KW,
    SyntaxKind::STRUCT_KW,
    SyntaxKind::SUBSCRIPT_KW,
    SyntaxKind::TYPEALIAS_KW,
    SyntaxKind::VAR_KW,
];

/// Accessor names inside an accessor block
pub const ACCESSOR_NAMES: &[&str] = &[
    "get",
    "set",
    "willSet",
    "didSet",
    "_read",
    "_modify",
    "init",
];

/// Tokens that close a region; recovery never consumes past them
pub const REGION_CLOSERS: &[SyntaxKind] = &[
    SyntaxKind::R_BRACE,
    SyntaxKind::POUND_ELSEIF,
    SyntaxKind::POUND_ELSE,
    SyntaxKind::POUND_ENDIF,
];

// =============================================================================
// BaseParser trait
// =============================================================================

/// Interface between the grammar functions and the token-level parser.
///
/// `at`/`current_*` inspect the raw current token (which may be trivia);
/// `peek_*` skip trivia and index significant tokens only.
pub trait BaseParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    fn current_token_text(&self) -> Option<&str>;
    fn at(&self, kind: SyntaxKind) -> bool;
    fn at_any(&self, kinds: &[SyntaxKind]) -> bool;
    fn at_eof(&self) -> bool;

    // Position tracking
    fn get_pos(&self) -> usize;

    /// Kind of the nth significant token ahead (skipping trivia)
    fn peek_kind(&self, n: usize) -> SyntaxKind;

    /// Text of the nth significant token ahead (skipping trivia)
    fn peek_text(&self, n: usize) -> &str;

    /// Whether the trivia before the nth significant token contains a newline
    fn newline_before(&self, n: usize) -> bool;

    // Token consumption
    fn bump(&mut self);
    fn skip_trivia(&mut self);

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);
    fn checkpoint(&self) -> Checkpoint;
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);

    // Error handling
    fn error(&mut self, message: String);
}

// =============================================================================
// Helper Functions — Common Patterns (used across all submodules)
// =============================================================================

/// Whether the next significant token has the given kind
#[inline]
pub(crate) fn at_nt<P: BaseParser>(p: &P, kind: SyntaxKind) -> bool {
    p.peek_kind(0) == kind
}

/// Whether the next significant token is the contextual keyword `text`
#[inline]
pub(crate) fn at_contextual<P: BaseParser>(p: &P, text: &str) -> bool {
    p.peek_kind(0) == SyntaxKind::IDENT && p.peek_text(0) == text
}

/// Skip trivia and bump the next significant token
#[inline]
pub(crate) fn bump_nt<P: BaseParser>(p: &mut P) {
    p.skip_trivia();
    p.bump();
}

/// Bump the next significant token if it has the given kind
#[inline]
pub(crate) fn eat_nt<P: BaseParser>(p: &mut P, kind: SyntaxKind) -> bool {
    if at_nt(p, kind) {
        bump_nt(p);
        true
    } else {
        false
    }
}

/// Expect a token kind, reporting an error that names what was found
pub(crate) fn expect_nt<P: BaseParser>(p: &mut P, kind: SyntaxKind) -> bool {
    if eat_nt(p, kind) {
        return true;
    }
    let found = if p.peek_kind(0) == SyntaxKind::ERROR && p.at_eof() {
        "end of file".to_string()
    } else {
        format!("'{}' ({})", p.peek_text(0), p.peek_kind(0).display_name())
    };
    p.error(format!("expected {}, found {}", kind.display_name(), found));
    false
}

/// Whether the next significant token is an identifier-like name
#[inline]
pub(crate) fn at_name<P: BaseParser>(p: &P) -> bool {
    p.peek_kind(0) == SyntaxKind::IDENT
}

/// Parse a NAME node holding one identifier, or report a missing name
pub(crate) fn parse_name<P: BaseParser>(p: &mut P) {
    if at_name(p) {
        p.skip_trivia();
        p.start_node(SyntaxKind::NAME);
        p.bump();
        p.finish_node();
    } else {
        p.error(format!("expected name, found '{}'", p.peek_text(0)));
    }
}

/// Parse a NAME node that may be an identifier or an operator spelled as
/// several glued tokens (`==`, `<*>`, `...`).
pub(crate) fn parse_identifier_or_operator_name<P: BaseParser>(p: &mut P) {
    if at_name(p) {
        parse_name(p);
    } else if p.peek_kind(0).is_operator_part() {
        p.skip_trivia();
        p.start_node(SyntaxKind::NAME);
        p.bump();
        // Operator characters glued together form one name
        while p.current_kind().is_operator_part() {
            p.bump();
        }
        p.finish_node();
    } else {
        p.error(format!("expected name, found '{}'", p.peek_text(0)));
    }
}

/// Consume a balanced token group starting at an opening delimiter.
///
/// The cursor must be on a significant `(`, `[` or `{` (trivia skipped).
/// Tokens are bumped into the current node without structure.
pub(crate) fn bump_balanced<P: BaseParser>(p: &mut P) {
    let mut depth = 0usize;
    loop {
        if p.at_eof() {
            p.error("unbalanced delimiters".to_string());
            return;
        }
        match p.current_kind() {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    p.bump();
                    return;
                }
            }
            _ => {}
        }
        p.bump();
    }
}

/// Recover from an unexpected token by wrapping tokens in an ERROR node
/// until one of `recovery` (or a region closer) is reached.
pub(crate) fn error_recover<P: BaseParser>(p: &mut P, message: String, recovery: &[SyntaxKind]) {
    p.error(message);
    p.skip_trivia();
    p.start_node(SyntaxKind::ERROR);
    // Always consume at least one token to make progress
    let mut consumed = false;
    while !p.at_eof() {
        let kind = p.peek_kind(0);
        if consumed && (recovery.contains(&kind) || REGION_CLOSERS.contains(&kind)) {
            break;
        }
        if !consumed && REGION_CLOSERS.contains(&kind) {
            break;
        }
        if consumed && at_declaration(p) {
            break;
        }
        p.skip_trivia();
        if matches!(kind, SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE) {
            bump_balanced(p);
        } else {
            p.bump();
        }
        consumed = true;
    }
    p.finish_node();
}
