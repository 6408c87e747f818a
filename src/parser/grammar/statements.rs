//! Item lists, statements and opaque expressions.
//!
//! Expressions are not modelled: an expression is a run of tokens with
//! balanced delimiters that ends at a statement boundary. Only statements
//! that can contain declarations (control flow blocks) get structure.

use super::attributes::at_enum_case;
use super::*;

/// Which items are legal in the region being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemContext {
    /// File scope: declarations and statements
    TopLevel,
    /// Type body: declarations only
    Members,
    /// Enum body: declarations and `case` declarations
    EnumMembers,
    /// Executable body: local declarations and statements
    Code,
}

/// Where an opaque expression ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExprMode {
    /// Ends at a line break not followed by a continuation token
    Statement,
    /// Like `Statement`, but also ends at a depth-0 comma
    List,
    /// Ends before a depth-0 `{` or `else`; may span lines
    Condition,
    /// A `case ...:` label, ends after the depth-0 colon
    CaseLabel,
}

const CONTROL_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::IF_KW,
    SyntaxKind::GUARD_KW,
    SyntaxKind::FOR_KW,
    SyntaxKind::WHILE_KW,
    SyntaxKind::REPEAT_KW,
    SyntaxKind::DO_KW,
    SyntaxKind::SWITCH_KW,
    SyntaxKind::DEFER_KW,
];

/// Whether only trivia remains
pub(crate) fn at_end<P: BaseParser>(p: &P) -> bool {
    p.peek_kind(0) == SyntaxKind::ERROR && p.peek_text(0).is_empty()
}

// =============================================================================
// Entry points
// =============================================================================

/// SourceFile = Item*
pub fn parse_source_file<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::SOURCE_FILE);
    loop {
        parse_items(p, ItemContext::TopLevel);
        if at_end(p) {
            break;
        }
        // A closer with nothing open at file scope
        p.error(format!("unexpected '{}'", p.peek_text(0)));
        p.skip_trivia();
        p.start_node(SyntaxKind::ERROR);
        p.bump();
        p.finish_node();
    }
    while !p.at_eof() {
        p.bump();
    }
    p.finish_node();
}

/// TypeRoot = Type
///
/// Standalone entry point used to classify type text outside any file.
pub fn parse_type_root<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_ROOT);
    parse_type(p);
    if !at_end(p) {
        p.error(format!("unexpected '{}' after type", p.peek_text(0)));
        p.skip_trivia();
        p.start_node(SyntaxKind::ERROR);
        while !at_end(p) {
            p.skip_trivia();
            p.bump();
        }
        p.finish_node();
    }
    while !p.at_eof() {
        p.bump();
    }
    p.finish_node();
}

/// CodeBlock = '{' Item* '}'
pub fn parse_code_block<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::L_BRACE) {
        p.error(format!("expected '{{', found '{}'", p.peek_text(0)));
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::CODE_BLOCK);
    p.bump(); // {
    parse_items(p, ItemContext::Code);
    expect_nt(p, SyntaxKind::R_BRACE);
    p.finish_node();
}

// =============================================================================
// Items
// =============================================================================

/// Parse items until a region closer or the end of input.
pub(crate) fn parse_items<P: BaseParser>(p: &mut P, context: ItemContext) {
    loop {
        let kind = p.peek_kind(0);
        if at_end(p) || REGION_CLOSERS.contains(&kind) {
            break;
        }
        if kind == SyntaxKind::SEMICOLON {
            bump_nt(p);
            continue;
        }
        if at_declaration(p) || (context == ItemContext::EnumMembers && at_enum_case(p)) {
            parse_declaration(p, context);
            continue;
        }
        match context {
            ItemContext::Members | ItemContext::EnumMembers => {
                // Freestanding macros (`#warning(...)`) are allowed in type bodies
                if kind == SyntaxKind::POUND_IDENT {
                    parse_expr_stmt(p, ExprMode::Statement);
                } else {
                    error_recover(
                        p,
                        format!("expected declaration, found '{}'", p.peek_text(0)),
                        &[],
                    );
                }
            }
            ItemContext::TopLevel | ItemContext::Code => parse_statement(p),
        }
    }
}

fn at_control_stmt<P: BaseParser>(p: &P) -> bool {
    let kind = p.peek_kind(0);
    if CONTROL_KEYWORDS.contains(&kind) {
        return true;
    }
    // Labeled loop: `outer: for ...`
    kind == SyntaxKind::IDENT
        && p.peek_kind(1) == SyntaxKind::COLON
        && CONTROL_KEYWORDS.contains(&p.peek_kind(2))
}

fn parse_statement<P: BaseParser>(p: &mut P) {
    match p.peek_kind(0) {
        _ if at_control_stmt(p) => parse_control_stmt(p),
        SyntaxKind::CASE_KW => parse_expr_stmt(p, ExprMode::CaseLabel),
        SyntaxKind::COMMA | SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
            error_recover(p, format!("unexpected '{}'", p.peek_text(0)), &[]);
        }
        _ => parse_expr_stmt(p, ExprMode::Statement),
    }
}

fn parse_expr_stmt<P: BaseParser>(p: &mut P, mode: ExprMode) {
    p.skip_trivia();
    p.start_node(SyntaxKind::EXPR_STMT);
    bump_expr_tokens(p, mode);
    p.finish_node();
}

// =============================================================================
// Control flow
// =============================================================================

/// ControlStmt = (Label ':')? Keyword Condition? CodeBlock Continuation*
///
/// Continuation covers `else if`, `else`, `catch` and `repeat ... while`.
fn parse_control_stmt<P: BaseParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::CONTROL_STMT);
    if p.at(SyntaxKind::IDENT) {
        p.bump(); // label
        bump_nt(p); // :
    }
    let keyword = p.peek_kind(0);
    bump_nt(p);

    match keyword {
        SyntaxKind::REPEAT_KW => {
            parse_code_block(p);
            if eat_nt(p, SyntaxKind::WHILE_KW) {
                parse_expr(p, ExprMode::Statement);
            }
        }
        SyntaxKind::GUARD_KW => {
            parse_expr(p, ExprMode::Condition);
            expect_nt(p, SyntaxKind::ELSE_KW);
            parse_code_block(p);
        }
        SyntaxKind::DO_KW | SyntaxKind::DEFER_KW => {
            parse_code_block(p);
            while keyword == SyntaxKind::DO_KW && eat_nt(p, SyntaxKind::CATCH_KW) {
                if !at_nt(p, SyntaxKind::L_BRACE) {
                    parse_expr(p, ExprMode::Condition);
                }
                parse_code_block(p);
            }
        }
        SyntaxKind::IF_KW => loop {
            parse_expr(p, ExprMode::Condition);
            parse_code_block(p);
            if !eat_nt(p, SyntaxKind::ELSE_KW) {
                break;
            }
            if !eat_nt(p, SyntaxKind::IF_KW) {
                parse_code_block(p);
                break;
            }
        },
        // for, while, switch
        _ => {
            parse_expr(p, ExprMode::Condition);
            parse_code_block(p);
        }
    }
    p.finish_node();
}

// =============================================================================
// Opaque expressions
// =============================================================================

/// Tokens that may continue an expression on the next line
fn is_continuation(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::DOT
            | SyntaxKind::OPERATOR
            | SyntaxKind::EQ
            | SyntaxKind::ARROW
            | SyntaxKind::QUESTION
            | SyntaxKind::AMP
            | SyntaxKind::COLON
            | SyntaxKind::L_ANGLE
            | SyntaxKind::R_ANGLE
            | SyntaxKind::HALF_OPEN_RANGE
            | SyntaxKind::ELLIPSIS
            | SyntaxKind::ELSE_KW
            | SyntaxKind::CATCH_KW
    )
}

/// A `{` that opens `willSet`/`didSet` observers rather than a trailing closure
fn at_observer_block<P: BaseParser>(p: &P) -> bool {
    p.peek_kind(1) == SyntaxKind::IDENT && matches!(p.peek_text(1), "willSet" | "didSet")
}

fn at_expr_stop<P: BaseParser>(p: &P, mode: ExprMode) -> bool {
    match p.peek_kind(0) {
        SyntaxKind::SEMICOLON
        | SyntaxKind::R_BRACE
        | SyntaxKind::R_PAREN
        | SyntaxKind::R_BRACKET
        | SyntaxKind::POUND_IF
        | SyntaxKind::POUND_ELSEIF
        | SyntaxKind::POUND_ELSE
        | SyntaxKind::POUND_ENDIF => true,
        SyntaxKind::COMMA => mode == ExprMode::List,
        SyntaxKind::L_BRACE | SyntaxKind::ELSE_KW => mode == ExprMode::Condition,
        _ => at_end(p),
    }
}

/// Bump the tokens of one expression into the current node.
/// Returns false if nothing was consumed.
fn bump_expr_tokens<P: BaseParser>(p: &mut P, mode: ExprMode) -> bool {
    let mut consumed = false;
    loop {
        if at_expr_stop(p, mode) {
            break;
        }
        let kind = p.peek_kind(0);
        if consumed
            && mode != ExprMode::Condition
            && p.newline_before(0)
            && !is_continuation(kind)
        {
            break;
        }
        if consumed && kind == SyntaxKind::L_BRACE && at_observer_block(p) {
            break;
        }
        p.skip_trivia();
        if matches!(kind, SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE) {
            bump_balanced(p);
        } else {
            p.bump();
        }
        consumed = true;
        if mode == ExprMode::CaseLabel && kind == SyntaxKind::COLON {
            break;
        }
    }
    consumed
}

/// Expr = opaque balanced token run
pub(crate) fn parse_expr<P: BaseParser>(p: &mut P, mode: ExprMode) {
    if at_expr_stop(p, mode) {
        p.error(format!("expected expression, found '{}'", p.peek_text(0)));
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::EXPR);
    bump_expr_tokens(p, mode);
    p.finish_node();
}

// =============================================================================
// Conditional compilation
// =============================================================================

/// IfConfigDecl = IfConfigClause+ '#endif'
///
/// IfConfigClause = ('#if' | '#elseif') Condition Item* | '#else' Item*
pub(crate) fn parse_if_config<P: BaseParser>(p: &mut P, context: ItemContext) {
    p.skip_trivia();
    p.start_node(SyntaxKind::IF_CONFIG_DECL);
    parse_if_config_clause(p, context);
    while at_nt(p, SyntaxKind::POUND_ELSEIF) || at_nt(p, SyntaxKind::POUND_ELSE) {
        parse_if_config_clause(p, context);
    }
    expect_nt(p, SyntaxKind::POUND_ENDIF);
    p.finish_node();
}

fn parse_if_config_clause<P: BaseParser>(p: &mut P, context: ItemContext) {
    p.skip_trivia();
    p.start_node(SyntaxKind::IF_CONFIG_CLAUSE);
    let has_condition = !p.at(SyntaxKind::POUND_ELSE);
    p.bump();
    if has_condition {
        parse_if_config_condition(p);
    }
    parse_items(p, context);
    p.finish_node();
}

/// The condition runs to the end of the line
fn parse_if_config_condition<P: BaseParser>(p: &mut P) {
    if p.newline_before(0) || at_end(p) {
        p.error("expected condition after '#if'".to_string());
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::IF_CONFIG_CONDITION);
    while !at_end(p) && !p.newline_before(0) {
        p.skip_trivia();
        if p.at_any(&[SyntaxKind::L_PAREN, SyntaxKind::L_BRACKET]) {
            bump_balanced(p);
        } else {
            p.bump();
        }
    }
    p.finish_node();
}
