//! Attribute lists, modifier lists and declaration lookahead.

use super::*;

/// Index just past a balanced group whose opener is the nth significant token.
fn peek_past_balanced<P: BaseParser>(p: &P, mut n: usize) -> usize {
    let mut depth = 0usize;
    loop {
        match p.peek_kind(n) {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return n + 1;
                }
            }
            SyntaxKind::ERROR if p.peek_text(n).is_empty() => return n,
            _ => {}
        }
        n += 1;
    }
}

/// Index just past an attribute whose `@` is the nth significant token.
pub(crate) fn peek_past_attribute<P: BaseParser>(p: &P, mut n: usize) -> usize {
    n += 1; // @
    if p.peek_kind(n) == SyntaxKind::IDENT {
        n += 1;
        while p.peek_kind(n) == SyntaxKind::DOT && p.peek_kind(n + 1) == SyntaxKind::IDENT {
            n += 2;
        }
    }
    if p.peek_kind(n) == SyntaxKind::L_PAREN && !p.newline_before(n) {
        n = peek_past_balanced(p, n);
    }
    n
}

/// Whether the nth significant token is a modifier keyword
pub(crate) fn is_modifier_at<P: BaseParser>(p: &P, n: usize) -> bool {
    match p.peek_kind(n) {
        SyntaxKind::IDENT => MODIFIER_NAMES.contains(&p.peek_text(n)),
        // `class func`, `class var`, `class override func`
        SyntaxKind::CLASS_KW => {
            let next = p.peek_kind(n + 1);
            DECLARATION_KEYWORDS.contains(&next)
                || (next == SyntaxKind::IDENT && MODIFIER_NAMES.contains(&p.peek_text(n + 1)))
        }
        _ => false,
    }
}

/// Index of the first significant token after any attributes and modifiers.
///
/// Returns `None` when a modifier detail is followed by a line break, which
/// reads as a call on its own line (`open(file)`) rather than `private(set)`.
pub(crate) fn peek_past_prefix<P: BaseParser>(p: &P) -> Option<usize> {
    let mut n = 0;
    loop {
        match p.peek_kind(n) {
            SyntaxKind::AT => n = peek_past_attribute(p, n),
            SyntaxKind::IDENT | SyntaxKind::CLASS_KW if is_modifier_at(p, n) => {
                n += 1;
                if p.peek_kind(n) == SyntaxKind::L_PAREN && !p.newline_before(n) {
                    n = peek_past_balanced(p, n);
                    if p.newline_before(n) {
                        return None;
                    }
                }
            }
            _ => return Some(n),
        }
    }
}

/// Look ahead past attributes and modifiers for a declaration keyword.
///
/// Does not consume anything. `case` is not considered here: whether it
/// starts an enum case depends on the enclosing region.
pub fn at_declaration<P: BaseParser>(p: &P) -> bool {
    let Some(n) = peek_past_prefix(p) else {
        return false;
    };
    match p.peek_kind(n) {
        SyntaxKind::POUND_IF => n == 0,
        kind if DECLARATION_KEYWORDS.contains(&kind) => true,
        SyntaxKind::IDENT if p.peek_text(n) == "actor" => p.peek_kind(n + 1) == SyntaxKind::IDENT,
        _ => false,
    }
}

/// Whether an enum case (possibly attributed, possibly `indirect`) starts here
pub(crate) fn at_enum_case<P: BaseParser>(p: &P) -> bool {
    peek_past_prefix(p).is_some_and(|n| p.peek_kind(n) == SyntaxKind::CASE_KW)
}

/// Parse ATTRIBUTE_LIST = Attribute*
///
/// Attribute = '@' Name ('.' Name)* AttributeArguments?
pub fn parse_attribute_list<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::AT) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::ATTRIBUTE_LIST);
    while at_nt(p, SyntaxKind::AT) {
        p.skip_trivia();
        p.start_node(SyntaxKind::ATTRIBUTE);
        p.bump(); // @
        if p.at(SyntaxKind::IDENT) {
            p.bump();
            while p.at(SyntaxKind::DOT) && p.peek_kind(1) == SyntaxKind::IDENT {
                p.bump();
                p.bump();
            }
        } else {
            p.error("expected attribute name after '@'".to_string());
        }
        if p.at(SyntaxKind::L_PAREN) {
            p.start_node(SyntaxKind::ATTRIBUTE_ARGUMENTS);
            bump_balanced(p);
            p.finish_node();
        }
        p.finish_node();
    }
    p.finish_node();
}

/// Parse MODIFIER_LIST = Modifier*
///
/// Modifier = ModifierName ('(' Ident ')')?
pub fn parse_modifier_list<P: BaseParser>(p: &mut P) {
    if !is_modifier_at(p, 0) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::MODIFIER_LIST);
    while is_modifier_at(p, 0) {
        p.skip_trivia();
        p.start_node(SyntaxKind::MODIFIER);
        p.bump();
        if p.at(SyntaxKind::L_PAREN) {
            p.start_node(SyntaxKind::MODIFIER_DETAIL);
            bump_balanced(p);
            p.finish_node();
        }
        p.finish_node();
    }
    p.finish_node();
}
