//! Clauses shared between declaration forms: generic parameter and where
//! clauses, inheritance, type annotations, initializers, parameters,
//! function signatures, accessor blocks and member blocks.

use super::attributes::{is_modifier_at, peek_past_attribute};
use super::statements::{ExprMode, parse_code_block, parse_expr, parse_items, ItemContext};
use super::types::at_type_start;
use super::*;

// =============================================================================
// Generics
// =============================================================================

/// GenericParameterClause = '<' GenericParameter (',' GenericParameter)* '>'
///
/// GenericParameter = 'each'? Name (':' Type)?
pub(crate) fn parse_generic_parameter_clause<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::L_ANGLE) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::GENERIC_PARAMETER_CLAUSE);
    p.bump(); // <
    loop {
        if !at_name(p) {
            p.error(format!("expected generic parameter, found '{}'", p.peek_text(0)));
            break;
        }
        p.skip_trivia();
        p.start_node(SyntaxKind::GENERIC_PARAMETER);
        if p.peek_text(0) == "each" && p.peek_kind(1) == SyntaxKind::IDENT {
            bump_nt(p);
        }
        parse_name(p);
        if eat_nt(p, SyntaxKind::COLON) {
            parse_type(p);
        }
        p.finish_node();
        if !eat_nt(p, SyntaxKind::COMMA) {
            break;
        }
    }
    expect_nt(p, SyntaxKind::R_ANGLE);
    p.finish_node();
}

/// GenericWhereClause = 'where' GenericRequirement (',' GenericRequirement)*
///
/// GenericRequirement = Type (':' Type | '==' Type)
pub(crate) fn parse_generic_where_clause<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::WHERE_KW) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::GENERIC_WHERE_CLAUSE);
    p.bump(); // where
    loop {
        if !at_type_start(p) {
            p.error(format!("expected requirement, found '{}'", p.peek_text(0)));
            break;
        }
        p.skip_trivia();
        p.start_node(SyntaxKind::GENERIC_REQUIREMENT);
        parse_type(p);
        if eat_nt(p, SyntaxKind::COLON) {
            parse_type(p);
        } else if at_nt(p, SyntaxKind::OPERATOR) && p.peek_text(0) == "==" {
            bump_nt(p);
            parse_type(p);
        } else {
            p.error("expected ':' or '==' in requirement".to_string());
        }
        p.finish_node();
        if !eat_nt(p, SyntaxKind::COMMA) {
            break;
        }
    }
    p.finish_node();
}

// =============================================================================
// Inheritance and annotations
// =============================================================================

/// InheritanceClause = ':' InheritedType (',' InheritedType)*
///
/// InheritedType = 'class' | '~'? Type
pub(crate) fn parse_inheritance_clause<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::COLON) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::INHERITANCE_CLAUSE);
    p.bump(); // :
    loop {
        p.skip_trivia();
        p.start_node(SyntaxKind::INHERITED_TYPE);
        if p.at(SyntaxKind::CLASS_KW) {
            p.bump();
        } else {
            // Suppressed conformance: `~Copyable`
            if p.at(SyntaxKind::OPERATOR) && p.current_token_text() == Some("~") {
                p.bump();
            }
            parse_type(p);
        }
        p.finish_node();
        if !eat_nt(p, SyntaxKind::COMMA) {
            break;
        }
    }
    p.finish_node();
}

/// TypeAnnotation = ':' Type
pub(crate) fn parse_type_annotation<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::COLON) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::TYPE_ANNOTATION);
    p.bump();
    parse_type(p);
    p.finish_node();
}

/// TypeInitializer = '=' Type
pub(crate) fn parse_type_initializer<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::EQ) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::TYPE_INITIALIZER);
    p.bump();
    parse_type(p);
    p.finish_node();
}

/// InitializerClause = '=' Expr
pub(crate) fn parse_initializer_clause<P: BaseParser>(p: &mut P, mode: ExprMode) {
    if !at_nt(p, SyntaxKind::EQ) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::INITIALIZER_CLAUSE);
    p.bump();
    parse_expr(p, mode);
    p.finish_node();
}

// =============================================================================
// Parameters and signatures
// =============================================================================

/// Argument labels may be any keyword (`for`, `in`, `where`, ...)
fn at_label<P: BaseParser>(p: &P, n: usize) -> bool {
    let kind = p.peek_kind(n);
    kind == SyntaxKind::IDENT || kind.is_keyword()
}

fn parse_label<P: BaseParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::NAME);
    p.bump();
    p.finish_node();
}

/// ParameterClause = '(' (Parameter (',' Parameter)*)? ')'
pub(crate) fn parse_parameter_clause<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::L_PAREN) {
        p.error(format!("expected parameter clause, found '{}'", p.peek_text(0)));
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::PARAMETER_CLAUSE);
    p.bump(); // (
    while !at_nt(p, SyntaxKind::R_PAREN) && !p.at_eof() {
        if at_nt(p, SyntaxKind::AT) || at_label(p, 0) || at_type_start(p) {
            parse_parameter(p);
        } else {
            error_recover(
                p,
                format!("expected parameter, found '{}'", p.peek_text(0)),
                &[SyntaxKind::COMMA, SyntaxKind::R_PAREN],
            );
        }
        if !eat_nt(p, SyntaxKind::COMMA) {
            break;
        }
    }
    expect_nt(p, SyntaxKind::R_PAREN);
    p.finish_node();
}

/// Parameter = Attribute* (Label Name? ':')? Type '...'? ('=' Expr)?
///
/// The label part is optional so the same node serves enum associated values.
fn parse_parameter<P: BaseParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::PARAMETER);
    // `@ViewBuilder content: ...`; attributes on the type come after the colon
    let labeled_after_attributes = at_nt(p, SyntaxKind::AT) && {
        let mut n = 0;
        while p.peek_kind(n) == SyntaxKind::AT {
            n = peek_past_attribute(p, n);
        }
        at_label(p, n)
            && (p.peek_kind(n + 1) == SyntaxKind::COLON
                || (at_label(p, n + 1) && p.peek_kind(n + 2) == SyntaxKind::COLON))
    };
    if labeled_after_attributes {
        parse_attribute_list(p);
    }

    let one_name = at_label(p, 0) && p.peek_kind(1) == SyntaxKind::COLON;
    let two_names =
        at_label(p, 0) && at_label(p, 1) && p.peek_kind(2) == SyntaxKind::COLON;
    if one_name || two_names {
        parse_label(p);
        if two_names {
            parse_label(p);
        }
        expect_nt(p, SyntaxKind::COLON);
    }
    parse_type(p);
    eat_nt(p, SyntaxKind::ELLIPSIS);
    parse_initializer_clause(p, ExprMode::List);
    p.finish_node();
}

/// Whether effect specifiers start here
pub(crate) fn at_effect_specifier<P: BaseParser>(p: &P) -> bool {
    matches!(p.peek_kind(0), SyntaxKind::THROWS_KW | SyntaxKind::RETHROWS_KW)
        || at_contextual(p, "async")
        || at_contextual(p, "reasync")
}

/// EffectSpecifiers = ('async' | 'reasync' | 'throws' ('(' Type ')')? | 'rethrows')+
pub(crate) fn parse_effect_specifiers<P: BaseParser>(p: &mut P) {
    if !at_effect_specifier(p) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::EFFECT_SPECIFIERS);
    while at_effect_specifier(p) {
        let typed_throws = at_nt(p, SyntaxKind::THROWS_KW);
        bump_nt(p);
        // Typed throws: `throws(MyError)`
        if typed_throws && p.at(SyntaxKind::L_PAREN) {
            bump_balanced(p);
        }
    }
    p.finish_node();
}

/// ReturnClause = '->' Type
pub(crate) fn parse_return_clause<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::ARROW) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::RETURN_CLAUSE);
    p.bump();
    parse_type(p);
    p.finish_node();
}

/// FunctionSignature = ParameterClause EffectSpecifiers? ReturnClause?
pub(crate) fn parse_function_signature<P: BaseParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::FUNCTION_SIGNATURE);
    parse_parameter_clause(p);
    parse_effect_specifiers(p);
    parse_return_clause(p);
    p.finish_node();
}

// =============================================================================
// Bodies
// =============================================================================

/// Whether the token after an opening `{` starts an explicit accessor
fn at_accessor_list<P: BaseParser>(p: &P) -> bool {
    let mut n = 1;
    loop {
        if p.peek_kind(n) == SyntaxKind::AT {
            n = peek_past_attribute(p, n);
        } else if p.peek_kind(n) == SyntaxKind::IDENT
            && is_modifier_at(p, n)
            && p.peek_kind(n + 1) == SyntaxKind::IDENT
        {
            n += 1;
        } else {
            break;
        }
    }
    let is_accessor_name = match p.peek_kind(n) {
        SyntaxKind::IDENT => ACCESSOR_NAMES.contains(&p.peek_text(n)),
        SyntaxKind::INIT_KW => true,
        _ => false,
    };
    if !is_accessor_name {
        return false;
    }
    match p.peek_kind(n + 1) {
        SyntaxKind::L_BRACE | SyntaxKind::L_PAREN | SyntaxKind::R_BRACE => true,
        SyntaxKind::THROWS_KW => true,
        SyntaxKind::IDENT => {
            let next = p.peek_text(n + 1);
            ACCESSOR_NAMES.contains(&next) || next == "async" || MODIFIER_NAMES.contains(&next)
        }
        _ => false,
    }
}

/// AccessorBlock = '{' AccessorDecl* '}' | CodeBlock
///
/// The second form is an implicit getter.
pub(crate) fn parse_accessor_block<P: BaseParser>(p: &mut P) {
    if !at_nt(p, SyntaxKind::L_BRACE) {
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::ACCESSOR_BLOCK);
    if at_accessor_list(p) {
        p.bump(); // {
        while !at_nt(p, SyntaxKind::R_BRACE) && !p.at_eof() {
            if at_nt(p, SyntaxKind::AT) || at_name(p) || at_nt(p, SyntaxKind::INIT_KW) {
                parse_accessor_decl(p);
            } else {
                error_recover(
                    p,
                    format!("expected accessor, found '{}'", p.peek_text(0)),
                    &[SyntaxKind::IDENT],
                );
            }
        }
        expect_nt(p, SyntaxKind::R_BRACE);
    } else {
        parse_code_block(p);
    }
    p.finish_node();
}

/// AccessorDecl = Attribute* Modifier* AccessorName ('(' Name ')')? EffectSpecifiers? CodeBlock?
fn parse_accessor_decl<P: BaseParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::ACCESSOR_DECL);
    parse_attribute_list(p);
    if at_name(p) && is_modifier_at(p, 0) && p.peek_kind(1) == SyntaxKind::IDENT {
        parse_modifier_list(p);
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::NAME);
    p.bump();
    p.finish_node();
    if at_nt(p, SyntaxKind::L_PAREN) {
        p.skip_trivia();
        p.start_node(SyntaxKind::ACCESSOR_PARAMETER);
        p.bump(); // (
        parse_name(p);
        expect_nt(p, SyntaxKind::R_PAREN);
        p.finish_node();
    }
    parse_effect_specifiers(p);
    if at_nt(p, SyntaxKind::L_BRACE) {
        parse_code_block(p);
    }
    p.finish_node();
}

/// MemberBlock = '{' Member* '}'
pub(crate) fn parse_member_block<P: BaseParser>(p: &mut P, context: ItemContext) {
    if !at_nt(p, SyntaxKind::L_BRACE) {
        p.error(format!("expected '{{', found '{}'", p.peek_text(0)));
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::MEMBER_BLOCK);
    p.bump(); // {
    parse_items(p, context);
    expect_nt(p, SyntaxKind::R_BRACE);
    p.finish_node();
}
