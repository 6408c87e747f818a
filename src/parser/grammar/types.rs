//! Type grammar
//!
//! ```text
//! Type            = AttributedType | SomeOrAnyType | FunctionType | CompositionType
//! AttributedType  = (Specifier | Attribute)+ Type
//! FunctionType    = TupleType EffectSpecifiers? '->' Type
//! CompositionType = PostfixType ('&' PostfixType)*
//! PostfixType     = PrimaryType ('?' | '!' | '.' Name GenericArgs? | '.Type' | '.Protocol')*
//! PrimaryType     = SimpleType | ArrayType | DictionaryType | TupleType
//! ```
//!
//! Postfix markers must be glued to the type they apply to (`Int?`, not `Int ?`).

use super::clauses::{parse_effect_specifiers, parse_return_clause};
use super::*;

/// Ownership specifiers accepted in front of a type
const TYPE_SPECIFIERS: &[&str] = &["__owned", "__shared", "borrowing", "consuming", "sending"];

/// Whether the next significant token can start a type
pub(crate) fn at_type_start<P: BaseParser>(p: &P) -> bool {
    matches!(
        p.peek_kind(0),
        SyntaxKind::IDENT
            | SyntaxKind::L_BRACKET
            | SyntaxKind::L_PAREN
            | SyntaxKind::AT
            | SyntaxKind::INOUT_KW
    )
}

fn at_effect_or_arrow<P: BaseParser>(p: &P) -> bool {
    matches!(
        p.peek_kind(0),
        SyntaxKind::ARROW | SyntaxKind::THROWS_KW | SyntaxKind::RETHROWS_KW
    ) || at_contextual(p, "async")
}

/// Parse a type. Reports an error and consumes nothing if no type starts here.
pub fn parse_type<P: BaseParser>(p: &mut P) {
    if !at_type_start(p) {
        p.error(format!("expected type, found '{}'", p.peek_text(0)));
        return;
    }
    p.skip_trivia();

    let is_specifier = p.at(SyntaxKind::INOUT_KW)
        || (p.at(SyntaxKind::IDENT)
            && TYPE_SPECIFIERS.contains(&p.peek_text(0))
            && p.peek_kind(1) != SyntaxKind::DOT);
    if is_specifier || p.at(SyntaxKind::AT) {
        parse_attributed_type(p);
        return;
    }

    if (at_contextual(p, "some") || at_contextual(p, "any"))
        && matches!(
            p.peek_kind(1),
            SyntaxKind::IDENT | SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET
        )
    {
        p.start_node(SyntaxKind::SOME_OR_ANY_TYPE);
        p.bump();
        p.skip_trivia();
        parse_composition_type(p);
        p.finish_node();
        return;
    }

    let checkpoint = p.checkpoint();
    let parenthesized = parse_composition_type(p);
    if parenthesized && at_effect_or_arrow(p) {
        p.start_node_at(checkpoint, SyntaxKind::FUNCTION_TYPE);
        parse_effect_specifiers(p);
        if at_nt(p, SyntaxKind::ARROW) {
            parse_return_clause(p);
        } else {
            p.error("expected '->' in function type".to_string());
        }
        p.finish_node();
    }
}

/// AttributedType = (Specifier | Attribute)+ Type
fn parse_attributed_type<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::ATTRIBUTED_TYPE);
    loop {
        if at_nt(p, SyntaxKind::INOUT_KW) {
            bump_nt(p);
        } else if at_name(p) && TYPE_SPECIFIERS.contains(&p.peek_text(0)) {
            bump_nt(p);
        } else if at_nt(p, SyntaxKind::AT) {
            parse_attribute_list(p);
        } else {
            break;
        }
    }
    parse_type(p);
    p.finish_node();
}

/// CompositionType = PostfixType ('&' PostfixType)*
///
/// Returns true when the result is a bare parenthesized group, which is the
/// only shape that can become a function type's parameter list.
fn parse_composition_type<P: BaseParser>(p: &mut P) -> bool {
    let checkpoint = p.checkpoint();
    let parenthesized = parse_postfix_type(p);
    if !at_nt(p, SyntaxKind::AMP) {
        return parenthesized;
    }
    p.start_node_at(checkpoint, SyntaxKind::COMPOSITION_TYPE);
    while eat_nt(p, SyntaxKind::AMP) {
        if at_type_start(p) {
            p.skip_trivia();
            parse_postfix_type(p);
        } else {
            p.error("expected type after '&'".to_string());
            break;
        }
    }
    p.finish_node();
    false
}

/// PostfixType = PrimaryType PostfixMarker*
fn parse_postfix_type<P: BaseParser>(p: &mut P) -> bool {
    let checkpoint = p.checkpoint();
    let mut parenthesized = parse_primary_type(p);

    loop {
        if p.at(SyntaxKind::QUESTION) {
            p.start_node_at(checkpoint, SyntaxKind::OPTIONAL_TYPE);
            p.bump();
            p.finish_node();
        } else if p.at(SyntaxKind::BANG) {
            p.start_node_at(checkpoint, SyntaxKind::IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE);
            p.bump();
            p.finish_node();
        } else if p.at(SyntaxKind::DOT) && p.peek_kind(1) == SyntaxKind::IDENT {
            let member = p.peek_text(1);
            let kind = if member == "Type" || member == "Protocol" {
                SyntaxKind::METATYPE_TYPE
            } else {
                SyntaxKind::MEMBER_TYPE
            };
            p.start_node_at(checkpoint, kind);
            p.bump(); // .
            p.bump(); // name
            if kind == SyntaxKind::MEMBER_TYPE && p.at(SyntaxKind::L_ANGLE) {
                parse_generic_argument_clause(p);
            }
            p.finish_node();
        } else {
            break;
        }
        parenthesized = false;
    }
    parenthesized
}

/// PrimaryType = SimpleType | ArrayType | DictionaryType | TupleType
///
/// Returns true for a tuple (parenthesized) type.
fn parse_primary_type<P: BaseParser>(p: &mut P) -> bool {
    match p.current_kind() {
        SyntaxKind::IDENT => {
            p.start_node(SyntaxKind::SIMPLE_TYPE);
            p.bump();
            if p.at(SyntaxKind::L_ANGLE) {
                parse_generic_argument_clause(p);
            }
            p.finish_node();
            false
        }
        SyntaxKind::L_BRACKET => {
            parse_collection_type(p);
            false
        }
        SyntaxKind::L_PAREN => {
            parse_tuple_type(p);
            true
        }
        _ => {
            p.error(format!("expected type, found '{}'", p.peek_text(0)));
            false
        }
    }
}

/// ArrayType = '[' Type ']'
/// DictionaryType = '[' Type ':' Type ']'
fn parse_collection_type<P: BaseParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    p.bump(); // [
    parse_type(p);
    let kind = if eat_nt(p, SyntaxKind::COLON) {
        parse_type(p);
        SyntaxKind::DICTIONARY_TYPE
    } else {
        SyntaxKind::ARRAY_TYPE
    };
    p.start_node_at(checkpoint, kind);
    expect_nt(p, SyntaxKind::R_BRACKET);
    p.finish_node();
}

/// TupleType = '(' (TupleTypeElement (',' TupleTypeElement)*)? ')'
fn parse_tuple_type<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::TUPLE_TYPE);
    p.bump(); // (
    while !at_nt(p, SyntaxKind::R_PAREN) && !p.at_eof() {
        if !at_type_start(p) {
            error_recover(
                p,
                format!("expected tuple element, found '{}'", p.peek_text(0)),
                &[SyntaxKind::COMMA, SyntaxKind::R_PAREN],
            );
        } else {
            parse_tuple_type_element(p);
        }
        if !eat_nt(p, SyntaxKind::COMMA) {
            break;
        }
    }
    expect_nt(p, SyntaxKind::R_PAREN);
    p.finish_node();
}

/// TupleTypeElement = (Name Name? ':')? Type '...'?
fn parse_tuple_type_element<P: BaseParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::TUPLE_TYPE_ELEMENT);
    let labeled = p.peek_kind(0) == SyntaxKind::IDENT
        && (p.peek_kind(1) == SyntaxKind::COLON
            || (p.peek_kind(1) == SyntaxKind::IDENT && p.peek_kind(2) == SyntaxKind::COLON));
    if labeled {
        parse_name(p);
        if at_name(p) {
            parse_name(p);
        }
        expect_nt(p, SyntaxKind::COLON);
    }
    parse_type(p);
    eat_nt(p, SyntaxKind::ELLIPSIS);
    p.finish_node();
}

/// GenericArgumentClause = '<' GenericArgument (',' GenericArgument)* '>'
pub(crate) fn parse_generic_argument_clause<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::GENERIC_ARGUMENT_CLAUSE);
    p.bump(); // <
    loop {
        if !at_type_start(p) {
            p.error(format!("expected generic argument, found '{}'", p.peek_text(0)));
            break;
        }
        p.skip_trivia();
        p.start_node(SyntaxKind::GENERIC_ARGUMENT);
        parse_type(p);
        p.finish_node();
        if !eat_nt(p, SyntaxKind::COMMA) {
            break;
        }
    }
    expect_nt(p, SyntaxKind::R_ANGLE);
    p.finish_node();
}
