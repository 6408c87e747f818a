//! Declaration grammar
//!
//! Every declaration starts with optional attributes and modifiers. The node
//! kind is only known once the introducing keyword is reached, so the node is
//! opened retroactively at a checkpoint taken before the attributes. This keeps
//! attributes inside the declaration's range.

use super::clauses::{
    parse_accessor_block, parse_function_signature, parse_generic_parameter_clause,
    parse_generic_where_clause, parse_inheritance_clause, parse_initializer_clause,
    parse_member_block, parse_parameter_clause, parse_return_clause, parse_type_annotation,
    parse_type_initializer,
};
use super::statements::{ExprMode, ItemContext, parse_if_config};
use super::*;

/// Keywords accepted as the kind in `import struct Foo.Bar`
const IMPORT_KINDS: &[SyntaxKind] = &[
    SyntaxKind::STRUCT_KW,
    SyntaxKind::CLASS_KW,
    SyntaxKind::ENUM_KW,
    SyntaxKind::PROTOCOL_KW,
    SyntaxKind::TYPEALIAS_KW,
    SyntaxKind::FUNC_KW,
    SyntaxKind::VAR_KW,
    SyntaxKind::LET_KW,
];

/// Parse one declaration (including a `#if` block) in the given region.
pub fn parse_declaration<P: BaseParser>(p: &mut P, context: ItemContext) {
    if at_nt(p, SyntaxKind::POUND_IF) {
        parse_if_config(p, context);
        return;
    }

    p.skip_trivia();
    let start = p.get_pos();
    let checkpoint = p.checkpoint();
    parse_attribute_list(p);
    parse_modifier_list(p);

    let kind = match p.peek_kind(0) {
        SyntaxKind::STRUCT_KW => SyntaxKind::STRUCT_DECL,
        SyntaxKind::CLASS_KW => SyntaxKind::CLASS_DECL,
        SyntaxKind::ENUM_KW => SyntaxKind::ENUM_DECL,
        SyntaxKind::PROTOCOL_KW => SyntaxKind::PROTOCOL_DECL,
        SyntaxKind::EXTENSION_KW => SyntaxKind::EXTENSION_DECL,
        SyntaxKind::IDENT if p.peek_text(0) == "actor" => SyntaxKind::ACTOR_DECL,
        SyntaxKind::FUNC_KW => SyntaxKind::FUNCTION_DECL,
        SyntaxKind::VAR_KW | SyntaxKind::LET_KW => SyntaxKind::VARIABLE_DECL,
        SyntaxKind::INIT_KW => SyntaxKind::INITIALIZER_DECL,
        SyntaxKind::DEINIT_KW => SyntaxKind::DEINITIALIZER_DECL,
        SyntaxKind::SUBSCRIPT_KW => SyntaxKind::SUBSCRIPT_DECL,
        SyntaxKind::TYPEALIAS_KW => SyntaxKind::TYPEALIAS_DECL,
        SyntaxKind::ASSOCIATEDTYPE_KW => SyntaxKind::ASSOCIATED_TYPE_DECL,
        SyntaxKind::OPERATOR_KW => SyntaxKind::OPERATOR_DECL,
        SyntaxKind::PRECEDENCEGROUP_KW => SyntaxKind::PRECEDENCE_GROUP_DECL,
        SyntaxKind::IMPORT_KW => SyntaxKind::IMPORT_DECL,
        SyntaxKind::CASE_KW if context == ItemContext::EnumMembers => SyntaxKind::ENUM_CASE_DECL,
        _ => {
            p.start_node_at(checkpoint, SyntaxKind::ERROR);
            p.error(format!("expected declaration, found '{}'", p.peek_text(0)));
            if p.get_pos() == start {
                bump_nt(p);
            }
            p.finish_node();
            return;
        }
    };

    p.start_node_at(checkpoint, kind);
    bump_nt(p); // introducing keyword
    match kind {
        SyntaxKind::STRUCT_DECL
        | SyntaxKind::CLASS_DECL
        | SyntaxKind::ACTOR_DECL
        | SyntaxKind::PROTOCOL_DECL => parse_type_decl_rest(p, ItemContext::Members),
        SyntaxKind::ENUM_DECL => parse_type_decl_rest(p, ItemContext::EnumMembers),
        SyntaxKind::EXTENSION_DECL => parse_extension_rest(p),
        SyntaxKind::FUNCTION_DECL => parse_function_rest(p),
        SyntaxKind::VARIABLE_DECL => parse_variable_rest(p),
        SyntaxKind::INITIALIZER_DECL => parse_initializer_rest(p),
        SyntaxKind::DEINITIALIZER_DECL => {
            if at_nt(p, SyntaxKind::L_BRACE) {
                parse_code_block(p);
            }
        }
        SyntaxKind::SUBSCRIPT_DECL => parse_subscript_rest(p),
        SyntaxKind::TYPEALIAS_DECL => {
            parse_name(p);
            parse_generic_parameter_clause(p);
            parse_type_initializer(p);
            parse_generic_where_clause(p);
        }
        SyntaxKind::ASSOCIATED_TYPE_DECL => {
            parse_name(p);
            parse_inheritance_clause(p);
            parse_type_initializer(p);
            parse_generic_where_clause(p);
        }
        SyntaxKind::OPERATOR_DECL => parse_operator_rest(p),
        SyntaxKind::PRECEDENCE_GROUP_DECL => parse_precedence_group_rest(p),
        SyntaxKind::IMPORT_DECL => parse_import_rest(p),
        SyntaxKind::ENUM_CASE_DECL => parse_enum_case_rest(p),
        _ => {}
    }
    p.finish_node();
}

/// Name GenericParameterClause? InheritanceClause? WhereClause? MemberBlock
fn parse_type_decl_rest<P: BaseParser>(p: &mut P, body: ItemContext) {
    parse_name(p);
    // Protocols use the same clause for primary associated types
    parse_generic_parameter_clause(p);
    parse_inheritance_clause(p);
    parse_generic_where_clause(p);
    parse_member_block(p, body);
}

/// Type InheritanceClause? WhereClause? MemberBlock
fn parse_extension_rest<P: BaseParser>(p: &mut P) {
    parse_type(p);
    parse_inheritance_clause(p);
    parse_generic_where_clause(p);
    parse_member_block(p, ItemContext::Members);
}

/// Name GenericParameterClause? FunctionSignature WhereClause? CodeBlock?
fn parse_function_rest<P: BaseParser>(p: &mut P) {
    parse_identifier_or_operator_name(p);
    parse_generic_parameter_clause(p);
    parse_function_signature(p);
    parse_generic_where_clause(p);
    if at_nt(p, SyntaxKind::L_BRACE) {
        parse_code_block(p);
    }
}

/// PatternBinding (',' PatternBinding)*
///
/// PatternBinding = Pattern TypeAnnotation? InitializerClause? AccessorBlock?
fn parse_variable_rest<P: BaseParser>(p: &mut P) {
    loop {
        p.skip_trivia();
        p.start_node(SyntaxKind::PATTERN_BINDING);
        parse_pattern(p);
        parse_type_annotation(p);
        let initialized = at_nt(p, SyntaxKind::EQ);
        parse_initializer_clause(p, ExprMode::List);
        // After an initializer only observers (`didSet`) may follow
        let observers = p.peek_kind(1) == SyntaxKind::IDENT
            && matches!(p.peek_text(1), "willSet" | "didSet");
        if at_nt(p, SyntaxKind::L_BRACE) && (!initialized || observers) {
            parse_accessor_block(p);
        }
        p.finish_node();
        if !eat_nt(p, SyntaxKind::COMMA) {
            break;
        }
    }
}

/// Pattern = Name | '(' ... ')'
fn parse_pattern<P: BaseParser>(p: &mut P) {
    match p.peek_kind(0) {
        SyntaxKind::IDENT => {
            p.skip_trivia();
            p.start_node(SyntaxKind::PATTERN);
            parse_name(p);
            p.finish_node();
        }
        SyntaxKind::L_PAREN => {
            p.skip_trivia();
            p.start_node(SyntaxKind::PATTERN);
            bump_balanced(p);
            p.finish_node();
        }
        _ => p.error(format!("expected pattern, found '{}'", p.peek_text(0))),
    }
}

/// ('?' | '!')? GenericParameterClause? FunctionSignature WhereClause? CodeBlock?
fn parse_initializer_rest<P: BaseParser>(p: &mut P) {
    if p.at(SyntaxKind::QUESTION) || p.at(SyntaxKind::BANG) {
        p.bump();
    }
    parse_generic_parameter_clause(p);
    parse_function_signature(p);
    parse_generic_where_clause(p);
    if at_nt(p, SyntaxKind::L_BRACE) {
        parse_code_block(p);
    }
}

/// GenericParameterClause? ParameterClause ReturnClause WhereClause? AccessorBlock?
fn parse_subscript_rest<P: BaseParser>(p: &mut P) {
    parse_generic_parameter_clause(p);
    parse_parameter_clause(p);
    if at_nt(p, SyntaxKind::ARROW) {
        parse_return_clause(p);
    } else {
        p.error("expected '->' in subscript".to_string());
    }
    parse_generic_where_clause(p);
    parse_accessor_block(p);
}

/// OperatorName (':' Name (',' Name)*)?
fn parse_operator_rest<P: BaseParser>(p: &mut P) {
    parse_identifier_or_operator_name(p);
    if at_nt(p, SyntaxKind::COLON) {
        p.skip_trivia();
        p.start_node(SyntaxKind::OPERATOR_PRECEDENCE);
        p.bump(); // :
        loop {
            parse_name(p);
            if !eat_nt(p, SyntaxKind::COMMA) {
                break;
            }
        }
        p.finish_node();
    }
    // Legacy `{ associativity: left }` bodies
    if at_nt(p, SyntaxKind::L_BRACE) {
        p.skip_trivia();
        bump_balanced(p);
    }
}

/// Name '{' PrecedenceGroupAttribute* '}'
///
/// PrecedenceGroupAttribute = Name ':' Name (',' Name)*
fn parse_precedence_group_rest<P: BaseParser>(p: &mut P) {
    parse_name(p);
    if !expect_nt(p, SyntaxKind::L_BRACE) {
        return;
    }
    while at_name(p) {
        p.skip_trivia();
        p.start_node(SyntaxKind::PRECEDENCE_GROUP_ATTRIBUTE);
        parse_name(p);
        expect_nt(p, SyntaxKind::COLON);
        while at_name(p) && p.peek_kind(1) != SyntaxKind::COLON {
            parse_name(p);
            eat_nt(p, SyntaxKind::COMMA);
        }
        p.finish_node();
    }
    expect_nt(p, SyntaxKind::R_BRACE);
}

/// ImportKind? ImportPath
///
/// ImportPath = Name ('.' Name)*
fn parse_import_rest<P: BaseParser>(p: &mut P) {
    if IMPORT_KINDS.contains(&p.peek_kind(0)) {
        bump_nt(p);
    }
    if !at_name(p) {
        p.error(format!("expected module name, found '{}'", p.peek_text(0)));
        return;
    }
    p.skip_trivia();
    p.start_node(SyntaxKind::IMPORT_PATH);
    p.start_node(SyntaxKind::NAME);
    p.bump();
    p.finish_node();
    while p.at(SyntaxKind::DOT) {
        p.bump();
        if p.current_kind() == SyntaxKind::IDENT || p.current_kind().is_operator_part() {
            p.start_node(SyntaxKind::NAME);
            p.bump();
            p.finish_node();
        } else {
            p.error("expected name after '.'".to_string());
            break;
        }
    }
    p.finish_node();
}

/// EnumCaseElement (',' EnumCaseElement)*
///
/// EnumCaseElement = Name ParameterClause? ('=' Expr)?
fn parse_enum_case_rest<P: BaseParser>(p: &mut P) {
    loop {
        if !at_name(p) {
            p.error(format!("expected case name, found '{}'", p.peek_text(0)));
            break;
        }
        p.skip_trivia();
        p.start_node(SyntaxKind::ENUM_CASE_ELEMENT);
        parse_name(p);
        if at_nt(p, SyntaxKind::L_PAREN) {
            parse_parameter_clause(p);
        }
        parse_initializer_clause(p, ExprMode::List);
        p.finish_node();
        if !eat_nt(p, SyntaxKind::COMMA) {
            break;
        }
    }
}
