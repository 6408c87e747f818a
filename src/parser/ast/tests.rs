use super::*;
use crate::parser::{parse, parse_type_text};

fn first_item<N: AstNode>(source: &str) -> N {
    let parsed = parse(source);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    let root = SourceFile::cast(parsed.syntax()).unwrap();
    root.items().find_map(N::cast).unwrap()
}

fn type_of(text: &str) -> Type {
    let parsed = parse_type_text(text);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    TypeRoot::cast(parsed.syntax()).unwrap().ty().unwrap()
}

#[test]
fn test_ast_struct_roles() {
    let decl: StructDecl = first_item(
        "@frozen public struct Box<T: Equatable>: Hashable where T: Sendable {\n    var value: T\n}",
    );

    let attrs: Vec<_> = decl.attribute_list().unwrap().attributes().collect();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].name(), "frozen");

    let modifiers: Vec<_> = decl.modifier_list().unwrap().modifiers().collect();
    assert_eq!(modifiers[0].name(), "public");

    assert_eq!(decl.name().unwrap().text(), "Box");

    let generics: Vec<_> = decl.generic_parameter_clause().unwrap().parameters().collect();
    assert_eq!(generics.len(), 1);
    assert_eq!(generics[0].name().unwrap().text(), "T");
    assert_eq!(generics[0].ty().unwrap().text(), "Equatable");

    let inherited: Vec<_> = decl.inheritance_clause().unwrap().inherited_types().collect();
    assert_eq!(inherited[0].text(), "Hashable");

    let requirement = decl
        .generic_where_clause()
        .unwrap()
        .requirements()
        .next()
        .unwrap();
    assert_eq!(requirement.left().unwrap().text(), "T");
    assert_eq!(requirement.right().unwrap().text(), "Sendable");
    assert!(!requirement.is_same_type());

    assert_eq!(decl.member_block().unwrap().items().count(), 1);
}

#[test]
fn test_ast_decl_text_includes_attributes_not_comments() {
    let decl: FunctionDecl = first_item("// comment\n@discardableResult\nfunc f() -> Int { 1 }\n");
    assert_eq!(decl.text(), "@discardableResult\nfunc f() -> Int { 1 }");
}

#[test]
fn test_ast_function_signature() {
    let decl: FunctionDecl =
        first_item("func load(from url: URL, _ retries: Int = 3, values: Int...) async throws -> Data {}");
    let signature = decl.signature().unwrap();
    let params: Vec<_> = signature.parameter_clause().unwrap().parameters().collect();
    assert_eq!(params.len(), 3);

    assert_eq!(params[0].first_name().unwrap().text(), "from");
    assert_eq!(params[0].second_name().unwrap().text(), "url");
    assert_eq!(params[0].ty().unwrap().text(), "URL");

    assert_eq!(params[1].first_name().unwrap().text(), "_");
    assert_eq!(params[1].default_value().unwrap().value().unwrap().text(), "3");

    assert!(params[2].is_variadic());

    let effects = signature.effects().unwrap();
    assert!(effects.is_async());
    assert!(effects.is_throwing());
    assert_eq!(signature.return_clause().unwrap().ty().unwrap().text(), "Data");
}

#[test]
fn test_ast_variable_bindings() {
    let decl: VariableDecl = first_item("private(set) var a = 1, b: [String: Int]");
    assert!(!decl.is_let());
    let modifier = decl.modifier_list().unwrap().modifiers().next().unwrap();
    assert_eq!(modifier.detail().unwrap().inner(), "set");

    let bindings: Vec<_> = decl.bindings().collect();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].pattern().unwrap().name().unwrap().text(), "a");
    assert_eq!(bindings[0].initializer().unwrap().value().unwrap().text(), "1");
    assert_eq!(bindings[1].text(), "b: [String: Int]");
    assert!(matches!(
        bindings[1].type_annotation().unwrap().ty(),
        Some(Type::Dictionary(_))
    ));
}

#[test]
fn test_ast_accessors() {
    let decl: VariableDecl = first_item("var x: Int {\n    get async throws { 1 }\n    set(newX) {}\n}");
    let block = decl.bindings().next().unwrap().accessor_block().unwrap();
    assert!(block.implicit_getter().is_none());

    let accessors: Vec<_> = block.accessors().collect();
    assert_eq!(accessors.len(), 2);
    assert_eq!(accessors[0].name().unwrap().text(), "get");
    assert!(accessors[0].effects().unwrap().is_async());
    assert_eq!(
        accessors[1].parameter().unwrap().name().unwrap().text(),
        "newX"
    );
}

#[test]
fn test_ast_enum_cases() {
    let decl: EnumDecl = first_item("enum E: Int {\n    case a = 1, b\n    case c(Int, label: String)\n}");
    let cases: Vec<_> = decl
        .member_block()
        .unwrap()
        .items()
        .filter_map(EnumCaseDecl::cast)
        .collect();
    assert_eq!(cases.len(), 2);

    let first: Vec<_> = cases[0].elements().collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].raw_value().unwrap().value().unwrap().text(), "1");
    assert_eq!(first[1].text(), "b");

    let associated = cases[1].elements().next().unwrap().parameter_clause().unwrap();
    let params: Vec<_> = associated.parameters().collect();
    assert!(params[0].first_name().is_none());
    assert_eq!(params[1].first_name().unwrap().text(), "label");
}

#[test]
fn test_ast_import_kind_and_path() {
    let decl: ImportDecl = first_item("@testable import struct Foundation.Date");
    assert_eq!(decl.kind_token().unwrap().kind(), SyntaxKind::STRUCT_KW);
    let components: Vec<_> = decl
        .path()
        .unwrap()
        .components()
        .map(|n| n.text())
        .collect();
    assert_eq!(components, vec!["Foundation", "Date"]);
}

#[test]
fn test_ast_if_config_clauses() {
    let decl: IfConfigDecl = first_item("#if DEBUG\nlet a = 1\n#else\nlet b = 2\n#endif");
    let clauses: Vec<_> = decl.clauses().collect();
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0].keyword(), Some(SyntaxKind::POUND_IF));
    assert_eq!(clauses[0].condition().unwrap().text(), "DEBUG");
    assert_eq!(clauses[1].keyword(), Some(SyntaxKind::POUND_ELSE));
    assert!(clauses[1].condition().is_none());
    assert_eq!(clauses[1].items().count(), 1);
}

#[test]
fn test_ast_type_shapes() {
    assert!(matches!(type_of("Int"), Type::Simple(_)));
    assert!(matches!(type_of("Swift.Int"), Type::Member(_)));
    assert!(matches!(type_of("[Int]"), Type::Array(_)));
    assert!(matches!(type_of("(a: Int, b: String)"), Type::Tuple(_)));
    assert!(matches!(type_of("(Int) async throws -> Void"), Type::Function(_)));
    assert!(matches!(type_of("Int!"), Type::ImplicitlyUnwrapped(_)));
    assert!(matches!(type_of("@escaping () -> Void"), Type::Attributed(_)));
    assert!(matches!(type_of("some View"), Type::SomeOrAny(_)));
    assert!(matches!(type_of("A & B"), Type::Composition(_)));
    assert!(matches!(type_of("Int.Type"), Type::Metatype(_)));
}

#[test]
fn test_ast_optional_chain_nests() {
    let Type::Optional(outer) = type_of("Int??") else {
        panic!("expected optional");
    };
    assert!(matches!(outer.wrapped(), Some(Type::Optional(_))));
}

#[test]
fn test_ast_nested_generic_arguments() {
    let Type::Simple(simple) = type_of("Dictionary<String, Array<Int>>") else {
        panic!("expected simple type");
    };
    assert_eq!(simple.name(), "Dictionary");
    let args: Vec<_> = simple
        .generic_argument_clause()
        .unwrap()
        .arguments()
        .filter_map(|a| a.ty())
        .map(|t| t.text())
        .collect();
    assert_eq!(args, vec!["String", "Array<Int>"]);
}
