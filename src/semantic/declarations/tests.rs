use rstest::rstest;

use super::*;
use crate::semantic::{Relation, SourceTree, Throwing};

fn collected(source: &str) -> SourceTree {
    let mut tree = SourceTree::new(source);
    tree.collect_children();
    assert!(tree.syntax_errors().is_empty(), "errors: {:?}", tree.syntax_errors());
    tree
}

#[rstest]
#[case("struct A {}", DeclarationKind::Structure, "A")]
#[case("class A {}", DeclarationKind::Class, "A")]
#[case("actor A {}", DeclarationKind::Actor, "A")]
#[case("enum A {}", DeclarationKind::Enumeration, "A")]
#[case("protocol A {}", DeclarationKind::Protocol, "A")]
#[case("extension Swift.Array {}", DeclarationKind::Extension, "Swift.Array")]
#[case("func a() {}", DeclarationKind::Function, "a")]
#[case("let a = 1", DeclarationKind::Variable, "a")]
#[case("typealias A = Int", DeclarationKind::Typealias, "A")]
#[case("prefix operator +++", DeclarationKind::Operator, "+++")]
#[case("precedencegroup A {}", DeclarationKind::PrecedenceGroup, "A")]
#[case("import Foundation.Date", DeclarationKind::Import, "Foundation.Date")]
fn test_top_level_kind_and_name(
    #[case] source: &str,
    #[case] kind: DeclarationKind,
    #[case] name: &str,
) {
    let tree = collected(source);
    let declaration = tree.collection().get(0).unwrap();
    assert_eq!(declaration.kind(), kind);
    assert_eq!(declaration.name(), name);
    assert_eq!(declaration.description(), source);
}

#[rstest]
#[case("init() {}", "init")]
#[case("deinit {}", "deinit")]
#[case("subscript(i: Int) -> Int { i }", "subscript")]
fn test_member_only_names(#[case] member: &str, #[case] name: &str) {
    let tree = collected(&format!("class C {{\n    {member}\n}}"));
    let class = tree.classes().next().unwrap();
    let declaration = class.members().get(0).unwrap();
    assert_eq!(declaration.name(), name);
    assert_eq!(declaration.description(), member);
}

#[test]
fn test_kind_keywords() {
    assert_eq!(DeclarationKind::ALL.len(), 18);
    assert_eq!(DeclarationKind::PrecedenceGroup.keyword(), "precedencegroup");
    assert!(DeclarationKind::Extension.is_container());
    assert!(!DeclarationKind::Function.is_container());
}

#[test]
fn test_container_generics_and_inheritance() {
    let tree = collected("public final class Box<T: Equatable>: Base, Codable where T: Sendable {}");
    let class = tree.classes().next().unwrap();
    assert!(class.has_modifier("public"));
    assert!(class.has_modifier("final"));
    assert_eq!(class.generic_parameters()[0].name, "T");
    assert_eq!(class.generic_requirements()[0].relation, Relation::Conformance);
    assert_eq!(class.inheritance(), vec!["Base", "Codable"]);
}

#[test]
fn test_enumeration_cases() {
    let tree = collected("indirect enum E: Int {\n    case a = 1, b\n    case c(Int, label: String)\n}");
    let enumeration = tree.enumerations().next().unwrap();
    let cases: Vec<_> = enumeration.cases().collect();
    assert_eq!(cases.len(), 3);
    assert_eq!(cases[0].name(), "a");
    assert_eq!(cases[0].raw_value().as_deref(), Some("1"));
    assert_eq!(cases[0].description(), "a = 1");
    assert_eq!(cases[1].description(), "b");
    assert_eq!(cases[2].description(), "case c(Int, label: String)");

    let values = cases[2].associated_values();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].ty.description(), "Int");
    assert_eq!(values[1].first_name.as_deref(), Some("label"));
}

#[test]
fn test_indirect_case() {
    let tree = collected("enum Tree {\n    indirect case node(Tree)\n}");
    let case = tree.enumerations().next().unwrap().cases().next().unwrap();
    assert!(case.is_indirect());
    assert_eq!(case.description(), "indirect case node(Tree)");
}

#[test]
fn test_protocol_requirements() {
    let source = "protocol Store<Item>: AnyObject {\n    associatedtype Item: Hashable = String\n    var count: Int { get }\n    func insert(_ item: Item) throws\n}";
    let tree = collected(source);
    let protocol = tree.protocols().next().unwrap();
    assert_eq!(protocol.primary_associated_types(), vec!["Item"]);
    assert_eq!(protocol.inheritance(), vec!["AnyObject"]);

    let associated = protocol.members().associated_types().next().unwrap();
    assert_eq!(associated.name(), "Item");
    assert_eq!(associated.inheritance(), vec!["Hashable"]);
    assert_eq!(associated.default_type().description(), "String");

    let count = protocol.members().variables().next().unwrap();
    assert!(!count.has_setter());
    assert!(count.is_computed());

    let insert = protocol.members().functions().next().unwrap();
    assert!(!insert.has_body());
    assert_eq!(insert.signature().throwing, Throwing::Throws);
}

#[test]
fn test_extension() {
    let tree = collected("extension Array: Identifiable where Element: Identifiable {}");
    let extension = tree.extensions().next().unwrap();
    assert_eq!(extension.extended_type(), EntityType::Simple("Array".to_string()));
    assert_eq!(extension.inheritance(), vec!["Identifiable"]);
    assert_eq!(extension.generic_requirements()[0].left, "Element");
}

#[rstest]
#[case("func f() {}", false)]
#[case("static func == (a: A, b: A) -> Bool { true }", true)]
#[case("func _private() {}", false)]
#[case("prefix func -(x: V) -> V { x }", true)]
fn test_function_is_operator(#[case] member: &str, #[case] expected: bool) {
    let tree = collected(&format!("struct A {{\n    {member}\n}}"));
    let function = tree.structures().next().unwrap().members().functions().next().unwrap();
    assert_eq!(function.is_operator(), expected);
}

#[test]
fn test_function_signature_and_generics() {
    let tree = collected("static func map<T>(_ f: (Int) -> T) async -> [T] where T: Sendable {}");
    let function = tree.functions().next().unwrap();
    assert!(function.is_static());
    assert!(function.has_body());
    assert_eq!(function.generic_parameters()[0].name, "T");
    assert_eq!(function.generic_requirements().len(), 1);

    let signature = function.signature();
    assert!(signature.is_async);
    assert_eq!(signature.output.description(), "[T]");
    assert!(matches!(signature.parameters[0].ty, EntityType::Closure(_)));
}

#[test]
fn test_initializer() {
    let tree = collected("struct A {\n    convenience init?<T>(value: T) throws {}\n    init!() {}\n}");
    let members = tree.structures().next().unwrap().members();
    let initializers: Vec<_> = members.initializers().collect();
    assert!(initializers[0].is_optional());
    assert!(initializers[0].is_convenience());
    assert!(!initializers[0].is_implicitly_unwrapped());
    assert_eq!(initializers[0].parameters()[0].first_name.as_deref(), Some("value"));
    assert_eq!(initializers[0].signature().output, EntityType::Empty);
    assert_eq!(initializers[0].generic_parameters().len(), 1);
    assert!(initializers[1].is_implicitly_unwrapped());
}

#[test]
fn test_subscript() {
    let tree = collected("struct A {\n    subscript<K>(key: K) -> Int? where K: Hashable {\n        get { nil }\n        set {}\n    }\n}");
    let subscript = tree.structures().next().unwrap().members().subscripts().next().unwrap();
    assert_eq!(subscript.parameters().len(), 1);
    assert_eq!(subscript.return_type().description(), "Int?");
    assert!(subscript.has_setter());
    assert_eq!(subscript.accessors().len(), 2);
    assert_eq!(subscript.generic_parameters()[0].name, "K");
    assert_eq!(subscript.generic_requirements()[0].right, "Hashable");
}

#[test]
fn test_variable_properties() {
    let tree = collected("lazy var cache: [String: Int]? = [:]");
    let variable = tree.variables().next().unwrap();
    assert_eq!(variable.keyword(), "var");
    assert!(!variable.is_let());
    assert!(variable.is_optional());
    assert!(variable.has_modifier("lazy"));
    assert_eq!(variable.initialized_value().as_deref(), Some("[:]"));
    assert!(!variable.is_computed());
    assert!(variable.has_setter());
}

#[rstest]
#[case("let x = 1", false, false)]
#[case("var x = 1", true, false)]
#[case("var x: Int { 1 }", false, true)]
#[case("var x: Int {\n    get { 1 }\n    set {}\n}", true, true)]
#[case("var x = 1 {\n    didSet {}\n}", true, false)]
fn test_variable_setter(#[case] source: &str, #[case] has_setter: bool, #[case] computed: bool) {
    let tree = collected(source);
    let variable = tree.variables().next().unwrap();
    assert_eq!(variable.has_setter(), has_setter);
    assert_eq!(variable.is_computed(), computed);
}

#[test]
fn test_multi_binding_variables() {
    let tree = collected("@MainActor private var a = 1, b: Int");
    let variables: Vec<_> = tree.variables().collect();
    assert_eq!(variables.len(), 2);
    assert_eq!(variables[0].name(), "a");
    assert_eq!(variables[0].description(), "a = 1");
    assert_eq!(variables[1].name(), "b");
    assert_eq!(variables[1].ty().description(), "Int");
    assert_eq!(variables[1].ty(), EntityType::Simple("Int".to_string()));

    // the shared prefix applies to every binding
    assert_eq!(variables[1].attributes()[0].name, "MainActor");
    assert!(variables[1].has_modifier("private"));
}

#[test]
fn test_destructuring_variable_uses_pattern_text() {
    let tree = collected("let (a, b) = pair");
    let variable = tree.variables().next().unwrap();
    assert_eq!(variable.name(), "(a, b)");
    assert_eq!(variable.ty(), EntityType::Empty);
}

#[test]
fn test_typealias() {
    let tree = collected("typealias Handler<T> = (Result<T, Error>) -> Void");
    let alias = tree.typealiases().next().unwrap();
    assert_eq!(alias.generic_parameters()[0].name, "T");
    let EntityType::Closure(closure) = alias.initialized_type() else {
        panic!("expected closure");
    };
    assert!(matches!(*closure.input, EntityType::Result { .. }));
}

#[test]
fn test_operator_and_precedence_group() {
    let source = "infix operator <*>: ApplicativePrecedence\nprecedencegroup ApplicativePrecedence {\n    associativity: left\n    higherThan: AdditionPrecedence, TernaryPrecedence\n    lowerThan: MultiplicationPrecedence\n    assignment: true\n}";
    let tree = collected(source);

    let operator = tree.operators().next().unwrap();
    assert_eq!(operator.fixity(), Some(Fixity::Infix));
    assert_eq!(operator.precedence_group().as_deref(), Some("ApplicativePrecedence"));

    let group = tree.precedence_groups().next().unwrap();
    assert_eq!(group.associativity(), Associativity::Left);
    assert!(group.assignment());
    assert_eq!(group.higher_than(), vec!["AdditionPrecedence", "TernaryPrecedence"]);
    assert_eq!(group.lower_than(), vec!["MultiplicationPrecedence"]);
}

#[test]
fn test_import() {
    let tree = collected("@testable import struct Foundation.Date");
    let import = tree.imports().next().unwrap();
    assert_eq!(import.path(), vec!["Foundation", "Date"]);
    assert_eq!(import.import_kind().as_deref(), Some("struct"));
    assert_eq!(import.attributes()[0].name, "testable");
}

#[test]
fn test_conditional_compilation_branches() {
    let source = "#if os(iOS)\nfunc a() {}\n#elseif DEBUG\nfunc b() {}\n#else\nstruct C {}\n#endif";
    let tree = collected(source);
    let block = tree.conditional_compilation_blocks().next().unwrap();
    let branches = block.branches();
    assert_eq!(branches.len(), 3);
    assert_eq!(branches[0].keyword, BranchKeyword::If);
    assert_eq!(branches[0].condition.as_deref(), Some("os(iOS)"));
    assert_eq!(branches[1].keyword, BranchKeyword::ElseIf);
    assert_eq!(branches[2].keyword, BranchKeyword::Else);
    assert!(branches[2].condition.is_none());
    assert_eq!(branches[2].declarations.structures().count(), 1);
    assert_eq!(block.nested().len(), 3);
    assert_eq!(tree.collection().get(0).unwrap().name(), "");
}

#[test]
fn test_declaration_members() {
    let tree = collected("struct A {\n    var x = 1\n}\nfunc f() {}");
    let declarations: Vec<_> = tree.collection().iter().collect();
    assert_eq!(declarations[0].members().map(|m| m.len()), Some(1));
    assert!(declarations[1].members().is_none());
}

#[test]
fn test_equality_is_structural() {
    let source = "struct A {\n    func f() {}\n}";
    let first = collected(source);
    let second = collected(source);
    assert_eq!(first.collection().get(0), second.collection().get(0));

    let shifted = collected(&format!("\n{source}"));
    assert_ne!(first.collection().get(0), shifted.collection().get(0));
}
