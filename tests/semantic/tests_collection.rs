//! Declaration collection ordering and nesting

use sparrow::semantic::{DeclarationKind, DeclarationNode, EntityType, Named};

use crate::helpers::declaration_assertions::{assert_recursive_names, collected_tree, names_of};
use crate::helpers::source_fixtures::{NESTED_TYPES, SIBLING_TYPES, TWO_BRANCH_IF, VIEW_MODEL};

#[test]
fn test_nested_types_in_source_order() {
    let tree = collected_tree(NESTED_TYPES);
    let outer = tree.structures().next().unwrap();
    let members: Vec<_> = outer.members().iter().map(|d| (d.kind(), d.name())).collect();
    assert_eq!(
        members,
        vec![
            (DeclarationKind::Structure, "Inner".to_string()),
            (DeclarationKind::Class, "Helper".to_string()),
            (DeclarationKind::Typealias, "Name".to_string()),
        ]
    );

    let inner = outer.members().structures().next().unwrap();
    assert_eq!(inner.members().enumerations().next().unwrap().name(), "Mode");
    assert_eq!(inner.members().typealiases().next().unwrap().name(), "ID");
}

#[test]
fn test_recursively_collect_pre_order() {
    let tree = collected_tree(NESTED_TYPES);
    assert_recursive_names(
        &tree,
        &[
            DeclarationKind::Structure,
            DeclarationKind::Class,
            DeclarationKind::Enumeration,
            DeclarationKind::Typealias,
        ],
        &["Outer", "Inner", "Mode", "ID", "Helper", "Name", "Trailing"],
    );
    assert_recursive_names(&tree, &[DeclarationKind::EnumCase], &["on", "off"]);
}

#[test]
fn test_sibling_types_each_land_in_their_category() {
    let tree = collected_tree(SIBLING_TYPES);
    let members = tree.structures().next().unwrap().members();
    let kinds: Vec<_> = members.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            DeclarationKind::Structure,
            DeclarationKind::Class,
            DeclarationKind::Enumeration,
            DeclarationKind::Typealias,
        ]
    );
    assert_eq!(members.structures().count(), 1);
    assert_eq!(members.classes().count(), 1);
    assert_eq!(members.enumerations().count(), 1);
    assert_eq!(members.typealiases().count(), 1);

    assert_recursive_names(
        &tree,
        &[
            DeclarationKind::Structure,
            DeclarationKind::Class,
            DeclarationKind::Enumeration,
            DeclarationKind::Typealias,
        ],
        &["Container", "A", "B", "C", "D"],
    );
    assert_recursive_names(
        &tree,
        &[DeclarationKind::Typealias, DeclarationKind::Class],
        &["B", "D"],
    );
}

#[test]
fn test_two_branch_if() {
    let tree = collected_tree(TWO_BRANCH_IF);
    let block = tree.conditional_compilation_blocks().next().unwrap();
    assert_eq!(block.branches().len(), 2);

    let first: Vec<_> = block.branches()[0].declarations.functions().collect();
    let second: Vec<_> = block.branches()[1].declarations.functions().collect();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].signature().parameters.len(), 1);
    assert_eq!(second[0].signature().parameters.len(), 2);

    let functions = tree.recursively_collect(&[DeclarationKind::Function]);
    assert_eq!(names_of(&functions), vec!["log", "log"]);
    assert!(functions[0].range().end() <= functions[1].range().start());
}

#[test]
fn test_view_model_members() {
    let tree = collected_tree(VIEW_MODEL);
    assert_eq!(tree.imports().count(), 2);

    let class = tree.classes().next().unwrap();
    assert_eq!(class.inheritance(), vec!["ObservableObject"]);
    assert_eq!(class.attributes()[0].name, "MainActor");

    let variables: Vec<_> = class.members().variables().collect();
    assert_eq!(variables.len(), 3);
    assert!(variables[0].has_modifier("private"));
    assert!(matches!(variables[0].ty(), EntityType::Array { .. }));
    let EntityType::Closure(on_select) = variables[1].ty() else {
        panic!("expected closure");
    };
    assert!(on_select.is_escaping);
    let EntityType::Closure(loader) = variables[2].ty() else {
        panic!("expected closure");
    };
    assert!(loader.is_async && loader.is_throwing && !loader.is_escaping);

    let reload = class.members().functions().next().unwrap();
    assert!(reload.signature().is_async);
    let locals: Vec<_> = reload.locals().iter().map(|d| d.name()).collect();
    assert_eq!(locals, vec!["data", "Payload"]);

    let init = class.members().initializers().next().unwrap();
    let EntityType::Closure(parameter) = &init.parameters()[0].ty else {
        panic!("expected closure parameter");
    };
    assert!(parameter.is_escaping);
    assert_eq!(class.members().deinitializers().count(), 1);

    let extension = tree.extensions().next().unwrap();
    let subscript = extension.members().subscripts().next().unwrap();
    assert_eq!(subscript.return_type().description(), "Item?");
    assert!(!subscript.has_setter());
}

#[test]
fn test_every_declaration_reachable_once() {
    let tree = collected_tree(VIEW_MODEL);
    let all = tree.recursively_collect(&DeclarationKind::ALL);
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert!(
                a.kind() != b.kind() || a.range() != b.range(),
                "{:?} collected twice",
                a.name()
            );
        }
    }
}

#[test]
fn test_identical_sources_build_equal_collections() {
    let first = collected_tree(VIEW_MODEL);
    let second = collected_tree(VIEW_MODEL);
    assert_eq!(first.collection(), second.collection());
    assert_eq!(
        first.recursively_collect(&DeclarationKind::ALL),
        second.recursively_collect(&DeclarationKind::ALL)
    );
}
