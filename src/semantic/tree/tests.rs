use super::*;
use crate::base::Position;
use crate::semantic::Named;

#[test]
fn test_new_tree_is_stale_and_empty() {
    let tree = SourceTree::new("struct A {}");
    assert!(tree.is_stale());
    assert!(tree.collection().is_empty());
    assert!(tree.syntax().is_none());
    assert_eq!(tree.source(), "struct A {}");
}

#[test]
fn test_collect_children_marks_fresh() {
    let mut tree = SourceTree::new("struct A {}\nfunc f() {}");
    tree.collect_children();
    assert!(!tree.is_stale());
    assert_eq!(tree.collection().len(), 2);
    assert_eq!(tree.structures().count(), 1);
    assert_eq!(tree.functions().next().unwrap().name(), "f");
    assert!(tree.syntax_errors().is_empty());
}

#[test]
fn test_stale_reads_return_previous_collection() {
    let mut tree = SourceTree::new("struct A {}");
    tree.collect_children();

    tree.update_to_source("class B {}\nclass C {}");
    assert!(tree.is_stale());
    assert_eq!(tree.source(), "class B {}\nclass C {}");
    assert_eq!(tree.structures().next().unwrap().name(), "A");
    assert_eq!(tree.classes().count(), 0);

    tree.collect_children();
    assert!(!tree.is_stale());
    assert_eq!(tree.structures().count(), 0);
    let names: Vec<_> = tree.classes().map(|c| c.name()).collect();
    assert_eq!(names, vec!["B", "C"]);
}

#[test]
fn test_recollecting_same_source_is_equal() {
    let source = "struct A {\n    var x: Int\n    func f() { let y = 1 }\n}";
    let mut first = SourceTree::new(source);
    first.collect_children();
    let mut second = SourceTree::new(source);
    second.collect_children();
    assert_eq!(first.collection(), second.collection());
}

#[test]
fn test_options_disable_locals() {
    let source = "func f() {\n    struct Local {}\n}";
    let mut tree = SourceTree::with_options(
        source,
        CollectOptions {
            collect_local_declarations: false,
        },
    );
    tree.collect_children();
    assert!(!tree.options().collect_local_declarations);
    assert!(tree.functions().next().unwrap().locals().is_empty());
    assert!(tree.recursively_collect(&[DeclarationKind::Structure]).is_empty());
}

#[test]
fn test_syntax_errors_are_reported_not_raised() {
    let mut tree = SourceTree::new("struct A {\nfunc f() {}");
    tree.collect_children();
    assert!(!tree.syntax_errors().is_empty());
    assert_eq!(tree.structures().count(), 1);
}

#[test]
fn test_location_uses_collected_buffer() {
    let mut tree = SourceTree::new("\n@objc\nfunc f() {}");
    tree.collect_children();
    tree.update_to_source("");

    let function = tree.functions().next().unwrap();
    let location = tree.source_location(function).unwrap();
    assert_eq!(location.start, Position::new(1, 0, 1));
    assert_eq!(location.end, Position::new(2, 11, 18));
    assert_eq!(tree.extract(function).unwrap(), "@objc\nfunc f() {}");
}

#[test]
fn test_foreign_declaration_is_rejected() {
    let mut first = SourceTree::new("func f() {}");
    first.collect_children();
    let mut second = SourceTree::new("func f() {}");
    second.collect_children();

    let foreign = first.functions().next().unwrap();
    assert_eq!(
        second.extract(foreign),
        Err(SemanticError::ForeignDeclaration)
    );
    assert!(second.source_location(foreign).is_err());
}

#[test]
fn test_declarations_from_before_recollection_are_foreign() {
    let mut tree = SourceTree::new("func f() {}");
    tree.collect_children();
    let old = tree.functions().next().unwrap().clone();

    tree.collect_children();
    assert_eq!(tree.extract(&old), Err(SemanticError::ForeignDeclaration));
    let fresh = tree.functions().next().unwrap();
    assert_eq!(tree.extract(fresh).unwrap(), "func f() {}");
}

#[test]
fn test_nested_declaration_belongs_to_tree() {
    let mut tree = SourceTree::new("struct A {\n    struct B {}\n}");
    tree.collect_children();
    let inner = tree.recursively_collect(&[DeclarationKind::Structure])[1];
    assert_eq!(tree.extract(inner).unwrap(), "struct B {}");
    let location = tree.source_location(inner).unwrap();
    assert_eq!(location.start, Position::new(1, 4, 15));
}
