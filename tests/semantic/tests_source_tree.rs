//! Source tree staleness

use sparrow::semantic::{DeclarationKind, Named, SourceTree};

#[test]
fn test_staleness_transitions() {
    let mut tree = SourceTree::new("struct A {}");
    assert!(tree.is_stale());
    assert!(tree.collection().is_empty());

    tree.collect_children();
    assert!(!tree.is_stale());
    assert_eq!(tree.structures().next().unwrap().name(), "A");

    tree.update_to_source("struct A {}\nstruct B {}");
    assert!(tree.is_stale());
    assert_eq!(tree.structures().count(), 1);

    tree.collect_children();
    assert!(!tree.is_stale());
    assert_eq!(tree.structures().count(), 2);
}

#[test]
fn test_collect_twice_is_idempotent() {
    let mut tree = SourceTree::new("class C {\n    func f() {}\n}");
    tree.collect_children();
    let before = tree.collection().clone();
    tree.collect_children();
    assert!(!tree.is_stale());
    assert_eq!(tree.collection(), &before);
}

#[test]
fn test_update_to_empty_source() {
    let mut tree = SourceTree::new("func f() {}");
    tree.collect_children();
    tree.update_to_source("");
    tree.collect_children();
    assert!(tree.collection().is_empty());
    assert!(tree.recursively_collect(&DeclarationKind::ALL).is_empty());
}

#[test]
fn test_held_declarations_keep_describing_old_buffer() {
    let mut tree = SourceTree::new("func old() {}");
    tree.collect_children();
    let old = tree.functions().next().unwrap().clone();

    tree.update_to_source("func new() {}");
    tree.collect_children();
    assert_eq!(old.name(), "old");
    assert_eq!(tree.functions().next().unwrap().name(), "new");
}
