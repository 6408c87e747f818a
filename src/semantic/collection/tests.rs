use super::*;
use crate::semantic::{Named, SourceTree};

fn collected(source: &str) -> SourceTree {
    let mut tree = SourceTree::new(source);
    tree.collect_children();
    tree
}

fn names(declarations: &[&Declaration]) -> Vec<String> {
    declarations.iter().map(|d| d.name()).collect()
}

#[test]
fn test_empty_collection() {
    let collection = DeclarationCollection::new();
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
    assert_eq!(collection.kinds().count(), 0);
    assert_eq!(collection.count(DeclarationKind::Function), 0);
    assert!(collection.recursively_collect(&DeclarationKind::ALL).is_empty());
}

#[test]
fn test_categories_keep_source_order() {
    let tree = collected("func a() {}\nstruct S {}\nfunc b() {}\nlet x = 1\nfunc c() {}");
    let collection = tree.collection();
    assert_eq!(collection.len(), 5);

    let functions: Vec<_> = collection.functions().map(|f| f.name()).collect();
    assert_eq!(functions, vec!["a", "b", "c"]);
    assert_eq!(collection.count(DeclarationKind::Function), 3);
    assert_eq!(
        collection.kinds().collect::<Vec<_>>(),
        vec![
            DeclarationKind::Function,
            DeclarationKind::Structure,
            DeclarationKind::Variable
        ]
    );

    let all: Vec<_> = collection.iter().map(|d| d.name()).collect();
    assert_eq!(all, vec!["a", "S", "b", "x", "c"]);
}

#[test]
fn test_of_kind_and_find() {
    let tree = collected("class A {}\nclass B {}\nenum C {}");
    let collection = tree.collection();
    let classes: Vec<_> = collection.of_kind(DeclarationKind::Class).collect();
    assert_eq!(names(&classes), vec!["A", "B"]);
    assert_eq!(collection.find("C").map(|d| d.kind()), Some(DeclarationKind::Enumeration));
    assert!(collection.find("D").is_none());
    assert_eq!(collection.of_kind(DeclarationKind::Actor).count(), 0);
}

#[test]
fn test_recursively_collect_is_pre_order() {
    let source = "struct A {\n    struct B {\n        enum C {}\n    }\n    class D {}\n}\nstruct E {}";
    let tree = collected(source);
    let found = tree.collection().recursively_collect(&[
        DeclarationKind::Structure,
        DeclarationKind::Class,
        DeclarationKind::Enumeration,
    ]);
    assert_eq!(names(&found), vec!["A", "B", "C", "D", "E"]);

    let only_structs = tree.collection().recursively_collect(&[DeclarationKind::Structure]);
    assert_eq!(names(&only_structs), vec!["A", "B", "E"]);
}

#[test]
fn test_recursively_collect_through_unselected_parents() {
    let tree = collected("class A {\n    func f() {\n        struct Local {}\n    }\n}");
    let found = tree.collection().recursively_collect(&[DeclarationKind::Structure]);
    assert_eq!(names(&found), vec!["Local"]);
}

#[test]
fn test_recursively_collect_enters_every_branch() {
    let source = "#if A\nfunc a() {}\n#else\nfunc b() {}\n#endif\nfunc c() {}";
    let tree = collected(source);
    let found = tree.collection().recursively_collect(&[DeclarationKind::Function]);
    assert_eq!(names(&found), vec!["a", "b", "c"]);
    assert_eq!(tree.collection().functions().count(), 1);
}

#[test]
fn test_iterates_by_reference() {
    let tree = collected("let a = 1\nlet b = 2");
    let mut count = 0;
    for declaration in tree.collection() {
        assert_eq!(declaration.kind(), DeclarationKind::Variable);
        count += 1;
    }
    assert_eq!(count, 2);
}

#[test]
fn test_equality() {
    let first = collected("struct A {}\nfunc f() {}");
    let second = collected("struct A {}\nfunc f() {}");
    let different = collected("struct A {}\nfunc g() {}");
    assert_eq!(first.collection(), second.collection());
    assert_ne!(first.collection(), different.collection());
    assert_ne!(first.collection(), &DeclarationCollection::new());
}
