//! Assertions over declaration collections.

use sparrow::semantic::{Declaration, DeclarationKind, SourceTree};

/// Build a fresh tree, failing on syntax errors.
pub fn collected_tree(source: &str) -> SourceTree {
    let mut tree = SourceTree::new(source);
    tree.collect_children();
    assert!(
        tree.syntax_errors().is_empty(),
        "Syntax errors: {:?}",
        tree.syntax_errors()
    );
    tree
}

pub fn names_of(declarations: &[&Declaration]) -> Vec<String> {
    declarations.iter().map(|d| d.name()).collect()
}

/// Assert the pre-order names of the given kinds across the whole tree.
pub fn assert_recursive_names(tree: &SourceTree, kinds: &[DeclarationKind], expected: &[&str]) {
    let found = tree.recursively_collect(kinds);
    assert_eq!(
        names_of(&found),
        expected,
        "Unexpected pre-order for {:?}",
        kinds
    );
}
