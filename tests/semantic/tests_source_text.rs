//! Non-ASCII string contents and nested comments

use sparrow::semantic::{DeclarationKind, DeclarationNode, Named, SourceTree};

use crate::helpers::declaration_assertions::{assert_recursive_names, collected_tree};
use crate::helpers::source_fixtures::NON_ASCII_TEXT;

#[test]
fn test_declarations_after_non_ascii_strings() {
    let tree = collected_tree(NON_ASCII_TEXT);
    assert_recursive_names(
        &tree,
        &[
            DeclarationKind::Variable,
            DeclarationKind::Function,
            DeclarationKind::Structure,
        ],
        &["greeting", "describe", "After"],
    );

    let after = tree.structures().next().unwrap();
    assert_eq!(tree.extract(after).unwrap(), "struct After {}");
    let location = tree.source_location(after).unwrap();
    assert_eq!(location.start.line, 5);
    assert_eq!(location.end.offset, NON_ASCII_TEXT.len());
}

#[test]
fn test_non_ascii_interpolation_stays_in_function_body() {
    let tree = collected_tree(NON_ASCII_TEXT);
    let describe = tree.functions().next().unwrap();
    assert!(describe.description().ends_with("— done\"\n}"));
    assert_eq!(tree.variables().next().unwrap().name(), "greeting");
}

#[test]
fn test_nested_block_comment_before_struct() {
    let tree = collected_tree("/* /* a */ */ struct A {}");
    let names: Vec<_> = tree.structures().map(|s| s.name()).collect();
    assert_eq!(names, vec!["A"]);
}

#[test]
fn test_unterminated_nested_comment_hides_rest() {
    let mut tree = SourceTree::new("/* /* a */ struct A {}");
    tree.collect_children();
    assert_eq!(tree.structures().count(), 0);
}
