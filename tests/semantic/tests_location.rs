//! Source locations and extraction

use rstest::rstest;
use sparrow::semantic::{DeclarationNode, SemanticError, extract, source_location};
use sparrow::Position;

use crate::helpers::declaration_assertions::collected_tree;
use crate::helpers::source_fixtures::{VIEW_MODEL, with_attribute_lines};

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
fn test_location_with_attribute_lines(#[case] count: usize) {
    let source = with_attribute_lines(count, "func f() {}");
    let tree = collected_tree(&source);
    let function = tree.functions().next().unwrap();

    let location = tree.source_location(function).unwrap();
    let header = "// leading comment\n".len();
    assert_eq!(location.start, Position::new(1, 0, header));
    assert_eq!(location.end.line, count + 1);
    assert_eq!(location.end.offset, source.len());

    let extracted = tree.extract(function).unwrap();
    assert_eq!(extracted, function.description());
    assert_eq!(extracted.lines().count(), count + 1);
    assert!(extracted.ends_with("func f() {}"));
}

#[test]
fn test_extraction_matches_description_everywhere() {
    let tree = collected_tree(VIEW_MODEL);
    for declaration in tree.recursively_collect(&sparrow::semantic::DeclarationKind::ALL) {
        assert_eq!(extract(declaration, VIEW_MODEL).unwrap(), declaration.description());
        let location = source_location(declaration, VIEW_MODEL).unwrap();
        assert_eq!(location.start.offset, usize::from(declaration.range().start()));
        assert!(location.start.line <= location.end.line);
    }
}

#[test]
fn test_columns_count_bytes() {
    let source = "let é = 1; struct S {}";
    let tree = collected_tree(source);
    let structure = tree.structures().next().unwrap();
    let location = tree.source_location(structure).unwrap();
    assert_eq!(location.start, Position::new(0, 12, 12));
}

#[test]
fn test_buffer_mismatch_is_reported() {
    let tree = collected_tree("struct Long {}");
    let structure = tree.structures().next().unwrap();
    assert_eq!(
        extract(structure, "struct"),
        Err(SemanticError::out_of_bounds(0, 14, 6))
    );
}
