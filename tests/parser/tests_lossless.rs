//! Lossless parsing over realistic sources

use rstest::rstest;
use sparrow::parser::{SyntaxKind, parse};

use crate::helpers::source_fixtures::{NESTED_TYPES, TWO_BRANCH_IF, VIEW_MODEL};

#[rstest]
#[case(NESTED_TYPES)]
#[case(TWO_BRANCH_IF)]
#[case(VIEW_MODEL)]
fn test_fixture_round_trips(#[case] source: &str) {
    let parsed = parse(source);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    assert_eq!(parsed.syntax().text().to_string(), source);
}

#[test]
fn test_broken_source_is_still_lossless() {
    let source = "struct A {\n    func f( {\n}\nlet = \n";
    let parsed = parse(source);
    assert!(!parsed.ok());
    assert_eq!(parsed.syntax().text().to_string(), source);
}

#[test]
fn test_top_level_kinds() {
    let parsed = parse(VIEW_MODEL);
    let kinds: Vec<_> = parsed.syntax().children().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::IMPORT_DECL,
            SyntaxKind::IMPORT_DECL,
            SyntaxKind::CLASS_DECL,
            SyntaxKind::EXTENSION_DECL,
        ]
    );
}
