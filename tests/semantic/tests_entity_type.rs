//! Type classification through declarations

use rstest::rstest;
use sparrow::semantic::{EntityType, Spelling};

use crate::helpers::declaration_assertions::collected_tree;

fn variable_type(annotation: &str) -> EntityType {
    let tree = collected_tree(&format!("var value: {annotation}"));
    tree.variables().next().unwrap().ty()
}

#[rstest]
#[case("Int")]
#[case("String?")]
#[case("[String]")]
#[case("[String]?")]
#[case("Array<Int>")]
#[case("[String: Int]")]
#[case("Dictionary<String, [Int]>?")]
#[case("Set<URL>")]
#[case("(Int, label: String)")]
#[case("(Int) -> Void")]
#[case("((Int) -> Void)?")]
#[case("@escaping @Sendable (String) async throws -> Data")]
#[case("() -> Void")]
#[case("Result<Data, Error>")]
#[case("Void")]
#[case("()")]
fn test_description_round_trips(#[case] annotation: &str) {
    assert_eq!(variable_type(annotation).description(), annotation);
}

#[test]
fn test_array_spellings_are_equivalent() {
    let shorthand = variable_type("[String]");
    let generic = variable_type("Array<String>");
    let (
        EntityType::Array {
            element: a,
            spelling: Spelling::Shorthand,
            ..
        },
        EntityType::Array {
            element: b,
            spelling: Spelling::Generic,
            ..
        },
    ) = (&shorthand, &generic)
    else {
        panic!("expected arrays, got {shorthand:?} and {generic:?}");
    };
    assert_eq!(a, b);
}

#[test]
fn test_dictionary_spellings_are_equivalent() {
    let shorthand = variable_type("[String: Int]");
    let generic = variable_type("Dictionary<String, Int>");
    match (shorthand, generic) {
        (
            EntityType::Dictionary { key: k1, value: v1, .. },
            EntityType::Dictionary { key: k2, value: v2, .. },
        ) => {
            assert_eq!(k1, k2);
            assert_eq!(v1, v2);
        }
        other => panic!("expected dictionaries, got {other:?}"),
    }
}

#[test]
fn test_optional_closure_is_escaping() {
    let EntityType::Closure(optional) = variable_type("((Int) -> Void)?") else {
        panic!("expected closure");
    };
    assert!(optional.is_optional);
    assert!(optional.is_escaping);

    let EntityType::Closure(plain) = variable_type("(Int) -> Void") else {
        panic!("expected closure");
    };
    assert!(!plain.is_optional);
    assert!(!plain.is_escaping);
}

#[test]
fn test_inferred_type_is_empty() {
    let tree = collected_tree("let inferred = 42");
    assert_eq!(tree.variables().next().unwrap().ty(), EntityType::Empty);
}

#[test]
fn test_classification_is_recomputed_per_read() {
    let tree = collected_tree("var value: [Int]?");
    let variable = tree.variables().next().unwrap();
    assert_eq!(variable.ty(), variable.ty());
    assert_eq!(variable.ty(), EntityType::parse("[Int]?"));
}
