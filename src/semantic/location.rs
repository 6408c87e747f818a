//! Source location resolution
//!
//! Converts a declaration's byte range into line/column/offset positions and
//! slices its verbatim text out of a buffer. Both are computed per query from
//! the buffer; nothing is cached on the syntax tree.

use super::declarations::DeclarationNode;
use super::error::{SemanticError, SemanticResult};
use crate::base::{LineIndex, SourceLocation, TextRange};

/// The slice of `buffer` covered by `range`
fn checked_slice(range: TextRange, buffer: &str) -> SemanticResult<&str> {
    let start = usize::from(range.start());
    let end = usize::from(range.end());
    buffer
        .get(start..end)
        .ok_or_else(|| SemanticError::out_of_bounds(start, end, buffer.len()))
}

/// Start and end positions of `declaration` within `buffer`.
///
/// The start includes leading attributes.
pub fn source_location<D>(declaration: &D, buffer: &str) -> SemanticResult<SourceLocation>
where
    D: DeclarationNode + ?Sized,
{
    let range = declaration.range();
    checked_slice(range, buffer)?;
    Ok(LineIndex::new(buffer).location(range))
}

/// The verbatim source of `declaration`. Equals its `description()` when
/// `buffer` is the text it was collected from.
pub fn extract<'a, D>(declaration: &D, buffer: &'a str) -> SemanticResult<&'a str>
where
    D: DeclarationNode + ?Sized,
{
    checked_slice(declaration.range(), buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Position;
    use crate::semantic::{DeclarationKind, SourceTree};

    #[test]
    fn test_location_includes_attributes() {
        let source = "// header\n@available(*, deprecated)\n@inlinable\nfunc f() {}\n";
        let mut tree = SourceTree::new(source);
        tree.collect_children();
        let function = tree.collection().functions().next().unwrap();

        let location = source_location(function, source).unwrap();
        assert_eq!(location.start, Position::new(1, 0, 10));
        assert_eq!(location.end, Position::new(3, 11, 58));
        assert_eq!(
            extract(function, source).unwrap(),
            "@available(*, deprecated)\n@inlinable\nfunc f() {}"
        );
    }

    #[test]
    fn test_extract_matches_description() {
        let source = "struct A {\n    var x = 1, y: Int\n}";
        let mut tree = SourceTree::new(source);
        tree.collect_children();
        for declaration in tree.recursively_collect(&[DeclarationKind::Structure, DeclarationKind::Variable]) {
            assert_eq!(extract(declaration, source).unwrap(), declaration.description());
        }
    }

    #[test]
    fn test_short_buffer_is_out_of_bounds() {
        let source = "struct Outer {\n    struct Inner {}\n}";
        let mut tree = SourceTree::new(source);
        tree.collect_children();
        let outer = tree.collection().structures().next().unwrap();

        let err = extract(outer, "struct").unwrap_err();
        assert_eq!(err, SemanticError::out_of_bounds(0, source.len(), 6));
        assert!(source_location(outer, "").is_err());
    }

    #[test]
    fn test_range_splitting_a_character_is_rejected() {
        let source = "let a = 1";
        let mut tree = SourceTree::new(source);
        tree.collect_children();
        let variable = tree.collection().variables().next().unwrap();
        // byte 9 falls inside the two-byte "é"
        assert!(extract(variable, "let a = é").is_err());
    }
}
