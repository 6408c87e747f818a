/// Position tracking for declarations
///
/// Stores the source location (line/column/byte offset) of declarations.
/// Locations are resolved on demand from a byte range and the owning buffer;
/// nothing here is stored on syntax nodes.

/// A location in source code: a start and an end position (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed line and column, absolute byte offset)
///
/// `column` counts UTF-8 bytes from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Check if a position falls within this location
    pub fn contains(&self, position: Position) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.column < self.start.column {
            return false;
        }
        if position.line == self.end.line && position.column > self.end.column {
            return false;
        }
        true
    }

    /// Number of lines touched by this location
    pub fn line_count(&self) -> usize {
        self.end.line - self.start.line + 1
    }
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}
