//! Byte offset ↔ line/column conversion.

pub use text_size::{TextRange, TextSize};

use super::position::{Position, SourceLocation};

/// A zero-based line/column pair. `col` counts UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Line start table for one buffer.
///
/// Built by a single scan of the text. Callers construct one per query and
/// drop it; it is never attached to syntax nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset to a line/column pair.
    ///
    /// Offsets past the end of the buffer clamp to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    /// Convert a byte offset to a full position triple.
    pub fn position(&self, offset: TextSize) -> Position {
        let lc = self.line_col(offset);
        Position::new(
            lc.line as usize,
            lc.col as usize,
            u32::from(offset.min(self.len)) as usize,
        )
    }

    /// Convert a byte range to a source location.
    pub fn location(&self, range: TextRange) -> SourceLocation {
        SourceLocation::new(self.position(range.start()), self.position(range.end()))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == TextSize::new(0)
    }
}
