//! Source positions attached to syntax tree nodes

// Sources beyond i32::MAX lines are unsupported
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use serde::{Deserialize, Serialize};

/// A line/column pair identifying the token that produced a node
///
/// Real nodes carry a 1-based line and column. Sentinel values carry
/// [`Position::SENTINEL`] (`-1:-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number
    pub line: i32,
    /// 1-based column number (in characters, not bytes)
    pub column: i32,
}

impl Position {
    /// The position reported by every sentinel value
    pub const SENTINEL: Position = Position {
        line: -1,
        column: -1,
    };

    /// Create a new position
    #[must_use]
    pub const fn new(line: i32, column: i32) -> Self {
        Self { line, column }
    }

    /// Check if this is the sentinel position
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.line == -1 && self.column == -1
    }

    /// Check if this position could have come from a source token
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.line >= 1 && self.column >= 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets in a source file to line/column positions
///
/// The index holds only line starts; the source it was built from is passed
/// again when converting offsets, so columns can be counted in characters.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Build a line index from source code
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset into `source` to a position
    ///
    /// `source` must be the text the index was built from. Offsets past its
    /// end clamp to the end.
    #[must_use]
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let offset = offset.min(source.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let column = source
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        Position::new((line + 1) as i32, (column + 1) as i32)
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get the number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
