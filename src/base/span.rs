//! Source text positions and line/column mapping.

use std::fmt;

pub use text_size::TextSize;

/// A line and column position in source text.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-8 bytes, not characters)
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// The origin of a file, also used when a position is unknown.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Index for converting byte offsets into line/column positions.
///
/// Lines are split on `\n` only; a `\r` before it stays part of the line.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(TextSize::from(0))
            .chain(
                text.match_indices('\n')
                    .map(|(offset, _)| TextSize::from((offset + 1) as u32)),
            )
            .collect();

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
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
}

/// Locate the first occurrence of `needle` in `haystack`.
///
/// Returns [`LineCol::origin`] when the needle does not occur. Callers should
/// read that as "position unknown", not as a match at the start of the file.
pub fn find_position(haystack: &str, needle: &str) -> LineCol {
    match haystack.find(needle) {
        Some(offset) => LineIndex::new(haystack).line_col(TextSize::from(offset as u32)),
        None => LineCol::origin(),
    }
}
