use serde::{Deserialize, Serialize};

/// Whether a span came from the inline or the block form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathKind {
    /// `$...$` within one line.
    Inline,
    /// `$$...$$`, same-line or spanning lines.
    Block,
}

impl MathKind {
    /// The display-mode flag handed to the renderer: `false` for inline
    /// spans, `true` for blocks, regardless of any caller preference.
    pub fn display_mode(self) -> bool {
        matches!(self, MathKind::Block)
    }
}

/// A successfully extracted math span, ready to become a host token.
///
/// `content` is the raw substring between the delimiters, delimiters
/// excluded, escapes untouched. Inline content is never empty; block content
/// may be (an immediately closed `$$` pair is tolerated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathSpan {
    pub content: String,
    pub kind: MathKind,
    /// First source line of the span.
    pub start_line: usize,
    /// One past the last source line; the host resumes scanning here.
    pub end_line: usize,
    /// Byte offset of the opening delimiter within its line.
    pub start: usize,
    /// Byte offset just past the closing delimiter within its line.
    pub end: usize,
}

impl MathSpan {
    /// Builds an inline span found on line `line` between byte offsets
    /// `start` and `end` (delimiters included in the offsets).
    pub fn inline(content: impl Into<String>, line: usize, start: usize, end: usize) -> Self {
        Self {
            content: content.into(),
            kind: MathKind::Inline,
            start_line: line,
            end_line: line + 1,
            start,
            end,
        }
    }

    /// Builds a block span covering source lines `[start_line, end_line)`.
    pub fn block(
        content: impl Into<String>,
        start_line: usize,
        end_line: usize,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            content: content.into(),
            kind: MathKind::Block,
            start_line,
            end_line,
            start,
            end,
        }
    }
}
