//! The seam between the scanners and a host parser.
//!
//! Block scanning needs indexed access to lines, their indentation, and the
//! enclosing block's minimum indentation. Any engine exposing those facts
//! can drive [`crate::scan::scan_block`] directly; [`LineBuffer`] is a
//! self-contained implementation for tests and simple hosts.

/// Line-level facts a host parser provides to the block scanner.
///
/// Implementations only read; the scanners never ask for mutation.
pub trait BlockSource {
    /// Number of lines available.
    fn line_count(&self) -> usize;

    /// Raw text of line `idx`, including leading indentation, without the
    /// trailing newline.
    fn line(&self, idx: usize) -> &str;

    /// Width in bytes of the leading whitespace of line `idx`.
    fn indent(&self, idx: usize) -> usize;

    /// Minimum indentation for a line to remain inside the enclosing block.
    /// A non-empty line below this width structurally closes the block.
    fn block_indent(&self) -> usize;

    /// Line text with the leading indentation removed.
    fn content(&self, idx: usize) -> &str {
        &self.line(idx)[self.indent(idx)..]
    }
}

/// An owned line-indexed view of a source string.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    indents: Vec<usize>,
    block_indent: usize,
}

impl LineBuffer {
    /// Splits `source` into lines with no enclosing-block indentation
    /// requirement (top-level scanning).
    pub fn new(source: &str) -> Self {
        Self::with_block_indent(source, 0)
    }

    /// Splits `source` into lines inside a block requiring `block_indent`
    /// bytes of leading whitespace.
    pub fn with_block_indent(source: &str, block_indent: usize) -> Self {
        let lines: Vec<String> = source.lines().map(str::to_owned).collect();
        let indents = lines
            .iter()
            .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
            .collect();
        Self {
            lines,
            indents,
            block_indent,
        }
    }
}

impl BlockSource for LineBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    fn indent(&self, idx: usize) -> usize {
        self.indents[idx]
    }

    fn block_indent(&self) -> usize {
        self.block_indent
    }
}
