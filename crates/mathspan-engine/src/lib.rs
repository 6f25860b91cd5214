//! Recognition core for dollar-delimited math in Markdown source.
//!
//! Two scanners share one escaping discipline: [`scan::scan_inline`] finds a
//! `$...$` span within a single line buffer, [`scan::scan_block`] finds a
//! `$$...$$` span across a line range, honoring block indentation. Both
//! report matches structurally and never mutate input; rendering and output
//! assembly live in the companion `mathspan-render` crate.

pub mod host;
pub mod scan;

// Re-export key types for easier usage
pub use host::{BlockSource, LineBuffer};
pub use scan::{
    InlineMatch, InlineOutcome, MathKind, MathSpan, probe_block, probe_inline, scan_block,
    scan_inline,
};
