//! # Math Span Scanning
//!
//! Recognition of `$...$` (inline) and `$$...$$` (block) math spans in
//! Markdown source. Both scanners share one escaping discipline but operate
//! on different granularities: inline within a single line buffer, block
//! across a host-delimited line range.
//!
//! ## Modules
//!
//! - **`types`**: `MathSpan` / `MathKind` result types handed to the host
//! - **`delimiter`**: delimiter constants and the `DelimiterProbe` hook
//! - **`cursor`**: byte cursor over a line buffer
//! - **`escape`**: backslash-run parity (live vs escaped delimiters)
//! - **`inline`**: `probe_inline` / `scan_inline`
//! - **`block`**: `probe_block` / `scan_block` over a [`crate::host::BlockSource`]
//!
//! ## Contract
//!
//! Scanners never mutate input and never fail: "no match" is a structural
//! outcome (`None`), not an error. The `probe_*` functions are pure
//! lookaheads that agree with their `scan_*` counterparts' claim decision.

pub mod block;
pub mod cursor;
pub mod delimiter;
pub mod escape;
pub mod inline;
pub mod types;

pub use block::{probe_block, scan_block};
pub use delimiter::{Dollar, DelimiterProbe};
pub use inline::{InlineMatch, InlineOutcome, probe_inline, scan_inline};
pub use types::{MathKind, MathSpan};
