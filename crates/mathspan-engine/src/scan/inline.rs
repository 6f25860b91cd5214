use super::cursor::Cursor;
use super::delimiter::{self, Dollar};
use super::escape;
use super::types::MathSpan;

/// What the inline rule claimed at the scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineOutcome<'a> {
    /// Characters claimed by the rule but emitted as literal pending text,
    /// so no later rule double-processes them.
    Literal(&'a str),
    /// An extracted math span; delimiters excluded, no trimming.
    Math(&'a str),
}

/// A successful claim by the inline rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineMatch<'a> {
    pub outcome: InlineOutcome<'a>,
    /// Updated cursor position, just past everything the rule consumed.
    pub end: usize,
}

impl InlineMatch<'_> {
    /// The host token for this match, if the outcome was a math span.
    ///
    /// `line` is the host's current line index and `start` the position the
    /// scan began at (the opening delimiter).
    pub fn to_span(&self, line: usize, start: usize) -> Option<MathSpan> {
        match self.outcome {
            InlineOutcome::Math(content) => Some(MathSpan::inline(content, line, start, self.end)),
            InlineOutcome::Literal(_) => None,
        }
    }
}

/// Side-effect-free lookahead: would [`scan_inline`] claim position `pos`?
pub fn probe_inline(line: &str, pos: usize) -> bool {
    scan_inline(line, pos).is_some()
}

/// Scans for one inline `$...$` span starting at byte offset `pos` of `line`.
///
/// Returns `None` when the rule does not apply at `pos` (the byte is not a
/// live `$`); the host's literal-text fallback owns the character then.
/// Otherwise the rule claims input: either a [`InlineOutcome::Math`] span, or
/// a [`InlineOutcome::Literal`] run when the delimiter cannot be paired (no
/// closer on the line, or the degenerate adjacent `$$`).
///
/// The input is never mutated; the updated position is reported in the
/// returned [`InlineMatch`].
pub fn scan_inline(line: &str, pos: usize) -> Option<InlineMatch<'_>> {
    let mut cur = Cursor::at_offset(line, pos);
    if cur.peek() != Some(Dollar::MARKER) {
        return None;
    }
    // An escaped opener is not ours: leave it to the host as literal text.
    if !escape::is_live_delimiter(line, pos) {
        return None;
    }

    if !delimiter::probe(line, pos).can_open {
        // Claim the single character so no other rule re-reads it.
        return Some(InlineMatch {
            outcome: InlineOutcome::Literal(&line[pos..pos + 1]),
            end: pos + 1,
        });
    }

    cur.bump();
    let start = cur.pos();

    // Forward search for a closer, skipping candidates escaped away by an
    // odd backslash run.
    let closer = loop {
        match cur.peek() {
            None => break None,
            Some(Dollar::MARKER) if escape::is_live_delimiter(line, cur.pos()) => {
                break Some(cur.pos());
            }
            Some(_) => {
                cur.bump();
            }
        }
    };

    let Some(close) = closer else {
        // No closer before the line ends: the opener alone becomes literal,
        // the rest of the line stays unconsumed.
        return Some(InlineMatch {
            outcome: InlineOutcome::Literal(&line[pos..start]),
            end: start,
        });
    };

    if close == start {
        // Adjacent delimiters (`$$`) carry no content; both pass through as
        // literal text so inline math cannot shadow the block opener.
        return Some(InlineMatch {
            outcome: InlineOutcome::Literal(&line[pos..close + 1]),
            end: close + 1,
        });
    }

    if !delimiter::probe(line, close).can_close {
        return Some(InlineMatch {
            outcome: InlineOutcome::Literal(&line[pos..start]),
            end: start,
        });
    }

    Some(InlineMatch {
        outcome: InlineOutcome::Math(&line[start..close]),
        end: close + 1,
    })
}
