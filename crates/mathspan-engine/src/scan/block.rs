use super::delimiter::Dollar;
use super::types::MathSpan;
use crate::host::BlockSource;

/// Side-effect-free lookahead: does line `start` open a `$$` block?
///
/// Only the opener is checked; the host uses this during paragraph
/// interruption probing where block-hood matters but content does not.
pub fn probe_block(source: &impl BlockSource, start: usize) -> bool {
    opening_remainder(source, start).is_some()
}

/// Scans for one `$$...$$` block in lines `[start, end)` of `source`.
///
/// The block may close on the opening line or span lines. Returns `None`
/// without consuming anything when line `start` does not open a block, when
/// the range is exhausted before a closer, or when a non-empty line dedents
/// below the enclosing block's indentation (a structural termination; the
/// `$$` degrades to ordinary text under the host's fallback rules).
///
/// On a match, the span's `end_line` is one past the closing line.
pub fn scan_block(source: &impl BlockSource, start: usize, end: usize) -> Option<MathSpan> {
    let opening = opening_remainder(source, start)?;
    let open_indent = source.indent(start);

    // Single-line form: the remainder itself carries the closer.
    let trimmed = opening.trim();
    let (first, mut closing) = match trimmed.strip_suffix(Dollar::BLOCK) {
        Some(stripped) => (stripped, Some(start)),
        None => (opening, None),
    };

    let mut last = None;
    let mut next = start;
    while closing.is_none() {
        next += 1;
        if next >= end {
            return None;
        }
        let content = source.content(next);
        if !content.is_empty() && source.indent(next) < source.block_indent() {
            // A dedent structurally closes the enclosing block; stop looking.
            return None;
        }
        if content.trim().ends_with(Dollar::BLOCK) {
            // Only a trailing marker closes the block, and content may hold
            // a literal `$$` of its own, so cut at the last occurrence.
            if let Some(cut) = content.rfind(Dollar::BLOCK) {
                last = Some(&content[..cut]);
                closing = Some(next);
            }
        }
    }
    let closing = closing?;

    let mut content = String::new();
    if !first.trim().is_empty() {
        content.push_str(first);
        content.push('\n');
    }
    for idx in start + 1..closing {
        content.push_str(strip_indent(source.line(idx), open_indent));
        content.push('\n');
    }
    if let Some(last) = last {
        if !last.trim().is_empty() {
            content.push_str(last);
        }
    }

    let end_pos = source.line(closing).len();
    Some(MathSpan::block(
        content,
        start,
        closing + 1,
        open_indent,
        end_pos,
    ))
}

/// Text after the opening `$$` marker, or `None` when line `start` does not
/// begin with one (past its indentation).
fn opening_remainder(source: &impl BlockSource, start: usize) -> Option<&str> {
    source.content(start).strip_prefix(Dollar::BLOCK)
}

/// Removes up to `width` bytes of leading whitespace, the shared structural
/// indent of the block. Interior whitespace survives verbatim.
fn strip_indent(line: &str, width: usize) -> &str {
    let bytes = line.as_bytes();
    let mut n = 0;
    while n < width && n < bytes.len() && (bytes[n] == b' ' || bytes[n] == b'\t') {
        n += 1;
    }
    &line[n..]
}
