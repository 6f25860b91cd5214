/// Counts the backslashes immediately preceding byte offset `pos`.
///
/// Walks backward from `pos - 1` while the byte is `\`. The count never
/// includes anything before the start of `text`.
pub fn backslash_run(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut run = 0;
    while run < pos && bytes[pos - 1 - run] == b'\\' {
        run += 1;
    }
    run
}

/// Returns true if the delimiter at byte offset `pos` is live.
///
/// A delimiter is live iff the run of backslashes directly before it has even
/// length: each pair is a literal escaped backslash, while an odd trailing
/// run means the final backslash escapes the delimiter itself. Pure; the
/// inline and block scanners must get identical answers for identical input.
pub fn is_live_delimiter(text: &str, pos: usize) -> bool {
    backslash_run(text, pos) % 2 == 0
}
