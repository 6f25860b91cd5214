/// Byte cursor over one logical line of source text.
///
/// The host owns the line buffer; the cursor only reads it and tracks the
/// scan position. Delimiters are all ASCII, so byte-wise access is safe as
/// long as reported positions come from the cursor itself.
#[derive(Clone)]
pub struct Cursor<'a> {
    line: &'a str,
    at: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self { line, at: 0 }
    }

    /// Creates a cursor mid-line, at byte offset `at`.
    pub fn at_offset(line: &'a str, at: usize) -> Self {
        Self { line, at }
    }

    /// Current byte offset within the line.
    pub fn pos(&self) -> usize {
        self.at
    }

    /// Returns true if the cursor has passed the last byte of the line.
    pub fn eof(&self) -> bool {
        self.at >= self.line.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.at).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.at += 1;
        Some(b)
    }
}
