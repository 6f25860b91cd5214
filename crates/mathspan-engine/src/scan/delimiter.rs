/// The dollar delimiter family. All delimiter knowledge lives here; the
/// scanners never hardcode `$` or `$$`.
pub struct Dollar;

impl Dollar {
    /// The inline marker character.
    pub const MARKER: u8 = b'$';
    /// The block opening/closing marker.
    pub const BLOCK: &'static str = "$$";
}

/// Context-sensitive validity decision for a candidate delimiter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterProbe {
    pub can_open: bool,
    pub can_close: bool,
}

/// Probes whether the delimiter at `pos` may open or close a span.
///
/// The current policy approves every position. The signature stays
/// position-dependent so stricter policies (e.g. rejecting `$` adjacent to
/// digits) can slot in without touching the scanners.
pub fn probe(_line: &str, _pos: usize) -> DelimiterProbe {
    DelimiterProbe {
        can_open: true,
        can_close: true,
    }
}
