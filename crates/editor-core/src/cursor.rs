/// The current line: the address commands fall back to when none is given.
///
/// Holds `0` only while the document is empty; otherwise it stays within
/// `1..=line_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LineCursor {
    line: usize,
}

impl LineCursor {
    #[must_use]
    pub fn new(line: usize) -> Self {
        Self { line }
    }

    #[inline]
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Moves to `line` without checking it. Callers hand over addresses that
    /// were already validated against the document.
    #[inline]
    pub fn set(&mut self, line: usize) {
        self.line = line;
    }

    /// Moves to `line`, pulled back into `1..=line_count`, or to `0` when the
    /// document is empty.
    pub fn set_clamped(&mut self, line: usize, line_count: usize) {
        self.line = if line_count == 0 {
            0
        } else {
            line.clamp(1, line_count)
        };
    }
}
