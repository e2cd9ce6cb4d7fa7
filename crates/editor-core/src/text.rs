/// # The Core Philosophies of This API
///
/// - Address-Based: Callers think in 1-based line addresses, exactly as they
///   appear in commands. Address `0` means "before the first line" and is only
///   meaningful for insertion.
/// - Immutability for Reads: Functions that just query data (`get_line`, `lines`) take &self.
/// - No Partial Edits: Every mutating method validates its whole range before
///   touching the storage, so an error leaves the buffer as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

/*

==========================
===== CREATION & I/O =====
==========================

*/

impl TextBuffer {
    /// Creates a new, empty text buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Reads a file into a new buffer and reports how many bytes were read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, lacks read permissions,
    /// or if the memory mapping operation fails.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<(Self, u64)> {
        let loaded = io::mmap::read_lines(path)?;

        Ok((Self::from_lines(loaded.lines), loaded.byte_len))
    }

    /// Writes every line, newline-terminated, to `path` and returns the number
    /// of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written to or if the
    /// atomic rename fails. The destination is untouched on error.
    pub fn save_as<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<u64> {
        io::save::write_lines(path, self.iter())
    }
}

/*

==========================
===== INLINE METHODS =====
==========================

*/

impl TextBuffer {
    /// Returns the total number of lines, which is also the address of the last line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/*

===========================
========= GETTERS =========
===========================

*/

impl TextBuffer {
    /// Fetches the text of the line at `addr`.
    #[must_use]
    pub fn get_line(&self, addr: usize) -> Option<&str> {
        addr.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Iterates over `(address, text)` for every line in `start..=end`.
    /// Addresses past the last line are silently skipped.
    pub fn lines(&self, start: usize, end: usize) -> impl Iterator<Item = (usize, &str)> {
        let first = start.max(1);

        self.lines
            .iter()
            .enumerate()
            .skip(first - 1)
            .take((end + 1).saturating_sub(first))
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/*

========================================
========= INSERTION & DELETION =========
========================================

*/

impl TextBuffer {
    /// Splices `new_lines` in after `addr`. Address `0` inserts at the top.
    ///
    /// Returns the addresses the new lines now occupy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if `addr` is past the last line.
    pub fn insert_after(
        &mut self,
        addr: usize,
        new_lines: Vec<String>,
    ) -> crate::errors::EditorResult<std::ops::Range<usize>> {
        if addr > self.lines.len() {
            return Err(crate::errors::EditorError::InvalidAddress);
        }

        let count = new_lines.len();
        self.lines.splice(addr..addr, new_lines);

        Ok(addr + 1..addr + 1 + count)
    }

    /// Splices `new_lines` in before `addr`.
    ///
    /// Address `0`, or an address past the last line, appends at the end of
    /// the document instead; on an empty document both mean the same thing.
    ///
    /// Returns the addresses the new lines now occupy.
    pub fn insert_before(&mut self, addr: usize, new_lines: Vec<String>) -> std::ops::Range<usize> {
        let at = if addr == 0 || addr > self.lines.len() {
            self.lines.len()
        } else {
            addr - 1
        };
        let count = new_lines.len();
        self.lines.splice(at..at, new_lines);

        at + 1..at + 1 + count
    }

    /// Removes the lines `start..=end` and hands them back in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` unless `1 <= start <= end <= line_count`.
    pub fn delete(&mut self, start: usize, end: usize) -> crate::errors::EditorResult<Vec<String>> {
        if start == 0 || start > end || end > self.lines.len() {
            return Err(crate::errors::EditorError::InvalidAddress);
        }

        Ok(self.lines.drain(start - 1..end).collect())
    }

    /// Overwrites the text of the line at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if there is no such line.
    pub fn replace_line(&mut self, addr: usize, text: String) -> crate::errors::EditorResult<()> {
        let slot = addr
            .checked_sub(1)
            .and_then(|idx| self.lines.get_mut(idx))
            .ok_or(crate::errors::EditorError::InvalidAddress)?;

        *slot = text;

        Ok(())
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod text_buffer_creation_save_tests {
    use crate::text::TextBuffer;

    #[test]
    fn test_textbuffer_new() {
        let buffer = TextBuffer::new();

        assert!(buffer.is_empty());
        assert_eq!(buffer.line_count(), 0);
        assert_eq!(buffer.to_string(), "");
    }

    #[test]
    fn test_textbuffer_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disk.txt");
        std::fs::write(&path, "Hello from disk\nsecond\n").unwrap();

        let (buffer, bytes) = TextBuffer::open(&path).expect("Failed to open TextBuffer");

        assert_eq!(bytes, 23);
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.get_line(1), Some("Hello from disk"));
        assert_eq!(buffer.get_line(2), Some("second"));
    }

    #[test]
    fn test_textbuffer_save_then_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.txt");
        let buffer = TextBuffer::from_lines(vec!["one".into(), "".into(), "three".into()]);

        let written = buffer.save_as(&path).expect("save_as should succeed");
        let (reopened, read) = TextBuffer::open(&path).unwrap();

        assert_eq!(reopened, buffer);
        assert_eq!(written, read);
        // "one\n" + "\n" + "three\n"
        assert_eq!(written, 11);
    }
}

#[cfg(test)]
mod text_buffer_getter_tests {
    use super::*;

    fn abc() -> TextBuffer {
        TextBuffer::from_lines(vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn test_get_line() {
        let buffer = abc();

        assert_eq!(buffer.get_line(0), None);
        assert_eq!(buffer.get_line(1), Some("a"));
        assert_eq!(buffer.get_line(3), Some("c"));
        assert_eq!(buffer.get_line(4), None);
    }

    #[test]
    fn test_lines_range() {
        let buffer = abc();

        let collected: Vec<_> = buffer.lines(2, 3).collect();
        assert_eq!(collected, vec![(2, "b"), (3, "c")]);

        let single: Vec<_> = buffer.lines(1, 1).collect();
        assert_eq!(single, vec![(1, "a")]);

        // Out-of-range tails are skipped rather than panicking
        let clipped: Vec<_> = buffer.lines(3, 10).collect();
        assert_eq!(clipped, vec![(3, "c")]);
        assert_eq!(buffer.lines(0, 0).count(), 0);
    }
}

#[cfg(test)]
mod text_buffer_editing_tests {
    use super::*;
    use crate::errors::EditorError;

    fn numbered(count: usize) -> TextBuffer {
        TextBuffer::from_lines((1..=count).map(|n| format!("line {n}")).collect())
    }

    // ==========================================
    // INSERT TESTS
    // ==========================================

    #[test]
    fn test_insert_after_middle_and_top() {
        let mut buffer = numbered(3);

        let range = buffer.insert_after(1, vec!["x".into(), "y".into()]).unwrap();
        assert_eq!(range, 2..4);
        assert_eq!(buffer.to_string(), "line 1\nx\ny\nline 2\nline 3\n");

        let range = buffer.insert_after(0, vec!["top".into()]).unwrap();
        assert_eq!(range, 1..2);
        assert_eq!(buffer.get_line(1), Some("top"));
    }

    #[test]
    fn test_insert_after_past_end_fails() {
        let mut buffer = numbered(2);

        assert!(matches!(
            buffer.insert_after(3, vec!["x".into()]),
            Err(EditorError::InvalidAddress)
        ));
        assert_eq!(buffer, numbered(2));
    }

    #[test]
    fn test_insert_before() {
        let mut buffer = numbered(3);

        let range = buffer.insert_before(2, vec!["x".into()]);
        assert_eq!(range, 2..3);
        assert_eq!(buffer.to_string(), "line 1\nx\nline 2\nline 3\n");
    }

    #[test]
    fn test_insert_before_zero_appends() {
        let mut buffer = numbered(2);

        let range = buffer.insert_before(0, vec!["tail".into()]);

        assert_eq!(range, 3..4);
        assert_eq!(buffer.get_line(3), Some("tail"));
    }

    #[test]
    fn test_insert_into_empty_buffer() {
        let mut buffer = TextBuffer::new();

        let range = buffer.insert_before(0, vec!["first".into(), "second".into()]);

        assert_eq!(range, 1..3);
        assert_eq!(buffer.line_count(), 2);
    }

    // ==========================================
    // DELETE TESTS
    // ==========================================

    #[test]
    fn test_delete_range_and_reinsert_restores() {
        let original = numbered(6);
        let mut buffer = original.clone();

        let removed = buffer.delete(2, 4).unwrap();

        assert_eq!(removed, vec!["line 2", "line 3", "line 4"]);
        assert_eq!(buffer.line_count(), 6 - (4 - 2 + 1));

        buffer.insert_before(2, removed);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_delete_invalid_ranges_leave_buffer_alone() {
        let mut buffer = numbered(3);

        assert!(buffer.delete(0, 1).is_err());
        assert!(buffer.delete(3, 2).is_err());
        assert!(buffer.delete(2, 4).is_err());
        assert_eq!(buffer, numbered(3));
    }

    #[test]
    fn test_replace_line() {
        let mut buffer = numbered(2);

        buffer.replace_line(2, "changed".into()).unwrap();
        assert_eq!(buffer.get_line(2), Some("changed"));
        assert!(buffer.replace_line(3, "nope".into()).is_err());
    }
}
