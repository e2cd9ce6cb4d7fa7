/// The document being edited, plus the bookkeeping that travels with it.
#[derive(Debug, Default)]
pub struct Document {
    pub text_buffer: editor_core::text::TextBuffer,
    pub cursor: editor_core::cursor::LineCursor,

    /// Unsaved changes. Gates `e` and `q` through [`Document::confirm_discard`].
    modified: bool,
    filename: Option<std::path::PathBuf>,
}

impl Document {
    /// Wraps `text_buffer` with the cursor on its last line.
    pub fn new(text_buffer: editor_core::text::TextBuffer) -> Self {
        let cursor = editor_core::cursor::LineCursor::new(text_buffer.line_count());

        Self {
            text_buffer,
            cursor,
            modified: false,
            filename: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    #[inline]
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    #[must_use]
    pub fn filename(&self) -> Option<&std::path::Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, path: impl Into<std::path::PathBuf>) {
        self.filename = Some(path.into());
    }

    /// One-shot guard in front of commands that throw the document away.
    ///
    /// # Errors
    ///
    /// Returns `Modified` if there are unsaved changes. The flag is cleared
    /// at the same time, so repeating the command goes through.
    pub fn confirm_discard(&mut self) -> editor_core::errors::EditorResult<()> {
        if self.modified {
            self.modified = false;
            return Err(editor_core::errors::EditorError::Modified);
        }

        Ok(())
    }
}

/*

==========================
====== FILE HANDLING =====
==========================

*/

impl Document {
    /// Replaces the whole document with the contents of `path` and associates
    /// the name with it. The cursor lands on the last line.
    ///
    /// Returns the number of bytes read.
    ///
    /// # Errors
    ///
    /// Returns `Open` if the file cannot be read. The document is left as it was.
    pub fn open(&mut self, path: &std::path::Path) -> editor_core::errors::EditorResult<u64> {
        let (text_buffer, bytes) =
            editor_core::text::TextBuffer::open(path).map_err(editor_core::errors::EditorError::Open)?;

        self.cursor.set(text_buffer.line_count());
        self.text_buffer = text_buffer;
        self.modified = false;
        self.filename = Some(path.to_path_buf());

        Ok(bytes)
    }

    /// Writes every line to `path`, or to the associated file when `path` is
    /// `None`. A name given here becomes the associated one if there was none.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// - `NoFilename` if neither `path` nor an associated name exists.
    /// - `Write` if the file cannot be created or written.
    pub fn write(
        &mut self,
        path: Option<std::path::PathBuf>,
    ) -> editor_core::errors::EditorResult<u64> {
        let target = match path {
            Some(path) => path,
            None => self
                .filename
                .clone()
                .ok_or(editor_core::errors::EditorError::NoFilename)?,
        };

        let bytes = self
            .text_buffer
            .save_as(&target)
            .map_err(editor_core::errors::EditorError::Write)?;

        if self.filename.is_none() {
            self.filename = Some(target);
        }
        self.modified = false;

        Ok(bytes)
    }
}

/*

========================================
========= INSERTION & DELETION =========
========================================

*/

impl Document {
    /// Splices `lines` in relative to `addr` and leaves the cursor on the last
    /// new line. With nothing to insert, the cursor just moves to `addr`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if `addr` is past the last line.
    pub fn insert(
        &mut self,
        position: editor_core::enums::InsertPosition,
        addr: usize,
        lines: Vec<String>,
    ) -> editor_core::errors::EditorResult<()> {
        let inserted = match position {
            editor_core::enums::InsertPosition::Before => {
                self.text_buffer.insert_before(addr, lines)
            }
            editor_core::enums::InsertPosition::After => {
                self.text_buffer.insert_after(addr, lines)?
            }
        };

        if inserted.is_empty() {
            self.cursor.set_clamped(addr, self.text_buffer.line_count());
        } else {
            self.cursor.set(inserted.end - 1);
            self.modified = true;
        }

        Ok(())
    }

    /// Removes `start..=end` and returns the removed lines. The cursor moves
    /// to `start`, or to the new last line if `start` no longer exists.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` unless `1 <= start <= end <= line_count`.
    pub fn delete(
        &mut self,
        start: usize,
        end: usize,
    ) -> editor_core::errors::EditorResult<Vec<String>> {
        let removed = self.text_buffer.delete(start, end)?;

        self.cursor.set_clamped(start, self.text_buffer.line_count());
        self.modified = true;

        Ok(removed)
    }
}
