/// The line-based terminal a command talks to: where `i`, `a` and `c` read
/// their text from, and where printed lines, byte counts and `?` go.
pub struct Console<'io> {
    input: &'io mut dyn io::input::LineSource,
    output: &'io mut dyn std::io::Write,
}

impl<'io> Console<'io> {
    pub fn new(
        input: &'io mut dyn io::input::LineSource,
        output: &'io mut dyn std::io::Write,
    ) -> Self {
        Self { input, output }
    }

    /// Reads the next command line, `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream fails.
    pub fn read_command(&mut self) -> std::io::Result<Option<String>> {
        self.input.next_line()
    }

    /// Reads typed-in text up to a lone `.` line.
    ///
    /// # Errors
    ///
    /// Returns `Input` if the input stream fails.
    pub fn read_block(&mut self) -> editor_core::errors::EditorResult<Vec<String>> {
        io::input::read_block(&mut *self.input).map_err(editor_core::errors::EditorError::Input)
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns `Output` if the output stream fails.
    pub fn print(&mut self, text: &str) -> editor_core::errors::EditorResult<()> {
        writeln!(self.output, "{text}").map_err(editor_core::errors::EditorError::Output)
    }

    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.output.flush()
    }
}

impl std::fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
