/// One editing session: the document plus everything remembered between
/// commands.
#[derive(Debug)]
pub struct Editor {
    pub document: crate::document::Document,

    last_pattern: Option<regex::Regex>,
    last_error: Option<String>,
    commands: crate::commands::CommandTable,
}

impl Editor {
    /// A session on an empty, unnamed document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_document(crate::document::Document::default())
    }

    #[must_use]
    pub fn with_document(document: crate::document::Document) -> Self {
        Self {
            document,
            last_pattern: None,
            last_error: None,
            commands: crate::commands::CommandTable::new(),
        }
    }

    /// Message of the most recent failure, as printed by `h`.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn last_pattern(&self) -> Option<&regex::Regex> {
        self.last_pattern.as_ref()
    }

    pub fn remember_pattern(&mut self, pattern: regex::Regex) {
        self.last_pattern = Some(pattern);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/*

==========================
====== COMMAND LOOP ======
==========================

*/

impl Editor {
    /// Runs one command line. Failures are reported on `console` as `?` and
    /// kept for `h`; they never end the session.
    pub fn execute(
        &mut self,
        line: &str,
        console: &mut crate::console::Console<'_>,
    ) -> crate::commands::Outcome {
        match self.try_execute(line, console) {
            Ok(outcome) => outcome,
            Err(error) => {
                self.report(error, console);
                crate::commands::Outcome::Continue
            }
        }
    }

    /// Resolves the addresses of `line`, looks up the verb and runs its
    /// handler. The cursor moves made by `;` and any pattern compiled while
    /// resolving are handed to the handler, and rolled back if it fails.
    /// A `Modified` warning keeps them, since the warning itself is the
    /// command's effect.
    ///
    /// # Errors
    ///
    /// - Any resolution error from [`editor_core::address::resolve`].
    /// - `UnknownCommand` if no handler exists for the verb.
    /// - Whatever the handler fails with.
    pub fn try_execute(
        &mut self,
        line: &str,
        console: &mut crate::console::Console<'_>,
    ) -> editor_core::errors::EditorResult<crate::commands::Outcome> {
        let resolution = editor_core::address::resolve(
            line,
            &self.document.text_buffer,
            self.document.cursor.line(),
            self.last_pattern.as_ref(),
        )?;

        let verb = resolution.verb();
        let handler = self
            .commands
            .get(verb)
            .ok_or(editor_core::errors::EditorError::UnknownCommand)?;

        let previous_cursor = self.document.cursor;
        let previous_pattern = self.last_pattern.clone();

        self.document.cursor.set(resolution.current);
        if let Some(pattern) = resolution.pattern {
            self.last_pattern = Some(pattern);
        }

        let invocation = crate::commands::Invocation {
            start: resolution.start,
            end: resolution.end,
            verb,
            text: resolution.rest,
        };

        tracing::debug!(
            start = invocation.start,
            end = invocation.end,
            %verb,
            "dispatching"
        );

        let result = handler(self, &invocation, console);

        if let Err(error) = &result
            && !matches!(error, editor_core::errors::EditorError::Modified)
        {
            self.document.cursor = previous_cursor;
            self.last_pattern = previous_pattern;
        }

        result
    }

    /// Loads the file named on the command line. The name is associated with
    /// the session even when the file cannot be read, so `w` can create it.
    pub fn open_startup_file(
        &mut self,
        path: &std::path::Path,
        console: &mut crate::console::Console<'_>,
    ) {
        match self.document.open(path) {
            Ok(bytes) => {
                if let Err(error) = console.print(&bytes.to_string()) {
                    self.report(error, console);
                }
            }
            Err(error) => {
                self.document.set_filename(path);
                self.report(error, console);
            }
        }
    }

    /// Prints `?` for `error` and keeps its message for `h`.
    pub fn report(
        &mut self,
        error: editor_core::errors::EditorError,
        console: &mut crate::console::Console<'_>,
    ) {
        let kind = error.kind();

        match &error {
            editor_core::errors::EditorError::Open(source)
            | editor_core::errors::EditorError::Write(source)
            | editor_core::errors::EditorError::Input(source)
            | editor_core::errors::EditorError::Output(source) => {
                tracing::warn!(?kind, %error, %source, "command failed");
            }
            _ => tracing::debug!(?kind, %error, "command failed"),
        }

        self.last_error = Some(error.to_string());

        if let Err(source) = console.print("?") {
            tracing::warn!(%source, "cannot report error");
        }
    }
}
