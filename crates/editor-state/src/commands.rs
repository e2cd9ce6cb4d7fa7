/// A command line after address resolution, as handed to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub start: usize,
    pub end: usize,
    pub verb: char,
    /// The verb and everything after it, e.g. `w out.txt` or `s/a/b/g`.
    pub text: String,
}

impl Invocation {
    /// Text following the verb character.
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.text.get(self.verb.len_utf8()..).unwrap_or_default()
    }

    /// Splits the text into the command word and an optional blank-separated
    /// filename, e.g. `wq notes.txt` into `("wq", Some("notes.txt"))`.
    #[must_use]
    pub fn word_and_filename(&self) -> (&str, Option<std::path::PathBuf>) {
        let (word, rest) = self
            .text
            .split_once(char::is_whitespace)
            .unwrap_or((self.text.as_str(), ""));
        let rest = rest.trim();

        (
            word,
            (!rest.is_empty()).then(|| std::path::PathBuf::from(rest)),
        )
    }

    /// # Errors
    ///
    /// Returns `InvalidSuffix` if anything but blanks follows the verb.
    pub fn expect_no_suffix(&self) -> editor_core::errors::EditorResult<()> {
        if self.suffix().trim().is_empty() {
            Ok(())
        } else {
            Err(editor_core::errors::EditorError::InvalidSuffix)
        }
    }
}

/// What the read-eval loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub type Handler = fn(
    &mut crate::editor::Editor,
    &Invocation,
    &mut crate::console::Console<'_>,
) -> editor_core::errors::EditorResult<Outcome>;

/// Fixed mapping from verb character to handler.
pub struct CommandTable {
    handlers: std::collections::HashMap<char, Handler>,
}

impl CommandTable {
    #[must_use]
    pub fn new() -> Self {
        let entries: [(char, Handler); 14] = [
            ('p', crate::handlers::print),
            ('n', crate::handlers::print),
            ('l', crate::handlers::print),
            ('i', crate::handlers::insert),
            ('a', crate::handlers::insert),
            ('d', crate::handlers::delete),
            ('c', crate::handlers::change),
            ('e', crate::handlers::open),
            ('E', crate::handlers::open),
            ('w', crate::handlers::write),
            ('h', crate::handlers::help),
            ('q', crate::handlers::quit),
            ('Q', crate::handlers::quit),
            ('s', crate::handlers::substitute),
        ];

        Self {
            handlers: entries.into_iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, verb: char) -> Option<Handler> {
        self.handlers.get(&verb).copied()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut verbs: Vec<char> = self.handlers.keys().copied().collect();
        verbs.sort_unstable();

        f.debug_struct("CommandTable").field("verbs", &verbs).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(verb: char, text: &str) -> Invocation {
        Invocation {
            start: 1,
            end: 1,
            verb,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_table_knows_every_verb() {
        let table = CommandTable::new();

        for verb in "pnliadceEwhqQs".chars() {
            assert!(table.get(verb).is_some(), "missing handler for {verb:?}");
        }
        assert!(table.get('x').is_none());
        assert!(table.get('u').is_none());
        assert!(table.get('=').is_none());
    }

    #[test]
    fn test_suffix_checks() {
        assert!(invocation('p', "p").expect_no_suffix().is_ok());
        assert!(invocation('d', "d  ").expect_no_suffix().is_ok());
        assert!(invocation('p', "px").expect_no_suffix().is_err());
        assert_eq!(invocation('q', "q!").suffix(), "!");
    }

    #[test]
    fn test_word_and_filename() {
        let bare = invocation('w', "w");
        let (word, name) = bare.word_and_filename();
        assert_eq!((word, name), ("w", None));

        let write_quit = invocation('w', "wq  out.txt ");
        let (word, name) = write_quit.word_and_filename();
        assert_eq!(word, "wq");
        assert_eq!(name, Some(std::path::PathBuf::from("out.txt")));

        let edit = invocation('e', "e\tnotes.md");
        let (word, name) = edit.word_and_filename();
        assert_eq!(word, "e");
        assert_eq!(name, Some(std::path::PathBuf::from("notes.md")));
    }
}
