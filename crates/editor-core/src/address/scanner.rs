/// A two-index scanner over one command line.
///
/// `committed` only advances when a token has been fully recognised.
/// `speculative` runs ahead while a token is being tried; a failed attempt
/// rewinds it to `committed`, so no partial match state needs to be copied.
#[derive(Debug, Clone)]
pub struct Scanner {
    text: Vec<char>,
    committed: usize,
    speculative: usize,
}

impl Scanner {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            committed: 0,
            speculative: 0,
        }
    }

    /// Called on token match success.
    #[inline]
    pub fn commit(&mut self) {
        self.committed = self.speculative;
    }

    /// Called on token match failure.
    #[inline]
    pub fn rewind(&mut self) {
        self.speculative = self.committed;
    }

    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.text.get(self.speculative).copied()
    }

    /// Consumes one character speculatively.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.speculative += 1;

        Some(ch)
    }

    /// Consumes `expected` speculatively if it is next.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.speculative += 1;
            true
        } else {
            false
        }
    }

    /// Consumes spaces and tabs and commits them.
    pub fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.speculative += 1;
        }

        self.commit();
    }

    /// Consumes a run of ASCII digits. Commits and returns them if there was at
    /// least one, otherwise rewinds and returns `None`.
    pub fn digits(&mut self) -> Option<String> {
        let start = self.speculative;

        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.speculative += 1;
        }

        if self.speculative == start {
            self.rewind();
            return None;
        }

        let run = self.text[start..self.speculative].iter().collect();
        self.commit();

        Some(run)
    }

    /// Consumes everything up to the next unescaped `delimiter` (or the end of
    /// input) and commits. The opening delimiter must already be consumed.
    ///
    /// A backslash before the delimiter yields the bare delimiter; every other
    /// escape is passed through untouched so regex escapes survive.
    pub fn delimited(&mut self, delimiter: char) -> String {
        let mut raw = String::new();

        while let Some(ch) = self.bump() {
            if ch == delimiter {
                break;
            }

            if ch == '\\' {
                match self.bump() {
                    Some(next) if next == delimiter => raw.push(next),
                    Some(next) => {
                        raw.push('\\');
                        raw.push(next);
                    }
                    None => raw.push('\\'),
                }
                continue;
            }

            raw.push(ch);
        }

        self.commit();

        raw
    }

    /// Text from the committed position to the end.
    #[must_use]
    pub fn rest(&self) -> String {
        self.text[self.committed.min(self.text.len())..].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewind_returns_to_last_commit() {
        let mut scanner = Scanner::new("ab");

        assert_eq!(scanner.bump(), Some('a'));
        scanner.rewind();
        assert_eq!(scanner.peek(), Some('a'));

        scanner.bump();
        scanner.commit();
        scanner.bump();
        scanner.rewind();
        assert_eq!(scanner.peek(), Some('b'));
        assert_eq!(scanner.rest(), "b");
    }

    #[test]
    fn test_rest_ignores_uncommitted_progress() {
        let mut scanner = Scanner::new("12p");

        scanner.bump();
        assert_eq!(scanner.rest(), "12p");
    }

    #[test]
    fn test_digits() {
        let mut scanner = Scanner::new("42x");

        assert_eq!(scanner.digits().as_deref(), Some("42"));
        assert_eq!(scanner.rest(), "x");
        assert_eq!(scanner.digits(), None);
        assert_eq!(scanner.peek(), Some('x'));
    }

    #[test]
    fn test_skip_blanks_commits() {
        let mut scanner = Scanner::new(" \t p");

        scanner.skip_blanks();
        assert_eq!(scanner.rest(), "p");
    }

    #[test]
    fn test_eat() {
        let mut scanner = Scanner::new(",p");

        assert!(!scanner.eat(';'));
        assert!(scanner.eat(','));
        scanner.commit();
        assert_eq!(scanner.rest(), "p");
    }

    #[test]
    fn test_delimited_handles_escapes() {
        let mut scanner = Scanner::new(r"a\/b\d+/p");

        assert_eq!(scanner.delimited('/'), r"a/b\d+");
        assert_eq!(scanner.rest(), "p");
    }

    #[test]
    fn test_delimited_runs_to_end_without_closer() {
        let mut scanner = Scanner::new("abc");

        assert_eq!(scanner.delimited('?'), "abc");
        assert_eq!(scanner.rest(), "");
    }
}
