/// Which way a pattern search walks through the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `/pattern/`: towards the last line, wrapping to the first.
    Forward,
    /// `?pattern?`: towards the first line, wrapping to the last.
    Backward,
}

impl Direction {
    /// Maps a pattern address delimiter to its search direction.
    #[must_use]
    pub fn from_delimiter(delimiter: char) -> Option<Self> {
        match delimiter {
            '/' => Some(Direction::Forward),
            '?' => Some(Direction::Backward),
            _ => None,
        }
    }
}

/// Where typed-in lines go relative to the addressed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertPosition {
    /// `i` and `c`
    Before,
    /// `a`
    After,
}

/// How printed lines are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// `p`
    Plain,
    /// `n`: line number and a tab before the text.
    Numbered,
    /// `l`: control characters escaped, `$` marks the end.
    Unambiguous,
}

impl PrintMode {
    #[must_use]
    pub fn from_verb(verb: char) -> Option<Self> {
        match verb {
            'p' => Some(PrintMode::Plain),
            'n' => Some(PrintMode::Numbered),
            'l' => Some(PrintMode::Unambiguous),
            _ => None,
        }
    }

    /// Renders one line at `addr` for output.
    #[must_use]
    pub fn render(self, addr: usize, line: &str) -> String {
        match self {
            PrintMode::Plain => line.to_string(),
            PrintMode::Numbered => format!("{addr}\t{line}"),
            PrintMode::Unambiguous => crate::escape::escape_unambiguous(line),
        }
    }
}

/// Broad classes of command failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range address.
    Address,
    /// Unknown verb, or a known verb with unusable trailing text.
    UnknownCommand,
    /// File could not be opened, read or created.
    Io,
    /// Bad regular expression, bad delimiter, or no pattern to reuse.
    Pattern,
    /// A search went all the way round without a hit.
    NoMatch,
    /// Unsaved changes would be lost. Retrying the command proceeds.
    ModifiedWarning,
}
