pub type EditorResult<T> = Result<T, EditorError>;

/// Every failure a single command can run into.
///
/// The `Display` strings are what `h` prints back to the user.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("invalid address")]
    InvalidAddress,
    #[error("unknown command")]
    UnknownCommand,
    #[error("invalid command suffix")]
    InvalidSuffix,
    #[error("invalid command syntax")]
    InvalidSyntax,
    #[error("invalid pattern delimiter")]
    InvalidDelimiter,
    #[error("no previous pattern")]
    NoPreviousPattern,
    #[error("invalid regular expression")]
    InvalidPattern(#[from] regex::Error),
    #[error("no match")]
    NoMatch,
    #[error("no current filename")]
    NoFilename,
    #[error("cannot open input file")]
    Open(#[source] std::io::Error),
    #[error("cannot write to file")]
    Write(#[source] std::io::Error),
    #[error("cannot read input")]
    Input(#[source] std::io::Error),
    #[error("cannot write output")]
    Output(#[source] std::io::Error),
    #[error("warning: file modified")]
    Modified,
}

impl EditorError {
    #[must_use]
    pub fn kind(&self) -> crate::enums::ErrorKind {
        match self {
            EditorError::InvalidAddress => crate::enums::ErrorKind::Address,
            EditorError::UnknownCommand
            | EditorError::InvalidSuffix
            | EditorError::InvalidSyntax => crate::enums::ErrorKind::UnknownCommand,
            EditorError::InvalidDelimiter
            | EditorError::NoPreviousPattern
            | EditorError::InvalidPattern(_) => crate::enums::ErrorKind::Pattern,
            EditorError::NoMatch => crate::enums::ErrorKind::NoMatch,
            EditorError::NoFilename
            | EditorError::Open(_)
            | EditorError::Write(_)
            | EditorError::Input(_)
            | EditorError::Output(_) => crate::enums::ErrorKind::Io,
            EditorError::Modified => crate::enums::ErrorKind::ModifiedWarning,
        }
    }
}
