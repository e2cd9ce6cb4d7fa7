/// # Address Module.
///
/// Turns the address prefix of a command line into a line range. Parsing is
/// done by [`parser::AddressParser`] on top of the two-index
/// [`scanner::Scanner`]; pattern addresses call into [`crate::search`].
pub mod parser;
pub mod scanner;

/// The outcome of resolving the address prefix of one command line.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub start: usize,
    pub end: usize,
    /// Everything after the addresses: the verb and its arguments.
    /// Never empty; a missing verb becomes `p`.
    pub rest: String,
    /// The live cursor after any `;` moves.
    pub current: usize,
    /// A pattern compiled while resolving, to become the new last pattern.
    pub pattern: Option<regex::Regex>,
}

impl Resolution {
    /// The command character.
    #[must_use]
    pub fn verb(&self) -> char {
        self.rest.chars().next().unwrap_or('p')
    }
}

/// Resolves the address prefix of `text` against `buffer`.
///
/// # Errors
///
/// See [`parser::AddressParser::resolve`].
pub fn resolve(
    text: &str,
    buffer: &crate::text::TextBuffer,
    current: usize,
    pattern: Option<&regex::Regex>,
) -> crate::errors::EditorResult<Resolution> {
    parser::AddressParser::new(text, buffer, current, pattern).resolve()
}
