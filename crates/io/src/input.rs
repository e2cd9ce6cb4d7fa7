/// A source of input lines, without their line terminators.
pub trait LineSource {
    /// Returns the next line, or `None` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

/// Line that ends a block of text typed after `a`, `i` or `c`.
pub const BLOCK_TERMINATOR: &str = ".";

/// Adapts any buffered reader (usually locked stdin) into a [`LineSource`].
///
/// Lines are decoded like file contents: invalid UTF-8 is replaced rather
/// than rejected.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: std::io::BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: std::io::BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();

        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }

        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

impl LineSource for std::collections::VecDeque<String> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Collects lines until one equal to [`BLOCK_TERMINATOR`] or the end of input.
/// The terminator is consumed but not returned.
///
/// # Errors
///
/// Returns the first error reported by `source`.
pub fn read_block(source: &mut dyn LineSource) -> std::io::Result<Vec<String>> {
    let mut block = Vec::new();

    while let Some(line) = source.next_line()? {
        if line == BLOCK_TERMINATOR {
            break;
        }

        block.push(line);
    }

    Ok(block)
}
