/// Addresses resolved so far. Only the last two matter for the final range,
/// but the count decides whether there was one address or several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AddressList {
    previous: Option<usize>,
    last: Option<usize>,
    count: usize,
}

impl AddressList {
    fn push(&mut self, addr: usize) {
        self.previous = self.last;
        self.last = Some(addr);
        self.count += 1;
    }
}

/// Parser state for one command line.
///
/// Owns its scanner and a private copy of the live cursor and last pattern, so
/// resolution never touches editor state; the caller decides whether to adopt
/// the results.
#[derive(Debug)]
pub struct AddressParser<'buf> {
    scanner: crate::address::scanner::Scanner,
    buffer: &'buf crate::text::TextBuffer,
    current: usize,
    pattern: Option<regex::Regex>,
    pattern_changed: bool,
    addresses: AddressList,
}

impl<'buf> AddressParser<'buf> {
    #[must_use]
    pub fn new(
        text: &str,
        buffer: &'buf crate::text::TextBuffer,
        current: usize,
        pattern: Option<&regex::Regex>,
    ) -> Self {
        Self {
            scanner: crate::address::scanner::Scanner::new(text),
            buffer,
            current,
            pattern: pattern.cloned(),
            pattern_changed: false,
            addresses: AddressList::default(),
        }
    }

    /// Consumes the parser and produces the resolved range.
    ///
    /// # Errors
    ///
    /// - `InvalidAddress` for malformed or out-of-range addresses.
    /// - `InvalidPattern` / `NoPreviousPattern` for pattern addresses that
    ///   cannot be compiled or have nothing to reuse.
    /// - `NoMatch` when a pattern address finds nothing.
    pub fn resolve(mut self) -> crate::errors::EditorResult<crate::address::Resolution> {
        self.parse_range()?;

        let last_line = self.buffer.line_count();
        let rest = self.scanner.rest();

        let (start, end, rest) = match (self.addresses.count, rest.is_empty()) {
            // Bare Enter: step to the next line and print it
            (0, true) => {
                let next = self.current + 1;
                self.check(next)?;
                (next, next, String::from("p"))
            }
            (0, false) => (self.current, self.current, rest),
            (count, rest_empty) => {
                let end = self
                    .addresses
                    .last
                    .ok_or(crate::errors::EditorError::InvalidAddress)?;
                let start = if count == 1 {
                    end
                } else {
                    self.addresses
                        .previous
                        .ok_or(crate::errors::EditorError::InvalidAddress)?
                };
                let rest = if rest_empty { String::from("p") } else { rest };
                (start, end, rest)
            }
        };

        if start > end || end > last_line {
            return Err(crate::errors::EditorError::InvalidAddress);
        }

        tracing::debug!(start, end, verb = ?rest.chars().next(), "resolved addresses");

        Ok(crate::address::Resolution {
            start,
            end,
            rest,
            current: self.current,
            pattern: if self.pattern_changed {
                self.pattern
            } else {
                None
            },
        })
    }

    /*

    ==========================
    ===== RANGE GRAMMAR ======
    ==========================

    */

    fn parse_range(&mut self) -> crate::errors::EditorResult<()> {
        self.scanner.skip_blanks();

        if self.scanner.eat('%') {
            self.scanner.commit();
            self.push(1usize.min(self.buffer.line_count()))?;
            self.push(self.buffer.line_count())?;
            return Ok(());
        }

        let mut pending = self.parse_component()?;

        loop {
            self.scanner.skip_blanks();

            let separator = match self.scanner.peek() {
                Some(ch @ (',' | ';')) => ch,
                _ => break,
            };
            self.scanner.bump();
            self.scanner.commit();

            let left_omitted = pending.is_none();
            let left = match pending {
                Some(addr) => addr,
                None if separator == ';' => self.current,
                None => 1usize.min(self.buffer.line_count()),
            };
            self.push(left)?;

            if separator == ';' {
                self.current = left;
            }

            pending = self.parse_component()?;

            // `,` and `;` on their own stand for the range up to the last line
            if pending.is_none() && left_omitted {
                pending = Some(self.buffer.line_count());
            }
        }

        if let Some(addr) = pending {
            self.push(addr)?;
        }

        Ok(())
    }

    /// One address: an optional base followed by any number of offsets.
    /// Returns `None` when the component is empty.
    fn parse_component(&mut self) -> crate::errors::EditorResult<Option<usize>> {
        self.scanner.skip_blanks();

        let mut value = self.parse_base()?;

        loop {
            self.scanner.skip_blanks();

            match self.scanner.peek() {
                Some(sign @ ('+' | '-')) => {
                    self.scanner.bump();
                    self.scanner.commit();
                    self.scanner.skip_blanks();

                    let magnitude = match self.scanner.digits() {
                        Some(run) => parse_number(&run)?,
                        None => 1,
                    };
                    let base = value.unwrap_or(to_signed(self.current)?);
                    let offset = if sign == '-' { -magnitude } else { magnitude };

                    value = Some(
                        base.checked_add(offset)
                            .ok_or(crate::errors::EditorError::InvalidAddress)?,
                    );
                }
                // A digit run, `.`, `$` or a pattern may only open a component
                Some(ch) if ch.is_ascii_digit() || matches!(ch, '.' | '$' | '/' | '?') => {
                    return Err(crate::errors::EditorError::InvalidAddress);
                }
                _ => break,
            }
        }

        value.map(to_unsigned).transpose()
    }

    fn parse_base(&mut self) -> crate::errors::EditorResult<Option<i64>> {
        let Some(ch) = self.scanner.peek() else {
            return Ok(None);
        };

        let addr = match ch {
            '0'..='9' => match self.scanner.digits() {
                Some(run) => parse_number(&run)?,
                None => return Ok(None),
            },
            '.' => {
                self.scanner.bump();
                self.scanner.commit();
                to_signed(self.current)?
            }
            '$' => {
                self.scanner.bump();
                self.scanner.commit();
                to_signed(self.buffer.line_count())?
            }
            '/' | '?' => {
                self.scanner.bump();
                let raw = self.scanner.delimited(ch);
                to_signed(self.search(ch, &raw)?)?
            }
            _ => return Ok(None),
        };

        Ok(Some(addr))
    }

    /*

    ==========================
    ======== HELPERS =========
    ==========================

    */

    fn search(&mut self, delimiter: char, raw: &str) -> crate::errors::EditorResult<usize> {
        let direction = crate::enums::Direction::from_delimiter(delimiter)
            .ok_or(crate::errors::EditorError::InvalidAddress)?;

        if !raw.is_empty() {
            self.pattern = Some(regex::Regex::new(raw)?);
            self.pattern_changed = true;
        }

        let pattern = self
            .pattern
            .as_ref()
            .ok_or(crate::errors::EditorError::NoPreviousPattern)?;

        crate::search::search(self.buffer, self.current, direction, pattern)
    }

    fn check(&self, addr: usize) -> crate::errors::EditorResult<()> {
        let last_line = self.buffer.line_count();

        // 0 only exists while the document is empty
        if addr > last_line || (addr == 0 && last_line > 0) {
            return Err(crate::errors::EditorError::InvalidAddress);
        }

        Ok(())
    }

    fn push(&mut self, addr: usize) -> crate::errors::EditorResult<()> {
        self.check(addr)?;
        self.addresses.push(addr);

        Ok(())
    }
}

fn parse_number(run: &str) -> crate::errors::EditorResult<i64> {
    run.parse::<i64>()
        .map_err(|_| crate::errors::EditorError::InvalidAddress)
}

fn to_signed(addr: usize) -> crate::errors::EditorResult<i64> {
    i64::try_from(addr).map_err(|_| crate::errors::EditorError::InvalidAddress)
}

fn to_unsigned(addr: i64) -> crate::errors::EditorResult<usize> {
    usize::try_from(addr).map_err(|_| crate::errors::EditorError::InvalidAddress)
}
