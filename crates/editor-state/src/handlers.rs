//! One function per verb. Each receives a range that has already been
//! validated against the document, and either finishes its change or fails
//! before touching anything.

use crate::commands::{Invocation, Outcome};
use crate::console::Console;
use crate::editor::Editor;
use editor_core::errors::{EditorError, EditorResult};

/// `p`, `n` and `l`.
pub fn print(
    editor: &mut Editor,
    invocation: &Invocation,
    console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    let mode = editor_core::enums::PrintMode::from_verb(invocation.verb)
        .ok_or(EditorError::UnknownCommand)?;
    invocation.expect_no_suffix()?;

    if editor.document.text_buffer.is_empty() {
        return Err(EditorError::InvalidAddress);
    }

    for (addr, line) in editor
        .document
        .text_buffer
        .lines(invocation.start, invocation.end)
    {
        console.print(&mode.render(addr, line))?;
    }

    editor.document.cursor.set(invocation.end);

    Ok(Outcome::Continue)
}

/// `i` and `a`: read a block of text and splice it in before or after `end`.
pub fn insert(
    editor: &mut Editor,
    invocation: &Invocation,
    console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    invocation.expect_no_suffix()?;

    let position = if invocation.verb == 'i' {
        editor_core::enums::InsertPosition::Before
    } else {
        editor_core::enums::InsertPosition::After
    };
    let lines = console.read_block()?;

    editor.document.insert(position, invocation.end, lines)?;

    Ok(Outcome::Continue)
}

pub fn delete(
    editor: &mut Editor,
    invocation: &Invocation,
    _console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    invocation.expect_no_suffix()?;

    if editor.document.text_buffer.is_empty() {
        return Err(EditorError::InvalidAddress);
    }

    editor.document.delete(invocation.start, invocation.end)?;

    Ok(Outcome::Continue)
}

/// `c`: the replacement text is read before anything is deleted, so a failing
/// read leaves the range in place.
pub fn change(
    editor: &mut Editor,
    invocation: &Invocation,
    console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    invocation.expect_no_suffix()?;

    if editor.document.text_buffer.is_empty() {
        return Err(EditorError::InvalidAddress);
    }

    let lines = console.read_block()?;

    editor.document.delete(invocation.start, invocation.end)?;
    editor.document.insert(
        editor_core::enums::InsertPosition::Before,
        invocation.start,
        lines,
    )?;

    Ok(Outcome::Continue)
}

/// `e` and `E`. Only `e` is held back by unsaved changes.
pub fn open(
    editor: &mut Editor,
    invocation: &Invocation,
    console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    let (word, filename) = invocation.word_and_filename();

    if word.len() != invocation.verb.len_utf8() {
        return Err(EditorError::InvalidSuffix);
    }

    let path = filename.ok_or(EditorError::NoFilename)?;

    if invocation.verb == 'e' {
        editor.document.confirm_discard()?;
    }

    let bytes = editor.document.open(&path)?;
    console.print(&bytes.to_string())?;

    Ok(Outcome::Continue)
}

/// `w` and `wq`. The whole document is written regardless of the range.
pub fn write(
    editor: &mut Editor,
    invocation: &Invocation,
    console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    let (word, filename) = invocation.word_and_filename();

    let outcome = match word {
        "w" => Outcome::Continue,
        "wq" => Outcome::Quit,
        _ => return Err(EditorError::InvalidSuffix),
    };

    let bytes = editor.document.write(filename)?;
    console.print(&bytes.to_string())?;

    Ok(outcome)
}

/// `h`: explain the last `?`.
pub fn help(
    editor: &mut Editor,
    invocation: &Invocation,
    console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    invocation.expect_no_suffix()?;

    if let Some(message) = editor.last_error() {
        console.print(message)?;
    }

    Ok(Outcome::Continue)
}

/// `q` asks once before dropping unsaved changes; `Q` never does.
pub fn quit(
    editor: &mut Editor,
    invocation: &Invocation,
    _console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    invocation.expect_no_suffix()?;

    if invocation.verb == 'q' {
        editor.document.confirm_discard()?;
    }

    Ok(Outcome::Quit)
}

pub fn substitute(
    editor: &mut Editor,
    invocation: &Invocation,
    console: &mut Console<'_>,
) -> EditorResult<Outcome> {
    let substitution = editor_core::substitute::Substitution::parse(&invocation.text)?;

    if editor.document.text_buffer.is_empty() {
        return Err(EditorError::InvalidAddress);
    }

    let compiled = substitution.compile()?;
    let regex = match &compiled {
        Some(regex) => regex.clone(),
        None => editor
            .last_pattern()
            .cloned()
            .ok_or(EditorError::NoPreviousPattern)?,
    };

    if let Some(regex) = compiled {
        editor.remember_pattern(regex);
    }

    let mut changed = 0usize;

    for addr in invocation.start..=invocation.end {
        let replaced = match editor.document.text_buffer.get_line(addr) {
            Some(line) => match substitution.apply(&regex, line) {
                std::borrow::Cow::Owned(text) => Some(text),
                std::borrow::Cow::Borrowed(_) => None,
            },
            None => None,
        };

        if let Some(text) = replaced {
            editor.document.text_buffer.replace_line(addr, text)?;
            changed += 1;
        }
    }

    tracing::debug!(
        start = invocation.start,
        end = invocation.end,
        pattern = regex.as_str(),
        changed,
        "substituted"
    );

    editor.document.cursor.set(invocation.end);
    editor.document.mark_modified();

    if substitution.auto_print
        && let Some(line) = editor.document.text_buffer.get_line(invocation.end)
    {
        console.print(line)?;
    }

    Ok(Outcome::Continue)
}
