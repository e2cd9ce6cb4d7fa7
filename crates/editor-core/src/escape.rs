/// Renders `line` the way the `l` command shows it: backslash, tab, bell,
/// backspace, carriage return and newline become backslash escapes, and a `$`
/// marks where the line ends.
#[must_use]
pub fn escape_unambiguous(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len() + 1);

    for ch in line.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\u{7}' => escaped.push_str("\\a"),
            '\u{8}' => escaped.push_str("\\b"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }

    escaped.push('$');
    escaped
}
