/// Walks the document cyclically from the line next to `from` and returns the
/// first address whose text satisfies `is_match`.
///
/// Forward scans go `from+1, ..., last, 1, ..., from`; backward scans mirror
/// that. The starting line is tested last, so a miss costs exactly one
/// comparison per line.
///
/// # Errors
///
/// Returns `NoMatch` if no line matches or the buffer is empty.
pub fn search_with<F>(
    buffer: &crate::text::TextBuffer,
    from: usize,
    direction: crate::enums::Direction,
    mut is_match: F,
) -> crate::errors::EditorResult<usize>
where
    F: FnMut(&str) -> bool,
{
    let count = buffer.line_count();

    if count == 0 {
        return Err(crate::errors::EditorError::NoMatch);
    }

    // Address 0 has no neighbours of its own; treat it as sitting just before line 1.
    let mut addr = from.min(count);

    for _ in 0..count {
        addr = match direction {
            crate::enums::Direction::Forward => addr % count + 1,
            crate::enums::Direction::Backward if addr <= 1 => count,
            crate::enums::Direction::Backward => addr - 1,
        };

        if let Some(line) = buffer.get_line(addr)
            && is_match(line)
        {
            return Ok(addr);
        }
    }

    Err(crate::errors::EditorError::NoMatch)
}

/// [`search_with`] driven by a compiled pattern.
///
/// # Errors
///
/// Returns `NoMatch` if no line matches `pattern`.
pub fn search(
    buffer: &crate::text::TextBuffer,
    from: usize,
    direction: crate::enums::Direction,
    pattern: &regex::Regex,
) -> crate::errors::EditorResult<usize> {
    let found = search_with(buffer, from, direction, |line| pattern.is_match(line));

    tracing::debug!(from, ?direction, pattern = pattern.as_str(), ?found, "pattern search");

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Direction;
    use crate::errors::EditorError;
    use crate::text::TextBuffer;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    fn re(pattern: &str) -> regex::Regex {
        regex::Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_forward_skips_current_line() {
        let doc = buffer(&["x", "y", "x", "y"]);

        assert_eq!(search(&doc, 1, Direction::Forward, &re("x")).unwrap(), 3);
        assert_eq!(search(&doc, 2, Direction::Forward, &re("y")).unwrap(), 4);
    }

    #[test]
    fn test_forward_wraps_to_first_line() {
        let doc = buffer(&["target", "b", "c"]);

        assert_eq!(search(&doc, 2, Direction::Forward, &re("target")).unwrap(), 1);
    }

    #[test]
    fn test_backward_wraps_to_last_line() {
        let doc = buffer(&["a", "b", "target"]);

        assert_eq!(search(&doc, 1, Direction::Backward, &re("target")).unwrap(), 3);
        assert_eq!(search(&doc, 3, Direction::Backward, &re("a")).unwrap(), 1);
    }

    #[test]
    fn test_current_line_is_tested_last() {
        let doc = buffer(&["only", "other"]);

        assert_eq!(search(&doc, 1, Direction::Forward, &re("only")).unwrap(), 1);
        assert_eq!(search(&doc, 1, Direction::Backward, &re("only")).unwrap(), 1);
    }

    #[test]
    fn test_single_match_found_from_every_line() {
        let lines: Vec<String> = (1..=7).map(|n| format!("row {n}")).collect();
        let doc = TextBuffer::from_lines(lines);

        for from in 1..=7 {
            for direction in [Direction::Forward, Direction::Backward] {
                let mut steps = 0;
                let found = search_with(&doc, from, direction, |line| {
                    steps += 1;
                    line == "row 5"
                });

                assert_eq!(found.unwrap(), 5);
                assert!(steps <= 7, "took {steps} steps from {from}");
            }
        }
    }

    #[test]
    fn test_miss_costs_exactly_one_comparison_per_line() {
        let doc = buffer(&["a", "b", "c", "d", "e"]);
        let mut comparisons = 0;

        let result = search_with(&doc, 3, Direction::Forward, |_| {
            comparisons += 1;
            false
        });

        assert!(matches!(result, Err(EditorError::NoMatch)));
        assert_eq!(comparisons, 5);
    }

    #[test]
    fn test_empty_buffer_has_no_match() {
        let doc = TextBuffer::new();

        assert!(matches!(
            search(&doc, 0, Direction::Forward, &re(".*")),
            Err(EditorError::NoMatch)
        ));
    }

    #[test]
    fn test_from_zero_starts_at_first_line() {
        let doc = buffer(&["hit", "miss"]);

        // Guarded by the resolver in practice, but the walk still has to be sane
        assert_eq!(search(&doc, 0, Direction::Forward, &re("hit")).unwrap(), 1);
    }
}
