#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstituteFlags {
    /// `g`: every non-overlapping match on a line, not just the first.
    pub global: bool,
    /// `i`
    pub case_insensitive: bool,
    /// `p`
    pub print: bool,
}

/// A parsed `s` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// `None` when the pattern field was empty and the last pattern applies.
    pub pattern: Option<String>,
    /// Replacement already rewritten into `regex` template syntax.
    pub template: String,
    pub flags: SubstituteFlags,
    /// Print the last line of the range afterwards.
    pub auto_print: bool,
}

impl Substitution {
    /// Parses the command text starting at the `s` verb, e.g. `s/foo/bar/g`.
    ///
    /// # Errors
    ///
    /// - `InvalidDelimiter` if the delimiter is whitespace.
    /// - `InvalidSyntax` unless there are 2 to 4 delimiter-separated fields,
    ///   counting the verb itself.
    /// - `InvalidSuffix` for an unknown flag.
    pub fn parse(text: &str) -> crate::errors::EditorResult<Self> {
        let body = text
            .strip_prefix('s')
            .ok_or(crate::errors::EditorError::UnknownCommand)?;
        let delimiter = body.chars().next().unwrap_or('/');

        if delimiter.is_whitespace() {
            return Err(crate::errors::EditorError::InvalidDelimiter);
        }

        let fields = split_fields(body, delimiter);

        if !(2..=4).contains(&fields.len()) {
            return Err(crate::errors::EditorError::InvalidSyntax);
        }

        let pattern = fields.get(1).filter(|p| !p.is_empty()).cloned();
        let template = fields
            .get(2)
            .map(|replacement| to_template(replacement))
            .unwrap_or_default();
        let flags = parse_flags(fields.get(3).map_or("", String::as_str))?;

        Ok(Self {
            pattern,
            template,
            flags,
            auto_print: flags.print || fields.len() == 3,
        })
    }

    /// Compiles the pattern field, or returns `None` if the last pattern
    /// should be reused.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern does not compile.
    pub fn compile(&self) -> crate::errors::EditorResult<Option<regex::Regex>> {
        let Some(pattern) = &self.pattern else {
            return Ok(None);
        };

        let regex = regex::RegexBuilder::new(pattern)
            .case_insensitive(self.flags.case_insensitive)
            .build()?;

        Ok(Some(regex))
    }

    /// Applies the replacement to one line.
    #[must_use]
    pub fn apply<'line>(
        &self,
        regex: &regex::Regex,
        line: &'line str,
    ) -> std::borrow::Cow<'line, str> {
        let limit = if self.flags.global { 0 } else { 1 };

        regex.replacen(line, limit, self.template.as_str())
    }
}

/// Splits on unescaped `delimiter`. The text before the first delimiter (empty
/// for well-formed input) is kept as field 0 so it stands in for the verb.
fn split_fields(body: &str, delimiter: char) -> Vec<String> {
    let mut fields = vec![String::new()];
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        if ch == delimiter {
            fields.push(String::new());
            continue;
        }

        let Some(field) = fields.last_mut() else {
            continue;
        };

        if ch == '\\' {
            match chars.next() {
                Some(next) if next == delimiter => field.push(next),
                Some(next) => {
                    field.push('\\');
                    field.push(next);
                }
                None => field.push('\\'),
            }
            continue;
        }

        field.push(ch);
    }

    fields
}

fn parse_flags(raw: &str) -> crate::errors::EditorResult<SubstituteFlags> {
    let mut flags = SubstituteFlags::default();

    for flag in raw.chars() {
        match flag {
            'g' => flags.global = true,
            'i' => flags.case_insensitive = true,
            'p' => flags.print = true,
            _ => return Err(crate::errors::EditorError::InvalidSuffix),
        }
    }

    Ok(flags)
}

/// Rewrites an ed replacement into `regex` template syntax:
/// `&` is the whole match, `\1`..`\9` are groups, `\&` and `\\` are literals,
/// and a bare `$` has no special meaning.
fn to_template(replacement: &str) -> String {
    let mut template = String::with_capacity(replacement.len());
    let mut chars = replacement.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '&' => template.push_str("${0}"),
            '$' => template.push_str("$$"),
            '\\' => match chars.next() {
                Some(digit @ '1'..='9') => {
                    template.push_str("${");
                    template.push(digit);
                    template.push('}');
                }
                Some('$') => template.push_str("$$"),
                Some(other) => template.push(other),
                None => template.push('\\'),
            },
            _ => template.push(ch),
        }
    }

    template
}

#[cfg(test)]
mod parse_tests {
    use super::*;
    use crate::errors::EditorError;

    #[test]
    fn test_field_counts() {
        let sub = Substitution::parse("s/a/b/g").unwrap();
        assert_eq!(sub.pattern.as_deref(), Some("a"));
        assert_eq!(sub.template, "b");
        assert!(sub.flags.global);
        assert!(!sub.auto_print);

        // Flags omitted: prints afterwards
        let sub = Substitution::parse("s/a/b").unwrap();
        assert!(sub.auto_print);

        // Trailing delimiter with empty flags: silent
        let sub = Substitution::parse("s/a/b/").unwrap();
        assert!(!sub.auto_print);

        // Pattern only: matches are deleted
        let sub = Substitution::parse("s/a").unwrap();
        assert_eq!(sub.template, "");
        assert!(!sub.auto_print);
    }

    #[test]
    fn test_bad_field_counts() {
        assert!(matches!(Substitution::parse("s"), Err(EditorError::InvalidSyntax)));
        assert!(matches!(
            Substitution::parse("s/a/b/g/x"),
            Err(EditorError::InvalidSyntax)
        ));
    }

    #[test]
    fn test_custom_and_bad_delimiters() {
        let sub = Substitution::parse("s#/usr#/opt#p").unwrap();
        assert_eq!(sub.pattern.as_deref(), Some("/usr"));
        assert_eq!(sub.template, "/opt");
        assert!(sub.flags.print);
        assert!(sub.auto_print);

        assert!(matches!(
            Substitution::parse("s a b "),
            Err(EditorError::InvalidDelimiter)
        ));
    }

    #[test]
    fn test_escaped_delimiter_does_not_split() {
        let sub = Substitution::parse(r"s/a\/b/c\/d/").unwrap();

        assert_eq!(sub.pattern.as_deref(), Some("a/b"));
        assert_eq!(sub.template, "c/d");
    }

    #[test]
    fn test_regex_escapes_survive() {
        let sub = Substitution::parse(r"s/\d+/N/").unwrap();

        assert_eq!(sub.pattern.as_deref(), Some(r"\d+"));
    }

    #[test]
    fn test_flags() {
        let sub = Substitution::parse("s/a/b/gip").unwrap();
        assert_eq!(
            sub.flags,
            SubstituteFlags {
                global: true,
                case_insensitive: true,
                print: true,
            }
        );

        assert!(matches!(
            Substitution::parse("s/a/b/x"),
            Err(EditorError::InvalidSuffix)
        ));
    }

    #[test]
    fn test_empty_pattern_means_reuse() {
        let sub = Substitution::parse("s//x/").unwrap();

        assert!(sub.pattern.is_none());
        assert!(sub.compile().unwrap().is_none());
    }

    #[test]
    fn test_template_translation() {
        assert_eq!(to_template("<&>"), "<${0}>");
        assert_eq!(to_template(r"\2-\1"), "${2}-${1}");
        assert_eq!(to_template(r"\&"), "&");
        assert_eq!(to_template(r"a\\b"), r"a\b");
        assert_eq!(to_template("$5"), "$$5");
    }
}

#[cfg(test)]
mod apply_tests {
    use super::*;

    fn run(command: &str, line: &str) -> String {
        let sub = Substitution::parse(command).unwrap();
        let regex = sub.compile().unwrap().unwrap();

        sub.apply(&regex, line).into_owned()
    }

    #[test]
    fn test_first_match_only_by_default() {
        assert_eq!(run("s/o/0/", "foo boo"), "f0o boo");
    }

    #[test]
    fn test_global() {
        assert_eq!(run("s/o/0/g", "foo boo"), "f00 b00");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(run("s/hello/bye/i", "HeLLo world"), "bye world");
        assert_eq!(run("s/hello/bye/", "HeLLo world"), "HeLLo world");
    }

    #[test]
    fn test_whole_match_and_groups() {
        assert_eq!(run("s/[0-9]+/<&>/g", "a1b22"), "a<1>b<22>");
        assert_eq!(run(r"s/(\w+) (\w+)/\2 \1/", "hello world"), "world hello");
    }

    #[test]
    fn test_dollar_is_literal() {
        assert_eq!(run("s/price/$5/", "price"), "$5");
    }

    #[test]
    fn test_identity_substitution_is_noop() {
        for line in ["", "x", "xxx", "axbxc", "no match here"] {
            assert_eq!(run("s/x/x/g", line), line);
        }
    }

    #[test]
    fn test_unmatched_line_unchanged() {
        assert_eq!(run("s/zzz/y/g", "abc"), "abc");
    }
}
