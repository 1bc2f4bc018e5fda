/// A text document split into lines.
///
/// Line terminators (`\n` or `\r\n`) are not part of the lines. Whether the
/// text ended with a terminator is remembered separately so that joining the
/// lines back yields the same text, modulo `\r\n` becoming `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lines<'a> {
    lines: Vec<&'a str>,
    trailing_newline: bool,
}

impl<'a> Lines<'a> {
    #[must_use]
    pub fn lines(&self) -> &[&'a str] { &self.lines }

    #[must_use]
    pub fn has_trailing_newline(&self) -> bool { self.trailing_newline }

    #[must_use]
    pub fn len(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

/// Splits text into lines.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!"   -> ["Hello", "World!"], no trailing newline
/// "C\r\nG\r\n"      -> ["C", "G"], trailing newline
/// ""                -> [], no trailing newline
/// ```
#[must_use]
pub fn line_tokenizer(text: &str) -> Lines<'_> {
    if text.is_empty() {
        return Lines::default();
    }

    let (body, trailing_newline) = match text.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (text, false),
    };

    Lines {
        lines: body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect(),
        trailing_newline,
    }
}

/// Inverse of [`line_tokenizer`]: joins `lines` with `\n` and appends a final
/// `\n` when `trailing_newline` is set and there is at least one line.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S], trailing_newline: bool) -> String {
    let mut result = String::with_capacity(lines.iter().map(|line| line.as_ref().len() + 1).sum());

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(line.as_ref());
    }

    if trailing_newline && !lines.is_empty() {
        result.push('\n');
    }

    result
}
