use std::iter::FusedIterator;

/// Returns `true` for empty and whitespace-only lines.
///
/// ## Example
/// ```
/// use sourcejoin::util::text::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t"));
/// assert!(!is_blank("  x"));
/// ```
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits text into lines, accepting `\n`, `\r\n` and a lone `\r` as line
/// endings.
///
/// The terminators are not part of the yielded lines. A final terminator does
/// not start another line, so `"a\n"` yields only `"a"` and `""` yields
/// nothing.
///
/// ## Example
/// ```
/// use sourcejoin::util::text::lines;
///
/// let split: Vec<_> = lines("one\r\ntwo\rthree\n\nfour\n").collect();
/// assert_eq!(split, ["one", "two", "three", "", "four"]);
/// ```
#[must_use]
pub const fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &self.rest[..end];
                let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + terminator..];
                Some(line)
            },
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            },
        }
    }
}

impl FusedIterator for Lines<'_> {}
