use std::path::Path;

use crate::util::text::is_blank;

/// Combines preprocessed sources into one document.
///
/// This is the seam to a syntax-aware merger that consolidates import lists,
/// namespaces and attributes with a full language parser. Implementations
/// receive each source after preprocessing, as the surviving lines joined with
/// `\n`, and never feed anything back into the preprocessor.
pub trait SourceMerger {
    /// Adds one preprocessed source.
    fn add_source(&mut self, path: &Path, text: &str);

    /// Produces the merged document.
    fn finish(self) -> String;
}

/// Concatenates sources in the order they are added.
///
/// Sources are separated by one blank line and the result ends with a
/// newline. Sources that are empty after preprocessing are left out.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use sourcejoin::join::merger::{ConcatMerger, SourceMerger};
///
/// let mut merger = ConcatMerger::new();
/// merger.add_source(Path::new("a.cs"), "class A {}");
/// merger.add_source(Path::new("b.cs"), "");
/// merger.add_source(Path::new("c.cs"), "class C {}\n");
/// assert_eq!(merger.finish(), "class A {}\n\nclass C {}\n");
/// ```
#[derive(Debug, Default)]
pub struct ConcatMerger {
    output: String,
}

impl ConcatMerger {
    /// Creates an empty merger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SourceMerger for ConcatMerger {
    fn add_source(&mut self, _path: &Path, text: &str) {
        let text = text.trim_end_matches(['\r', '\n']);
        if is_blank(text) {
            return;
        }
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn finish(self) -> String {
        self.output
    }
}
