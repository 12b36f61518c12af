/// Line handling helpers.
///
/// This module splits source text into lines independently of the platform's
/// line endings, and decides which lines count as blank. The preprocessor is
/// line oriented and relies on both.
pub mod text;
