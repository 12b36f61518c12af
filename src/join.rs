/// Merging of preprocessed sources.
///
/// Declares the [`merger::SourceMerger`] seam through which a syntax-aware
/// merger plugs in, and the plain [`merger::ConcatMerger`] used by default.
pub mod merger;
/// The directory-to-document pipeline.
///
/// Reads each source, runs it through its own preprocessor instance and hands
/// the survivors to a merger.
///
/// # Responsibilities
/// - Keeps every source's symbol table independent.
/// - Tags preprocessor failures with the file they came from.
/// - Writes the merged result to a file or standard output.
pub mod pipeline;
/// Source discovery.
///
/// Finds the files to merge below an input directory, skipping build output
/// folders.
pub mod sources;
