//! # sourcejoin
//!
//! sourcejoin merges a directory of C#-style source files into a single file.
//! Before merging, every file is run through a line-based preprocessor that
//! evaluates `#if`/`#elif`/`#else`/`#endif` against a set of defined symbols,
//! applies `#define`/`#undef`, and stops on `#error`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::{JoinError, PreprocessError},
    join::{
        merger::ConcatMerger,
        pipeline::{join_directory, write_output},
    },
    preprocessor::{preprocess_lines, symbols::SymbolTable},
    util::text::lines,
};

/// Command line arguments.
///
/// Declares the `clap` parser used by the `sourcejoin` binary and turns parsed
/// arguments into a [`config::Config`].
pub mod cli;
/// Run configuration.
///
/// Holds the input folder, output target, initial symbols and evaluation
/// options for one merge, and validates them against the file system.
pub mod config;
/// Provides unified error types for preprocessing and merging.
///
/// This module defines every error that can stop a run, from malformed
/// directives to unreadable files. Errors implement the standard error traits
/// and chain their causes through `source()`.
///
/// # Responsibilities
/// - Defines the preprocessor's fatal conditions.
/// - Wraps I/O, traversal and preprocessor failures with the path involved.
pub mod error;
/// Collects, preprocesses and merges source files.
///
/// This module finds the sources below an input directory, runs each through
/// its own preprocessor instance, and combines the results through a
/// pluggable merger.
pub mod join;
/// The conditional compilation preprocessor.
///
/// This module classifies lines into directives, keeps the defined symbols,
/// and evaluates nested conditional blocks in a single streaming pass.
///
/// # Responsibilities
/// - Recognises directive lines without understanding the host language.
/// - Selects at most one branch of every `#if` chain.
/// - Rejects malformed directives, `#error`, and late `#define`/`#undef`.
pub mod preprocessor;
/// General text utilities.
///
/// Line splitting that tolerates any line ending, and blank-line detection.
pub mod util;

/// Preprocesses one source text and returns the surviving lines joined with
/// `\n`.
///
/// # Errors
/// Returns the first [`PreprocessError`] raised by the input.
///
/// # Examples
/// ```
/// use sourcejoin::{preprocess, preprocessor::symbols::SymbolTable};
///
/// let source = "#if FOO\r\nFOO\r\n#if BAR\r\nBAR\r\n#else\r\nBAS\r\n#endif\r\nBAT\r\n#endif";
/// let symbols = SymbolTable::parse_list("FOO");
/// assert_eq!(preprocess(source, &symbols).unwrap(), "FOO\nBAS\nBAT");
///
/// // An explicit #error stops the run.
/// assert!(preprocess("#error not supported", &symbols).is_err());
/// ```
pub fn preprocess(source: &str, symbols: &SymbolTable) -> Result<String, PreprocessError> {
    let kept = preprocess_lines(lines(source), symbols).collect::<Result<Vec<_>, _>>()?;
    Ok(kept.join("\n"))
}

/// Preprocesses several independent sources lazily.
///
/// Each source starts from `symbols`; definitions in one source do not affect
/// the others.
///
/// # Examples
/// ```
/// use sourcejoin::{preprocess_units, preprocessor::symbols::SymbolTable};
///
/// let units = ["#define A\n#if A\na\n#endif", "#if A\na\n#endif"];
/// let results: Vec<_> = preprocess_units(units, &SymbolTable::new()).collect();
/// assert_eq!(results, [Ok("a".to_string()), Ok(String::new())]);
/// ```
pub fn preprocess_units<'a, U>(units: U,
                               symbols: &'a SymbolTable)
                               -> impl Iterator<Item = Result<String, PreprocessError>> + 'a
    where U: IntoIterator + 'a,
          U::Item: AsRef<str>,
          U::IntoIter: 'a
{
    units.into_iter().map(move |unit| preprocess(unit.as_ref(), symbols))
}

/// Merges the sources described by `config` and writes the result.
///
/// Uses [`ConcatMerger`] to combine sources.
///
/// # Errors
/// Returns an error if the configuration is invalid, a file cannot be read or
/// written, or a source is rejected by the preprocessor.
pub fn run(config: &Config) -> Result<(), JoinError> {
    let merged = join_directory(config, ConcatMerger::new())?;
    write_output(config.output.as_deref(), &merged)
}
