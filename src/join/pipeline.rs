use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    error::JoinError,
    join::{merger::SourceMerger, sources::collect_sources},
    preprocessor::{evaluator::Options, preprocess_lines_with, symbols::SymbolTable},
    util::text::lines,
};

/// Reads and preprocesses one source file.
///
/// The file gets its own preprocessor run seeded from `symbols`. The surviving
/// lines are joined with `\n`.
///
/// # Errors
/// - `JoinError::Io` if the file cannot be read.
/// - `JoinError::Preprocess` if the preprocessor rejects the file.
pub fn preprocess_file(path: &Path,
                       symbols: &SymbolTable,
                       options: Options)
                       -> Result<String, JoinError> {
    log::info!("Processing: {}", path.display());

    let source = fs::read_to_string(path).map_err(|source| JoinError::Io { path: path.to_path_buf(),
                                                                            source })?;

    let kept = preprocess_lines_with(lines(&source), symbols, options)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| JoinError::Preprocess { path: path.to_path_buf(),
                                                  source })?;

    Ok(kept.join("\n"))
}

/// Preprocesses every file in `paths` and hands the results to `merger` in
/// order.
///
/// Processing stops at the first failing file.
///
/// # Errors
/// Propagates the first error from [`preprocess_file`].
pub fn join_sources<P, M>(paths: &[P],
                          symbols: &SymbolTable,
                          options: Options,
                          mut merger: M)
                          -> Result<String, JoinError>
    where P: AsRef<Path>,
          M: SourceMerger
{
    for path in paths {
        let path = path.as_ref();
        let text = preprocess_file(path, symbols, options)?;
        merger.add_source(path, &text);
    }

    Ok(merger.finish())
}

/// Validates `config`, collects the sources below its input directory and
/// merges them.
///
/// # Errors
/// - Any validation error from [`Config::validate`].
/// - `JoinError::Walk` if the input directory cannot be scanned.
/// - Any error from [`join_sources`].
pub fn join_directory<M: SourceMerger>(config: &Config, merger: M) -> Result<String, JoinError> {
    config.validate()?;

    let sources = collect_sources(&config.input, &config.extension, &config.excluded)?;
    if sources.is_empty() {
        log::warn!("no .{} files found below {}", config.extension, config.input.display());
    }

    join_sources(&sources, &config.symbols, config.options, merger)
}

/// Writes the merged text to `output`, or to standard output when no file is
/// given.
///
/// # Errors
/// Returns `JoinError::Io` if writing fails.
pub fn write_output(output: Option<&Path>, text: &str) -> Result<(), JoinError> {
    match output {
        Some(path) => {
            fs::write(path, text).map_err(|source| JoinError::Io { path: path.to_path_buf(),
                                                                    source })?;
            log::info!("Wrote {}", path.display());
        },
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())
                  .and_then(|()| stdout.flush())
                  .map_err(|source| JoinError::Io { path: PathBuf::from("<stdout>"),
                                                    source })?;
        },
    }

    Ok(())
}
