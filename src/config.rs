use std::path::PathBuf;

use crate::{
    error::JoinError,
    join::sources::DEFAULT_EXCLUDED,
    preprocessor::{evaluator::Options, symbols::SymbolTable},
};

/// Default source file extension.
pub const DEFAULT_EXTENSION: &str = "cs";
/// Environment variable holding extra comma-separated symbols.
pub const DEFINES_ENV: &str = "SOURCEJOIN_DEFINES";

/// Everything needed to merge one directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the sources.
    pub input:     PathBuf,
    /// Target file. `None` writes to standard output.
    pub output:    Option<PathBuf>,
    /// Symbols every source starts with.
    pub symbols:   SymbolTable,
    /// Source extension without the dot.
    pub extension: String,
    /// Directory names below `input` that are not scanned.
    pub excluded:  Vec<String>,
    /// Evaluation options applied to every source.
    pub options:   Options,
}

impl Config {
    /// Creates a configuration for `input` with default settings: output to
    /// standard output, no symbols, `.cs` sources, `bin` and `obj` excluded,
    /// lenient evaluation.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input:     input.into(),
               output:    None,
               symbols:   SymbolTable::new(),
               extension: DEFAULT_EXTENSION.to_string(),
               excluded:  DEFAULT_EXCLUDED.iter().map(ToString::to_string).collect(),
               options:   Options::default(), }
    }

    /// Checks the configuration against the file system.
    ///
    /// # Errors
    /// - `JoinError::InputNotFound` if `input` does not exist.
    /// - `JoinError::InputNotDirectory` if `input` is not a directory.
    /// - `JoinError::OutputExtension` if `output` does not end in the source
    ///   extension.
    pub fn validate(&self) -> Result<(), JoinError> {
        if !self.input.exists() {
            return Err(JoinError::InputNotFound { path: self.input.clone() });
        }
        if !self.input.is_dir() {
            return Err(JoinError::InputNotDirectory { path: self.input.clone() });
        }
        if let Some(output) = &self.output {
            let found = output.extension()
                              .map(|ext| ext.to_string_lossy().into_owned())
                              .unwrap_or_default();
            if found != self.extension {
                return Err(JoinError::OutputExtension { expected: self.extension.clone(),
                                                        found });
            }
        }

        Ok(())
    }
}

/// Reads the symbols listed in [`DEFINES_ENV`], if set.
#[must_use]
pub fn symbols_from_env() -> SymbolTable {
    std::env::var(DEFINES_ENV).map(|list| SymbolTable::parse_list(&list))
                              .unwrap_or_default()
}
